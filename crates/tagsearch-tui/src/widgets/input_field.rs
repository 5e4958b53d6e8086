//! Single-line text input used for the query and tag fields.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputFieldState {
    pub value: String,
    /// Byte offset of the cursor within `value`.
    pub cursor: usize,
}

impl InputFieldState {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the contents and park the cursor at the end.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Handle a text-editing event; everything else is ignored.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Char(c) => {
                self.value.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
            }
            AppEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_boundary();
                    self.value.remove(prev);
                    self.cursor = prev;
                }
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.prev_boundary();
                }
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.value.len() {
                    self.cursor = self.value[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.value.len());
                }
            }
            _ => {}
        }
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct InputField<'a> {
    state: &'a InputFieldState,
    title: &'a str,
    placeholder: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> InputField<'a> {
    pub fn new(
        state: &'a InputFieldState,
        title: &'a str,
        placeholder: &'a str,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            title,
            placeholder,
            focused,
            theme,
        }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.value[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(2));
        (x, area.y + 1)
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(self.title)
            .border_style(self.theme.border(self.focused));

        let line = if self.state.value.is_empty() && !self.focused {
            Line::from(Span::styled(self.placeholder, self.theme.input_placeholder))
        } else {
            Line::from(self.state.value.as_str())
        };
        Paragraph::new(line).block(block).render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputFieldState {
        let mut s = InputFieldState::default();
        for c in text.chars() {
            s.handle(&AppEvent::Char(c));
        }
        s
    }

    #[test]
    fn typing_and_backspace() {
        let mut s = typed("rosé");
        assert_eq!(s.value, "rosé");
        assert_eq!(s.cursor, "rosé".len());
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.value, "ros");
        assert_eq!(s.cursor, 3);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut s = typed("rbin");
        s.handle(&AppEvent::Nav(Direction::Left));
        s.handle(&AppEvent::Nav(Direction::Left));
        s.handle(&AppEvent::Nav(Direction::Left));
        s.handle(&AppEvent::Char('o'));
        assert_eq!(s.value, "robin");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut s = typed("ab");
        s.handle(&AppEvent::Nav(Direction::Right));
        assert_eq!(s.cursor, 2);
        s.clear();
        s.handle(&AppEvent::Nav(Direction::Left));
        s.handle(&AppEvent::Backspace);
        assert_eq!(s.cursor, 0);
        assert!(s.is_empty());
    }

    #[test]
    fn set_moves_cursor_to_end() {
        let mut s = InputFieldState::default();
        s.set("red robin");
        assert_eq!(s.cursor, 9);
    }
}

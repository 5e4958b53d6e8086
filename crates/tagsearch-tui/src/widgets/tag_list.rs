//! Tag list widget — every saved tag in case-insensitive order.
//!
//! # Navigation
//! - `↑`/`k` and `↓`/`j` move the selection.
//! - `Enter` opens the selected search; `Space`/`a` opens its action menu.
//!   Both are handled by the app shell, which asks this state for the
//!   selected tag.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use tagsearch_core::TaggedSearchStore;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct TagListState {
    /// Index into the store's sorted sequence.
    pub selected: usize,
    /// Store generation last seen by [`TagListState::observe`].
    seen_generation: u64,
}

impl TagListState {
    /// Handle a navigation event against a list of `len` rows.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.selected = self.selected.saturating_sub(1);
                tracing::debug!(selected = self.selected, "list: up");
            }
            AppEvent::Nav(Direction::Down) => {
                if self.selected + 1 < len {
                    self.selected += 1;
                }
                tracing::debug!(selected = self.selected, "list: down");
            }
            _ => {}
        }
    }

    /// Re-clamp the selection when the store's tag sequence has changed.
    pub fn observe(&mut self, store: &TaggedSearchStore) {
        if store.generation() == self.seen_generation {
            return;
        }
        self.seen_generation = store.generation();
        let max = store.len().saturating_sub(1);
        if self.selected > max {
            self.selected = max;
        }
        tracing::debug!(
            generation = self.seen_generation,
            selected = self.selected,
            "list: store changed"
        );
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index;
    }

    /// Tag under the selection, if the list is not empty.
    pub fn selected_tag<'s>(&self, store: &'s TaggedSearchStore) -> Option<&'s str> {
        store.get(self.selected).map(|e| e.tag.as_str())
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct TagList<'a> {
    store: &'a TaggedSearchStore,
    state: &'a TagListState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> TagList<'a> {
    pub fn new(
        store: &'a TaggedSearchStore,
        state: &'a TagListState,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            store,
            state,
            focused,
            theme,
        }
    }
}

impl Widget for TagList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!("Tagged searches ({})", self.store.len()))
            .border_style(self.theme.border(self.focused));

        if self.store.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "no saved searches yet: type a query and a tag, then press Enter",
                self.theme.list_empty,
            )))
            .block(block)
            .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self.store.tags().map(ListItem::new).collect();

        let mut list_state = ListState::default();
        list_state.select(Some(self.state.selected));

        let mut list = List::new(items).block(block).highlight_symbol("› ");
        if self.focused {
            list = list.highlight_style(self.theme.list_highlight);
        }
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?`, `Enter` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        const BINDINGS: &[(&str, &str)] = &[
            ("Tab  /  Shift+Tab", "Cycle focus: query → tag → list"),
            ("Enter (query)", "Move to the tag field"),
            ("Enter (tag)  /  Ctrl+s", "Save the tagged search"),
            ("Esc", "Leave a text field"),
            ("↑ k  /  ↓ j", "Move through saved tags"),
            ("Enter (list)", "Open the search in the browser"),
            ("Space  /  a", "Share, edit or delete the tag"),
            (":", "Command line (q, help, theme <name>)"),
            ("?", "Toggle this help popup"),
            ("q  /  Ctrl+c", "Quit"),
        ];

        let popup = centered_rect(70, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" tagsearch — keybindings (? to close) ")
            .border_style(self.theme.dialog_border);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<24}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(popup, buf);
    }
}

pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

//! Status bar — one row at the bottom: the last outcome on the left,
//! keybinding hints on the right.

use crate::app::Status;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    status: Option<&'a Status>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: Option<&'a Status>, theme: &'a Theme) -> Self {
        Self { status, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(status) = self.status {
            let span = match status {
                Status::Info(msg) => Span::styled(msg.as_str(), self.theme.status_info),
                Status::Error(msg) => Span::styled(msg.as_str(), self.theme.status_error),
            };
            buf.set_line(area.x, area.y, &Line::from(span), area.width);
        }

        let hint = " ?:help  q:quit ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(hint_x, area.y, hint, self.theme.hint);
    }
}

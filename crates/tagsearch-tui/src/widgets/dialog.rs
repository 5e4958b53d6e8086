//! Modal dialogs — the missing-input alert, the long-press action menu, the
//! delete confirmation and the share sheet.
//!
//! Each renders as a centred box over the rest of the screen. The app shell
//! decides which one is open (see [`Modal`]); this module only draws it.

use super::help::centered_rect;
use crate::app::Modal;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};
use tagsearch_core::{Action, SharePayload};

pub const MISSING_MESSAGE: &str = "Enter a search query and a tag.";

pub fn action_menu_title(tag: &str) -> String {
    format!("Share, Edit or Delete the search tagged as \"{tag}\"")
}

pub fn confirm_delete_message(tag: &str) -> String {
    format!("Are you sure you want to delete the search \"{tag}\"?")
}

pub struct Dialog<'a> {
    modal: &'a Modal,
    theme: &'a Theme,
}

impl<'a> Dialog<'a> {
    pub fn new(modal: &'a Modal, theme: &'a Theme) -> Self {
        Self { modal, theme }
    }

    fn button(&self, label: &str, focused: bool) -> Span<'static> {
        let style = if focused {
            self.theme.button_focused
        } else {
            self.theme.button
        };
        Span::styled(format!("[ {label} ]"), style)
    }

    fn frame(&self, title: String, lines: Vec<Line<'a>>, area: Rect, buf: &mut Buffer) {
        let width = (title.chars().count() as u16 + 6).clamp(44, 72);
        let widest = lines.iter().map(|l| l.width() as u16).max().unwrap_or(0);
        // Long share text wraps; give it a couple of spare rows.
        let wrap_rows = widest / width.saturating_sub(4).max(1);
        let height = lines.len() as u16 + wrap_rows + 2;

        let popup = centered_rect(width, height, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(title)
            .border_style(self.theme.dialog_border);
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(popup, buf);
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.modal {
            Modal::MissingInput => {
                let lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(MISSING_MESSAGE, self.theme.dialog_error))
                        .alignment(Alignment::Center),
                    Line::from(""),
                    Line::from(self.button("OK", true)).alignment(Alignment::Center),
                ];
                self.frame(" Missing input ".to_string(), lines, area, buf);
            }
            Modal::Actions { tag, cursor } => {
                let mut lines: Vec<Line> = Action::ALL
                    .iter()
                    .map(|action| {
                        let selected = action.index() == *cursor;
                        let marker = if selected { "› " } else { "  " };
                        let style = if selected {
                            self.theme.button_focused
                        } else {
                            Style::default()
                        };
                        Line::from(Span::styled(
                            format!("{marker}{}  {action}", action.index() + 1),
                            style,
                        ))
                    })
                    .collect();
                lines.push(Line::from(""));
                lines.push(
                    Line::from(vec![
                        self.button("Cancel", false),
                        Span::styled("  esc", self.theme.hint),
                    ])
                    .alignment(Alignment::Right),
                );
                self.frame(format!(" {} ", action_menu_title(tag)), lines, area, buf);
            }
            Modal::ConfirmDelete {
                tag,
                delete_focused,
            } => {
                let lines = vec![
                    Line::from(""),
                    Line::from(confirm_delete_message(tag)).alignment(Alignment::Center),
                    Line::from(""),
                    Line::from(vec![
                        self.button("Cancel", !*delete_focused),
                        Span::raw("   "),
                        self.button("Delete", *delete_focused),
                    ])
                    .alignment(Alignment::Center),
                ];
                self.frame(" Delete search ".to_string(), lines, area, buf);
            }
            Modal::Share(payload) => {
                let lines = share_lines(payload, self.button("OK", true));
                self.frame(format!(" {} ", payload.chooser_title), lines, area, buf);
            }
        }
    }
}

fn share_lines<'a>(payload: &'a SharePayload, ok: Span<'static>) -> Vec<Line<'a>> {
    vec![
        Line::from(vec![
            Span::raw("Subject: "),
            Span::raw(payload.subject.as_str()),
        ]),
        Line::from(""),
        Line::from(payload.text.as_str()),
        Line::from(""),
        Line::from(ok).alignment(Alignment::Center),
    ]
}

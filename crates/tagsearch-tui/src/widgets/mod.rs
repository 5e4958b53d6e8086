//! Ratatui widgets for the tagsearch TUI.

pub mod command_bar;
pub mod dialog;
pub mod help;
pub mod input_field;
pub mod status_bar;
pub mod tag_list;

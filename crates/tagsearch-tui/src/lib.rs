//! tagsearch TUI — ratatui application shell.
//!
//! One screen: a query field, a tag field, and the list of saved tags.
//! [`App`] owns the [`TaggedSearchStore`] for the life of the process;
//! gestures are turned into calls on it by the functions in [`handlers`].

pub mod app;
pub mod commands;
pub mod event;
pub mod handlers;
pub mod theme;
pub mod widgets;

pub use app::App;

use tagsearch_core::{config::Config, launch::SystemLauncher, TaggedSearchStore};

/// Run the TUI over `store` until the user quits.
pub fn run(store: TaggedSearchStore, config: &Config) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    let launcher = SystemLauncher::from_config(config);
    tracing::info!(searches = store.len(), theme = %config.ui.theme, "starting tui");
    App::new(store, Box::new(launcher), theme).run()
}

//! Command-line surface.
//!
//! With no subcommand the interactive screen starts. The subcommands run the
//! same store operations headless and print to stdout, one record per line.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tagsearch_core::{
    config::Config,
    launch::{Launcher, SystemLauncher},
    JsonFileBackend, TaggedSearchStore,
};
use tagsearch_tui::widgets::dialog::MISSING_MESSAGE;

#[derive(Debug, Parser)]
#[command(name = "tagsearch", about = "Save tagged Flickr searches and open them from the terminal")]
pub struct Cli {
    /// Write debug logs to $TMPDIR/tagsearch-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Saved searches file. Overrides `[storage] path` from the config.
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Config file to use instead of ~/.config/tagsearch/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Cmd>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Cmd {
    /// Print every saved search as `tag<TAB>query`, sorted by tag.
    List,
    /// Save QUERY under TAG, replacing any search with the same tag.
    Save { tag: String, query: String },
    /// Remove the search tagged TAG.
    Delete { tag: String },
    /// Print the Flickr search URL for TAG.
    Url { tag: String },
    /// Print the share message for TAG.
    Share { tag: String },
    /// Open the search for TAG in the configured browser.
    Open { tag: String },
}

/// Load config and store, then start the TUI or run one subcommand.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config unreadable, using defaults");
            Config::defaults()
        }),
    };

    let path = cli.store.clone().unwrap_or_else(|| config.store_path());
    tracing::debug!(path = %path.display(), "opening saved searches");
    let mut store = TaggedSearchStore::load(JsonFileBackend::new(&path), config.link_templates())?;

    match cli.command {
        None => tagsearch_tui::run(store, &config),
        Some(cmd) => {
            let mut launcher = SystemLauncher::from_config(&config);
            let stdout = std::io::stdout();
            execute(cmd, &mut store, &mut launcher, &mut stdout.lock())
        }
    }
}

/// Run one headless subcommand against `store`, writing results to `out`.
pub fn execute(
    cmd: Cmd,
    store: &mut TaggedSearchStore,
    launcher: &mut dyn Launcher,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match cmd {
        Cmd::List => {
            for entry in store.entries() {
                writeln!(out, "{}\t{}", entry.tag, entry.query)?;
            }
        }
        Cmd::Save { tag, query } => {
            if tag.is_empty() || query.is_empty() {
                bail!(MISSING_MESSAGE);
            }
            store.add_or_update(&tag, &query);
        }
        Cmd::Delete { tag } => {
            if !store.delete(&tag) {
                tracing::debug!(tag = %tag, "nothing to delete");
            }
        }
        Cmd::Url { tag } => {
            require(store, &tag)?;
            writeln!(out, "{}", store.build_search_url(&tag))?;
        }
        Cmd::Share { tag } => {
            require(store, &tag)?;
            writeln!(out, "{}", store.build_share_text(&tag))?;
        }
        Cmd::Open { tag } => {
            require(store, &tag)?;
            let url = store.build_search_url(&tag);
            launcher.open_url(&url)?;
            writeln!(out, "{url}")?;
        }
    }
    Ok(())
}

fn require(store: &TaggedSearchStore, tag: &str) -> anyhow::Result<()> {
    if !store.contains(tag) {
        bail!("no saved search tagged \"{tag}\"");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["tagsearch", "save", "birds", "red robin"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Cmd::Save {
                tag: "birds".to_string(),
                query: "red robin".to_string()
            })
        );

        let cli = Cli::try_parse_from(["tagsearch", "--store", "/tmp/s.json", "list"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/s.json")));
        assert_eq!(cli.command, Some(Cmd::List));
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["tagsearch", "--debug"]).unwrap();
        assert!(cli.debug);
        assert!(cli.command.is_none());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

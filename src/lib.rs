//! tagsearch — save tagged Flickr searches and open them from the terminal.
//!
//! The binary is a thin shell over two crates:
//!
//! ```text
//! tagsearch-core ──► TaggedSearchStore ──► tagsearch-tui (interactive)
//!                                     └──► cli (headless subcommands)
//! ```
//!
//! Everything runs on the main thread; there is no async runtime.

pub mod cli;

pub use tagsearch_core::{Entry, LinkTemplates, TaggedSearchStore};

//! tagsearch-core — saved Flickr searches keyed by tag.
//!
//! This crate owns everything below the screen: the sorted
//! [`TaggedSearchStore`], its persistence backends, the derived search URL and
//! share payload, configuration, and the [`Launcher`](launch::Launcher) seam
//! through which the browser and share targets are reached.
//!
//! # Architecture
//!
//! ```text
//! SearchBackend ──► TaggedSearchStore ──► LinkTemplates ──► Launcher
//!  (json file)        (sorted entries)     (url / share)    (browser)
//! ```
//!
//! Everything is synchronous. The store is owned by the caller and mutated
//! in place; every mutation is flushed to the backend before returning.

pub mod config;
pub mod error;
pub mod launch;
pub mod links;
pub mod store;
pub mod types;

pub use error::{LaunchError, StoreError};
pub use links::LinkTemplates;
pub use store::{JsonFileBackend, MemoryBackend, SearchBackend, TaggedSearchStore};
pub use types::{Action, Entry, SharePayload};

//! Test builders — ergonomic constructors for stores, launchers and apps.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::cell::RefCell;
use std::rc::Rc;
use tagsearch_core::{
    launch::Launcher, LaunchError, LinkTemplates, MemoryBackend, SharePayload, TaggedSearchStore,
};
use tagsearch_tui::{theme::Theme, App};

// ---------------------------------------------------------------------------
// StoreBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a [`TaggedSearchStore`] over a [`MemoryBackend`].
///
/// # Example
///
/// ```rust
/// let (store, backend) = StoreBuilder::new()
///     .search("birds", "red robin")
///     .search("cats", "tabby")
///     .build();
/// ```
#[derive(Default)]
pub struct StoreBuilder {
    searches: Vec<(String, String)>,
    links: LinkTemplates,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, tag: impl Into<String>, query: impl Into<String>) -> Self {
        self.searches.push((tag.into(), query.into()));
        self
    }

    pub fn links(mut self, links: LinkTemplates) -> Self {
        self.links = links;
        self
    }

    /// Build the store plus a second handle on its backend for inspecting
    /// what was persisted.
    pub fn build(self) -> (TaggedSearchStore, MemoryBackend) {
        let backend = MemoryBackend::with_searches(self.searches);
        let store = TaggedSearchStore::load(backend.clone(), self.links)
            .expect("memory backend never fails to load");
        (store, backend)
    }
}

// ---------------------------------------------------------------------------
// RecordingLauncher
// ---------------------------------------------------------------------------

/// Everything a [`RecordingLauncher`] was asked to do.
#[derive(Debug, Default)]
pub struct Launches {
    pub opened: Vec<String>,
    pub shared: Vec<SharePayload>,
}

/// [`Launcher`] that records calls instead of spawning programs. Clones share
/// the same record.
#[derive(Clone, Default)]
pub struct RecordingLauncher {
    pub launches: Rc<RefCell<Launches>>,
    pub fail: bool,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher whose every call fails as if the program were missing.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.launches.borrow().opened.clone()
    }

    pub fn shared(&self) -> Vec<SharePayload> {
        self.launches.borrow().shared.clone()
    }

    fn check(&self) -> Result<(), LaunchError> {
        if self.fail {
            return Err(LaunchError::Spawn {
                program: "recording".to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        Ok(())
    }
}

impl Launcher for RecordingLauncher {
    fn open_url(&mut self, url: &str) -> Result<(), LaunchError> {
        self.check()?;
        self.launches.borrow_mut().opened.push(url.to_string());
        Ok(())
    }

    fn share(&mut self, payload: &SharePayload) -> Result<(), LaunchError> {
        self.check()?;
        self.launches.borrow_mut().shared.push(payload.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App helpers
// ---------------------------------------------------------------------------

/// An [`App`] over `store` with a recording launcher and the default theme.
pub fn app_with(store: TaggedSearchStore, launcher: &RecordingLauncher) -> App {
    App::new(store, Box::new(launcher.clone()), Theme::load_default())
}

//! Store — the sorted, case-insensitively keyed collection of saved searches.
//!
//! The in-memory sequence is the single source of truth for the screen; the
//! [`SearchBackend`] only mirrors it. Every mutation is flushed to the backend
//! before returning, and a failed flush is logged rather than reported, so
//! callers never have to handle persistence errors.

use crate::error::StoreError;
use crate::links::LinkTemplates;
use crate::types::{cmp_tags, fold_tag, Entry, SharePayload};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Name of the persisted namespace. The JSON backend stores it as
/// `<data_dir>/searches.json`.
pub const NAMESPACE: &str = "searches";

// ---------------------------------------------------------------------------
// Backends
// ---------------------------------------------------------------------------

/// Durable key-value storage for tag → query pairs.
pub trait SearchBackend {
    /// Read every persisted pair. A backend with nothing saved yet returns an
    /// empty map.
    fn load(&self) -> Result<BTreeMap<String, String>, StoreError>;

    /// Replace the persisted state with `searches`.
    fn persist(&mut self, searches: &BTreeMap<String, String>) -> Result<(), StoreError>;
}

/// Flat JSON object on disk: `{ "<tag>": "<query>", ... }`.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend for the default namespace file inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(format!("{NAMESPACE}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SearchBackend for JsonFileBackend {
    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no saved searches yet");
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(self.io_err(e)),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn persist(&mut self, searches: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
            }
        }

        let json = serde_json::to_string_pretty(searches)?;

        // Write beside the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| self.io_err(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;
        Ok(())
    }
}

/// In-process backend. Clones share the same map, so a test can keep one
/// handle and inspect what the store flushed through the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    searches: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_searches<I, K, V>(searches: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = searches
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            searches: Rc::new(RefCell::new(map)),
        }
    }

    /// Copy of the currently persisted pairs.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.searches.borrow().clone()
    }
}

impl SearchBackend for MemoryBackend {
    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        Ok(self.snapshot())
    }

    fn persist(&mut self, searches: &BTreeMap<String, String>) -> Result<(), StoreError> {
        *self.searches.borrow_mut() = searches.clone();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TaggedSearchStore
// ---------------------------------------------------------------------------

/// Saved searches sorted case-insensitively by tag.
///
/// Tags are unique ignoring case: saving `"Flower"` when `"flower"` exists
/// overwrites the query stored under `"flower"` and leaves the sequence alone.
pub struct TaggedSearchStore {
    backend: Box<dyn SearchBackend>,
    links: LinkTemplates,
    entries: Vec<Entry>,
    /// Bumped whenever the sequence of tags changes.
    generation: u64,
}

impl std::fmt::Debug for TaggedSearchStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaggedSearchStore")
            .field("entries", &self.entries)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl TaggedSearchStore {
    /// Read everything `backend` holds and sort it.
    ///
    /// Keys that fold to an already-loaded tag are skipped with a warning; the
    /// first one in raw key order is kept. Empty keys are skipped as well.
    pub fn load(
        backend: impl SearchBackend + 'static,
        links: LinkTemplates,
    ) -> Result<Self, StoreError> {
        let persisted = backend.load()?;

        let mut entries: Vec<Entry> = Vec::with_capacity(persisted.len());
        let mut seen = std::collections::HashSet::new();
        for (tag, query) in persisted {
            if tag.is_empty() {
                tracing::warn!("skipping saved search with an empty tag");
                continue;
            }
            if !seen.insert(fold_tag(&tag)) {
                tracing::warn!(tag = %tag, "skipping saved search whose tag differs only in case");
                continue;
            }
            entries.push(Entry { tag, query });
        }
        entries.sort_by(|a, b| cmp_tags(&a.tag, &b.tag));

        tracing::info!(count = entries.len(), "loaded saved searches");

        Ok(Self {
            backend: Box::new(backend),
            links,
            entries,
            generation: 0,
        })
    }

    /// Save `query` under `tag`, overwriting any search already tagged that
    /// way (ignoring case). Both strings must be non-empty; the caller checks.
    pub fn add_or_update(&mut self, tag: &str, query: &str) {
        debug_assert!(!tag.is_empty() && !query.is_empty());

        match self.find(tag) {
            Ok(idx) => {
                let entry = &mut self.entries[idx];
                entry.query = query.to_string();
                tracing::info!(tag = %entry.tag, "saved search updated");
            }
            Err(idx) => {
                self.entries.insert(idx, Entry::new(tag, query));
                self.generation += 1;
                tracing::info!(tag = %tag, position = idx, "saved search added");
            }
        }
        self.flush();
    }

    /// Remove `tag` (ignoring case). Returns whether anything was removed.
    pub fn delete(&mut self, tag: &str) -> bool {
        match self.find(tag) {
            Ok(idx) => {
                let removed = self.entries.remove(idx);
                self.generation += 1;
                tracing::info!(tag = %removed.tag, "saved search deleted");
                self.flush();
                true
            }
            Err(_) => {
                tracing::debug!(tag = %tag, "delete: no such tag");
                false
            }
        }
    }

    /// The query saved under `tag`, or `""` when there is none.
    pub fn lookup_query(&self, tag: &str) -> &str {
        self.find(tag)
            .map(|idx| self.entries[idx].query.as_str())
            .unwrap_or("")
    }

    pub fn build_search_url(&self, tag: &str) -> String {
        self.links.search_url(self.lookup_query(tag))
    }

    pub fn build_share_text(&self, tag: &str) -> String {
        self.links.share_text(&self.build_search_url(tag))
    }

    pub fn share_payload(&self, tag: &str) -> SharePayload {
        self.links.share_payload(&self.build_search_url(tag))
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.tag.as_str())
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Index of `tag` in the sorted sequence, ignoring case.
    pub fn position(&self, tag: &str) -> Option<usize> {
        self.find(tag).ok()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.find(tag).is_ok()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Change counter for observers of the tag sequence. Updating the query of
    /// an existing tag does not bump it.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn links(&self) -> &LinkTemplates {
        &self.links
    }

    /// Entries are sorted by folded tag and folded tags are unique, so a
    /// search on the folded key alone finds the slot.
    fn find(&self, tag: &str) -> Result<usize, usize> {
        let key = fold_tag(tag);
        self.entries
            .binary_search_by(|e| fold_tag(&e.tag).cmp(&key))
    }

    fn flush(&mut self) {
        let searches: BTreeMap<String, String> = self
            .entries
            .iter()
            .map(|e| (e.tag.clone(), e.query.clone()))
            .collect();
        if let Err(e) = self.backend.persist(&searches) {
            tracing::warn!(error = %e, "could not persist saved searches");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Core types for tagsearch-core.
//!
//! This module defines the data shared between the store and the screen: a
//! saved [`Entry`], the long-press [`Action`] menu, and the [`SharePayload`]
//! handed to the share target.

use std::cmp::Ordering;

/// One saved search: a user-chosen tag and the Flickr query it stands for.
///
/// Tags are unique within a store when compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub tag: String,
    pub query: String,
}

impl Entry {
    pub fn new(tag: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            query: query.into(),
        }
    }
}

/// Case-folded form of a tag. Two tags name the same entry iff their folded
/// forms are equal.
///
/// Folds one character at a time through upper then lower case, so the
/// result never depends on a character's position in the word (a final `Σ`
/// folds to `σ`, not `ς`).
pub fn fold_tag(tag: &str) -> String {
    tag.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case-insensitive lexical order of tags.
///
/// Ties on the folded form fall back to the raw strings so the order is
/// total; a store never holds two tags that tie.
pub fn cmp_tags(a: &str, b: &str) -> Ordering {
    fold_tag(a).cmp(&fold_tag(b)).then_with(|| a.cmp(b))
}

/// An item of the long-press menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Share,
    Edit,
    Delete,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Share, Action::Edit, Action::Delete];

    /// Menu position (0-based) of this action.
    pub fn index(self) -> usize {
        match self {
            Action::Share => 0,
            Action::Edit => 1,
            Action::Delete => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Action> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Share => write!(f, "Share"),
            Action::Edit => write!(f, "Edit"),
            Action::Delete => write!(f, "Delete"),
        }
    }
}

/// What gets handed to the share target for a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub subject: String,
    pub text: String,
    /// Title shown above the list of share targets.
    pub chooser_title: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

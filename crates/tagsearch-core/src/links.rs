//! Search URL and share text templates.
//!
//! The URL is the configured base followed by the query, percent-encoded as
//! UTF-8. Letters, digits and `_-!.~'()*` pass through unchanged; every other
//! byte (space included) becomes `%XX`.

use crate::types::SharePayload;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left unescaped when encoding a query into the search URL.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'-')
    .remove(b'!')
    .remove(b'.')
    .remove(b'~')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

/// Placeholder replaced by the search URL inside the share message.
pub const URL_PLACEHOLDER: &str = "{url}";

pub const DEFAULT_BASE_URL: &str = "https://www.flickr.com/search/?q=";
pub const DEFAULT_SHARE_SUBJECT: &str = "Flickr search results";
pub const DEFAULT_SHARE_MESSAGE: &str = "Check out the results of this Flickr search: {url}";
pub const DEFAULT_CHOOSER_TITLE: &str = "Share search to:";

/// Fixed strings used to derive the search URL and share payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplates {
    pub base_url: String,
    pub share_subject: String,
    /// Message body; every `{url}` is replaced with the search URL.
    pub share_message: String,
    pub share_chooser_title: String,
}

impl Default for LinkTemplates {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            share_subject: DEFAULT_SHARE_SUBJECT.to_string(),
            share_message: DEFAULT_SHARE_MESSAGE.to_string(),
            share_chooser_title: DEFAULT_CHOOSER_TITLE.to_string(),
        }
    }
}

impl LinkTemplates {
    /// `base_url` followed by the encoded query.
    pub fn search_url(&self, query: &str) -> String {
        format!("{}{}", self.base_url, encode_query(query))
    }

    pub fn share_text(&self, url: &str) -> String {
        self.share_message.replace(URL_PLACEHOLDER, url)
    }

    pub fn share_payload(&self, url: &str) -> SharePayload {
        SharePayload {
            subject: self.share_subject.clone(),
            text: self.share_text(url),
            chooser_title: self.share_chooser_title.clone(),
        }
    }
}

pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, QUERY_ENCODE_SET).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

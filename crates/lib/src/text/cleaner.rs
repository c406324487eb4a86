use std::sync::LazyLock;

use regex::Regex;

use super::downcode;
use crate::containers::distinct_elements;

static SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("Invalid digit regex"));
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("Invalid alphanumeric regex"));
static URLS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"http[s]?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\(\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+")
        .expect("Invalid URL regex")
});

/// Cleans up a piece of text.
///
/// The soft cleanup keeps the content and only normalizes whitespace. The
/// hard cleanup is lossy and meant for checks such as "is this text worth
/// keeping", not for storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCleaner {
    text: String,
}

impl TextCleaner {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The original text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Strips every line, collapses whitespace runs to one space and drops
    /// empty lines.
    pub fn cleanup(&self) -> String {
        self.text
            .split('\n')
            .map(str::trim)
            .filter(|par| !par.is_empty())
            .map(|par| SPACES.replace_all(par, " "))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }

    /// Downcodes the text and keeps only words made of basic Latin letters.
    ///
    /// Non-alphanumeric characters become spaces, digits are removed and
    /// whitespace is collapsed.
    pub fn cleanup_hard(&self) -> String {
        let text = downcode(&self.text);
        let text = NON_ALPHANUMERIC.replace_all(&text, " ");
        let text = DIGITS.replace_all(&text, "");
        let text = SPACES.replace_all(&text, " ");
        text.trim().to_string()
    }

    /// Extracts all `http(s)` URLs from the text.
    ///
    /// A trailing character other than a letter, digit or `/` is taken to be
    /// sentence punctuation and dropped. With `distinct` duplicates are
    /// removed, keeping the first occurrence.
    pub fn extract_urls(&self, distinct: bool) -> Vec<String> {
        let urls: Vec<String> = URLS
            .find_iter(&self.text)
            .map(|m| {
                let url = m.as_str();
                match url.char_indices().last() {
                    Some((idx, last)) if !(last.is_ascii_alphanumeric() || last == '/') => {
                        url[..idx].to_string()
                    }
                    _ => url.to_string(),
                }
            })
            .collect();

        tracing::trace!(count = urls.len(), "Extracted URLs");
        if distinct {
            distinct_elements(&urls, true)
        } else {
            urls
        }
    }
}

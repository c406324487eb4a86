use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static WWW_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*w\.").expect("Invalid www prefix regex"));

/// A parsed URL with its domain parts.
///
/// A URL is valid when it has a scheme, a host and an explicit path (at
/// least `/`). Invalid URLs keep their parse result, if any, but expose
/// empty `uri`, `domain` and `domain_name`.
///
/// ```
/// # use genery::text::UrlNormalizer;
/// let url = UrlNormalizer::new("https://www.example.com/news?id=1");
/// assert!(url.is_valid());
/// assert_eq!(url.domain(), "https://www.example.com/");
/// assert_eq!(url.domain_name(), "example.com");
/// ```
#[derive(Debug, Clone)]
pub struct UrlNormalizer {
    parsed: Option<Url>,
    valid: bool,
    uri: String,
    domain: String,
    domain_name: String,
}

impl UrlNormalizer {
    pub fn new(raw: &str) -> Self {
        let parsed = Url::parse(raw).ok();
        let valid = match &parsed {
            Some(url) => url.host_str().is_some_and(|h| !h.is_empty()) && has_explicit_path(raw),
            None => false,
        };

        let mut normalizer = Self {
            parsed,
            valid,
            uri: String::new(),
            domain: String::new(),
            domain_name: String::new(),
        };

        if let Some(url) = normalizer.parsed.as_ref().filter(|_| valid) {
            let netloc = netloc(raw);
            normalizer.uri = raw.to_string();
            normalizer.domain = format!("{}://{}/", url.scheme(), netloc);
            normalizer.domain_name = WWW_PREFIX.replacen(&netloc, 1, "").into_owned();
        } else {
            tracing::debug!(url = raw, "Invalid URL");
        }
        normalizer
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The URL as given, or empty when invalid
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// `scheme://netloc/`, with the host and port exactly as written
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The host without its leading `www.`-like prefix
    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    pub fn parsed(&self) -> Option<&Url> {
        self.parsed.as_ref()
    }

    /// The ASCII form of the URL: IDNA host, percent-encoded path and query.
    ///
    /// Returns an empty string for invalid URLs.
    pub fn ascii(&self) -> String {
        match &self.parsed {
            Some(url) if self.valid => url.as_str().to_string(),
            _ => String::new(),
        }
    }
}

/// The `url` crate normalizes an empty path to `/`, so the raw input is
/// checked instead.
fn has_explicit_path(raw: &str) -> bool {
    let Some((_, rest)) = raw.split_once("://") else {
        return false;
    };
    rest.find(['/', '?', '#'])
        .is_some_and(|idx| rest[idx..].starts_with('/'))
}

/// The authority as written in the input, between `://` and the first of
/// `/?#`. The parsed host is already punycode and drops default ports.
fn netloc(raw: &str) -> &str {
    let Some((_, rest)) = raw.split_once("://") else {
        return "";
    };
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    &rest[..end]
}

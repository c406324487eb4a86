//! Text utilities: transliteration, cleanup, truncation and key generation.
//!
//! # Core Types
//!
//! - [`TextCleaner`] - soft and hard cleanup, URL extraction
//! - [`UrlNormalizer`] - URL validation and domain extraction
//!
//! The transliteration table behind [`downcode`] and [`remove_nontext`] is
//! built once per process (see [`tables::DOWNCODE_MAP`]).

use std::{fmt, sync::LazyLock};

use hmac::{Hmac, Mac};
use md5::Md5;
use rand::Rng;

pub mod cleaner;
pub mod tables;
pub mod urls;

pub use cleaner::TextCleaner;
pub use urls::UrlNormalizer;

const RAND_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Extra characters [`remove_nontext`] keeps besides the table characters.
const EXTRA_ACCEPTED: &str = "„”–— \n\r";

static ACCEPTED_NONASCII: LazyLock<Vec<char>> = LazyLock::new(|| {
    let mut accepted: Vec<char> = tables::DOWNCODE_MAP.keys().copied().collect();
    accepted.extend(EXTRA_ACCEPTED.chars());
    accepted.sort_unstable();
    accepted
});

/// Transliterates multilingual text to its closest basic Latin form.
///
/// ```
/// # use genery::text::downcode;
/// assert_eq!(downcode("Чому я не сокіл"), "Chomu ya ne sokil");
/// assert_eq!(downcode("Farming in Flanders"), "Farming in Flanders");
/// ```
pub fn downcode(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match tables::DOWNCODE_MAP.get(&ch) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(ch),
        }
    }
    result
}

/// Drops every character that is not an ASCII letter, digit or punctuation,
/// a whitespace among space/`\n`/`\r`, a transliterable letter, or one of
/// `„”–—`.
pub fn remove_nontext(text: &str) -> String {
    text.chars()
        .filter(|ch| {
            ch.is_ascii_alphanumeric()
                || ch.is_ascii_punctuation()
                || ACCEPTED_NONASCII.binary_search(ch).is_ok()
        })
        .collect()
}

/// Generates a 32 hex character key.
///
/// The key is the HMAC-MD5 of an empty message keyed by `values` joined with
/// `delimiter`, so equal inputs give equal keys. Without values a random UUID
/// is used as the HMAC key instead.
///
/// ```
/// # use genery::text::generate_key;
/// let key = generate_key(&["feed:twitter:tweet", "1251532472346652673", "-1"], "_");
/// assert_eq!(key, "5feb7d8b4a0e441a64bb2e83a83c5839");
/// ```
pub fn generate_key<T: fmt::Display>(values: &[T], delimiter: &str) -> String {
    let seed = if values.is_empty() {
        uuid::Uuid::new_v4().to_string()
    } else {
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(delimiter)
    };

    // HMAC takes keys of any length, so the error branch is unreachable
    Hmac::<Md5>::new_from_slice(seed.as_bytes())
        .map(|mac| hex::encode(mac.finalize().into_bytes()))
        .unwrap_or_default()
}

/// Generates a random string of `size` characters from `[a-z0-9]`.
pub fn rand_string(size: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..size)
        .map(|_| RAND_ALPHABET[rng.gen_range(0..RAND_ALPHABET.len())] as char)
        .collect()
}

/// Collapses runs of the same ASCII punctuation character into one.
///
/// Note that a trailing ellipsis becomes a single period.
///
/// ```
/// # use genery::text::remove_repeated_punctuation;
/// assert_eq!(
///     remove_repeated_punctuation("What??! Get your milkshake and leave!!!"),
///     "What?! Get your milkshake and leave!"
/// );
/// ```
pub fn remove_repeated_punctuation(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous: Option<char> = None;
    for ch in text.chars() {
        if !(ch.is_ascii_punctuation() && previous == Some(ch)) {
            result.push(ch);
        }
        previous = Some(ch);
    }
    result
}

/// Truncates `text` to the last whole word within `limit` characters and
/// appends `suffix`.
///
/// Text that already fits is returned unchanged. A negative `limit` counts
/// from the end of the text.
///
/// ```
/// # use genery::text::smart_truncate;
/// let text = "Let us know if you find this package useful.";
/// assert_eq!(smart_truncate(text, 43, "..."), "Let us know if you find this package...");
/// assert_eq!(smart_truncate(text, 16, "?"), "Let us know if?");
/// ```
pub fn smart_truncate(text: &str, limit: isize, suffix: &str) -> String {
    let len = text.chars().count();
    let cut = if limit < 0 {
        len.saturating_sub(limit.unsigned_abs())
    } else {
        let limit = limit.unsigned_abs();
        if len <= limit {
            return text.to_string();
        }
        limit
    };

    let head: String = text.chars().take(cut).collect();
    let kept = match head.rsplit_once(' ') {
        Some((before, _)) => before,
        None => head.as_str(),
    };
    format!("{kept}{suffix}")
}

/// Splits `text` into chunks of at most `limit` characters on word
/// boundaries.
///
/// Words are packed greedily; a single word longer than `limit` becomes a
/// chunk on its own.
pub fn smart_split(text: &str, limit: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > limit {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

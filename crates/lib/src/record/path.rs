//! Delimited key paths for nested record access.
//!
//! A path is a plain string such as `"place.location.lat"` split on a
//! delimiter into segments. Each segment names a key of the record reached
//! through the previous segments. Unlike file system paths, segments are not
//! normalized: `"a..b"` contains an empty segment that must match an empty
//! key.
//!
//! # Usage
//!
//! ```rust
//! use genery::record::path::{resolve, segments};
//! use genery::record::Record;
//!
//! let record = Record::from_json(serde_json::json!({"lang": {"pl": {"native": "Polski"}}}))?;
//! let path = segments("lang/pl/native", "/");
//! assert_eq!(path, vec!["lang", "pl", "native"]);
//! assert_eq!(resolve(&record, &path).unwrap(), "Polski");
//! # Ok::<(), genery::Error>(())
//! ```

use super::{Record, Value};

/// Delimiter used by [`Record::lookup`](super::Record::lookup).
pub const DEFAULT_DELIMITER: &str = ".";

/// Splits a path into its segments.
///
/// An empty delimiter cannot split anything, so the whole path is returned
/// as a single segment.
pub fn segments<'a>(path: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        return vec![path];
    }
    path.split(delimiter).collect()
}

/// Resolves already split segments against a record.
///
/// Returns `None` when a segment is absent at its depth, when the path is
/// longer than the nesting available, or when an intermediate segment
/// reaches a value that is not a record. An empty segment list resolves to
/// nothing.
pub fn resolve<'a>(record: &'a Record, segments: &[&str]) -> Option<&'a Value> {
    let (last, parents) = segments.split_last()?;

    let mut current = record;
    for segment in parents {
        current = current.get(segment)?.as_record()?;
    }
    current.get(last)
}

/// Splits and resolves a path in one step.
pub fn resolve_path<'a>(record: &'a Record, path: &str, delimiter: &str) -> Option<&'a Value> {
    resolve(record, &segments(path, delimiter))
}

//! Free functions over records, values and sequences.
//!
//! These are the building blocks behind [`Record::update`] and
//! [`Record::flatten`], plus general helpers for deduplicating, counting and
//! flattening sequences and for turning a value tree into JSON.

use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
    sync::LazyLock,
};

use regex::Regex;

use crate::record::{Record, Value, value::iso_format};

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("Invalid key normalization regex"));

/// Deep-merges `overrides` into `source` in place.
///
/// For every key of `overrides`: a non-empty nested record is merged
/// recursively into the record stored under the same key in `source`
/// (an empty one is created first when the key is missing or holds a
/// non-record value); anything else, including an empty record, replaces
/// the stored value. Keys only present in `source` are left untouched.
///
/// ```
/// # use genery::containers::deep_update;
/// # use genery::record::Record;
/// # use serde_json::json;
/// let mut source = Record::from_json(json!({"place": {"id": "1", "location": {"lon": 4.66, "lat": 50.64}}}))?;
/// let overrides = Record::from_json(json!({"place": {"location": {"lon": 12.5}}}))?;
///
/// deep_update(&mut source, &overrides);
/// assert_eq!(source.lookup(&["place.location.lon"], &Default::default()), &12.5);
/// assert_eq!(source.lookup(&["place.location.lat"], &Default::default()), &50.64);
/// assert_eq!(source.lookup(&["place.id"], &Default::default()), "1");
/// # Ok::<(), genery::Error>(())
/// ```
pub fn deep_update<'a>(source: &'a mut Record, overrides: &Record) -> &'a mut Record {
    for (key, value) in overrides {
        match value {
            Value::Record(nested) if !nested.is_empty() => match source.get_record_mut(key) {
                Some(inner) => {
                    deep_update(inner, nested);
                }
                None => {
                    let mut inner = Record::new();
                    deep_update(&mut inner, nested);
                    source.insert(key.clone(), inner);
                }
            },
            _ => {
                source.insert(key.clone(), value.clone());
            }
        }
    }
    tracing::trace!(keys = overrides.len(), "Deep update applied");
    source
}

/// Returns a single-level copy of `record` whose keys join the nested path
/// with `separator`.
///
/// Nested records are descended depth-first; lists are leaves. An empty
/// parent key contributes no prefix and an empty nested record contributes
/// no keys. When two paths compose to the same key, the one visited last
/// wins.
pub fn flatten_record(record: &Record, separator: &str) -> Record {
    let mut flat = Record::new();
    flatten_into(record, "", separator, &mut flat);
    flat
}

fn flatten_into(record: &Record, parent: &str, separator: &str, flat: &mut Record) {
    for (key, value) in record {
        let composed = if parent.is_empty() {
            key.clone()
        } else {
            format!("{parent}{separator}{key}")
        };

        match value {
            Value::Record(nested) => flatten_into(nested, &composed, separator, flat),
            other => {
                flat.insert(composed, other.clone());
            }
        }
    }
}

/// Flattens arbitrarily nested lists into one list, depth-first and left to
/// right.
///
/// ```
/// # use genery::containers::flatten_list;
/// # use genery::record::Value;
/// let nested = vec![Value::from(1), Value::from(vec![vec![2, 3], vec![4, 5]]), Value::from(6)];
/// assert_eq!(flatten_list(&nested), Value::from(vec![1, 2, 3, 4, 5, 6]).as_list().unwrap());
/// ```
pub fn flatten_list(items: &[Value]) -> Vec<Value> {
    let mut flat = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::List(inner) => flat.extend(flatten_list(inner)),
            other => flat.push(other.clone()),
        }
    }
    flat
}

/// Returns a copy of `record` with normalized keys.
///
/// Every maximal run of characters outside `[A-Za-z0-9]` is replaced by
/// `separator`, then the key is lowercased when `lowercase` is set. Nested
/// records are normalized recursively; lists are left untouched.
///
/// ```
/// # use genery::containers::normalize_keys;
/// # use genery::record::Record;
/// # use serde_json::json;
/// let input = Record::from_json(json!({"Content-Type": "a", "Last-Modified": {"Day-Of-Week": "Sat"}}))?;
/// let expected = Record::from_json(json!({"content_type": "a", "last_modified": {"day_of_week": "Sat"}}))?;
/// assert_eq!(normalize_keys(&input, true, "_"), expected);
/// # Ok::<(), genery::Error>(())
/// ```
pub fn normalize_keys(record: &Record, lowercase: bool, separator: &str) -> Record {
    record
        .iter()
        .map(|(key, value)| {
            let replaced = NON_ALPHANUMERIC_RUN.replace_all(key, regex::NoExpand(separator));
            let new_key = if lowercase {
                replaced.to_lowercase()
            } else {
                replaced.into_owned()
            };

            let new_value = match value {
                Value::Record(nested) => {
                    Value::Record(normalize_keys(nested, lowercase, separator))
                }
                other => other.clone(),
            };
            (new_key, new_value)
        })
        .collect()
}

/// Returns the distinct elements of `items`.
///
/// With `preserve_order` the elements keep the order of their first
/// occurrence; otherwise the order is unspecified.
pub fn distinct_elements<T>(items: &[T], preserve_order: bool) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    if !preserve_order {
        return items
            .iter()
            .cloned()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
    }

    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// A distinct element together with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Occurrence<T> {
    pub elm: T,
    pub num: usize,
}

/// Output of [`compress_and_sort_by_occurence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compressed<T> {
    /// Bare elements
    Values(Vec<T>),
    /// Elements paired with their counts
    Counted(Vec<Occurrence<T>>),
}

impl<T> Compressed<T> {
    /// Returns the elements, dropping counts if present
    pub fn into_values(self) -> Vec<T> {
        match self {
            Compressed::Values(values) => values,
            Compressed::Counted(counted) => counted.into_iter().map(|o| o.elm).collect(),
        }
    }
}

/// Counts the occurrences of each distinct element and sorts them by count.
///
/// `reverse` sorts by descending count (most frequent first), otherwise
/// ascending. Elements with equal counts keep the order of their first
/// occurrence. `values_only` selects between bare elements and
/// [`Occurrence`] pairs.
///
/// ```
/// # use genery::containers::{compress_and_sort_by_occurence, Compressed, Occurrence};
/// let items = ["x", "y", "x", "x", "y", "z"];
/// assert_eq!(
///     compress_and_sort_by_occurence(&items, true, true),
///     Compressed::Values(vec!["x", "y", "z"])
/// );
/// match compress_and_sort_by_occurence(&items, true, false) {
///     Compressed::Counted(counted) => assert_eq!(counted[0], Occurrence { elm: "x", num: 3 }),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn compress_and_sort_by_occurence<T>(
    items: &[T],
    reverse: bool,
    values_only: bool,
) -> Compressed<T>
where
    T: Eq + Hash + Clone,
{
    let mut positions: HashMap<&T, usize> = HashMap::new();
    let mut counted: Vec<Occurrence<T>> = Vec::new();
    for item in items {
        match positions.get(item) {
            Some(&pos) => counted[pos].num += 1,
            None => {
                positions.insert(item, counted.len());
                counted.push(Occurrence {
                    elm: item.clone(),
                    num: 1,
                });
            }
        }
    }

    if reverse {
        counted.sort_by(|a, b| b.num.cmp(&a.num));
    } else {
        counted.sort_by(|a, b| a.num.cmp(&b.num));
    }

    if values_only {
        Compressed::Values(counted.into_iter().map(|o| o.elm).collect())
    } else {
        Compressed::Counted(counted)
    }
}

/// Converts a value tree into JSON.
///
/// JSON-native values pass through; date-times become ISO-8601 strings
/// and non-finite floats, which JSON cannot represent, become their string
/// form.
pub fn prepare_to_serialize(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(n) => serde_json::Value::from(*n),
        Value::Float(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or_else(|| serde_json::Value::String(n.to_string())),
        Value::Text(s) => serde_json::Value::String(s.clone()),
        Value::DateTime(dt) => serde_json::Value::String(iso_format(dt)),
        Value::List(items) => {
            serde_json::Value::Array(items.iter().map(prepare_to_serialize).collect())
        }
        Value::Record(record) => record.to_json(),
    }
}

/// Coerces a value into a list.
///
/// Lists are returned as they are, records are flattened with `_` and
/// laid out as `[key, value, key, value, ...]` (list values are spliced in),
/// and any other value becomes a one-element list.
pub fn ensure_list(value: &Value) -> Vec<Value> {
    match value {
        Value::List(items) => items.clone(),
        Value::Record(record) => {
            let pairs: Vec<Value> = flatten_record(record, "_")
                .into_iter()
                .map(|(key, val)| Value::List(vec![Value::Text(key), val]))
                .collect();
            flatten_list(&pairs)
        }
        other => vec![other.clone()],
    }
}

//! Nested records with path lookup, deep merge and flattening.
//!
//! The [`Record`] type is the core container of this crate: a mapping from
//! string keys to [`Value`]s where every nested mapping is itself a `Record`
//! and every nested list holds `Record`s in place of mappings.
//!
//! # Single storage
//!
//! A record keeps its entries in exactly one map. Key access ([`Record::get`],
//! [`Record::try_get`], indexing) and attribute-style access
//! ([`Record::attr`]) read that same map, so the two views cannot diverge
//! after `update`, `flatten` or `exclude`.
//!
//! # Usage
//!
//! ```
//! use genery::record::{Record, Value};
//! use serde_json::json;
//!
//! let mut record = Record::from_json(json!({
//!     "name": "Report Summaries Departement",
//!     "place": {"id": "85632997", "location": {"lon": 4.66092, "lat": 50.640991}}
//! }))?;
//!
//! assert_eq!(record.attr("place")?.attr("id")?, "85632997");
//! assert_eq!(record.lookup(&["place.location.lat"], &Value::Null), &Value::Float(50.640991));
//!
//! record.update(&Record::from_json(json!({"place": {"location": {"lon": 12.5}}}))?);
//! assert_eq!(record.lookup(&["place.location.lon"], &Value::Null), &Value::Float(12.5));
//!
//! record.flatten();
//! assert!(record.contains_key("place_location_lat"));
//! # Ok::<(), genery::Error>(())
//! ```

use std::{collections::BTreeMap, fmt, ops::Index};

use tracing::debug;

use crate::containers;

pub mod errors;
pub mod path;
pub mod value;

pub use errors::RecordError;
pub use value::Value;

/// A nested, key-addressable record.
///
/// See the [module documentation](self) for an overview.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Record {
    /// Entries indexed by string keys
    children: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a new empty record
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
        }
    }

    /// Builds a record from a parsed JSON object.
    ///
    /// Nested objects become records at every depth; objects inside arrays
    /// are converted as well.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::NotAMapping`] when `value` is not an object.
    pub fn from_json(value: serde_json::Value) -> crate::Result<Self> {
        Ok(Self::try_from(value)?)
    }

    /// Parses a JSON text and builds a record from it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialize`] for invalid JSON and
    /// [`RecordError::NotAMapping`] when the document is not an object.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json(value)
    }

    /// Returns the number of top-level keys
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the record has no keys
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if the record contains the given top-level key
    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Gets a top-level value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.children.get(key)
    }

    /// Gets a mutable reference to a top-level value by key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.children.get_mut(key)
    }

    /// Gets a top-level value by key, failing when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingKey`] when the key does not exist.
    pub fn try_get(&self, key: &str) -> Result<&Value, RecordError> {
        self.children.get(key).ok_or_else(|| RecordError::MissingKey {
            key: key.to_string(),
        })
    }

    /// Attribute-style access to a top-level field.
    ///
    /// Reads the same storage as [`Record::try_get`] and fails under exactly
    /// the same conditions, reporting [`RecordError::MissingAttribute`].
    pub fn attr(&self, name: &str) -> Result<&Value, RecordError> {
        self.children
            .get(name)
            .ok_or_else(|| RecordError::MissingAttribute {
                name: name.to_string(),
            })
    }

    /// Gets a value by key with automatic type conversion using TryFrom
    ///
    /// Returns `None` if the key doesn't exist or the conversion fails.
    ///
    /// ```
    /// # use genery::record::Record;
    /// let record = Record::new().with("name", "Alice").with("age", 30);
    ///
    /// assert_eq!(record.get_as::<&str>("name"), Some("Alice"));
    /// assert_eq!(record.get_as::<i64>("age"), Some(30));
    /// assert_eq!(record.get_as::<i64>("name"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, key: &str) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = RecordError>,
    {
        T::try_from(self.get(key)?).ok()
    }

    /// Get a reference to a nested record by key
    pub fn get_record(&self, key: &str) -> Option<&Record> {
        self.get(key)?.as_record()
    }

    /// Get a mutable reference to a nested record by key
    pub fn get_record_mut(&mut self, key: &str) -> Option<&mut Record> {
        self.get_mut(key)?.as_record_mut()
    }

    /// Sets a top-level value, returning the previous one if present
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Removes a top-level key, returning its value if present
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.children.remove(key)
    }

    /// Removes the given top-level keys.
    ///
    /// Keys are removed in order; the first missing key stops the operation
    /// with [`RecordError::MissingKey`], leaving earlier removals in place.
    ///
    /// ```
    /// # use genery::record::Record;
    /// let mut record = Record::new().with("a", 1).with("b", 2).with("c", 3);
    /// record.exclude(["a", "b"])?.insert("d", 4);
    /// assert_eq!(record.keys().collect::<Vec<_>>(), vec!["c", "d"]);
    /// # Ok::<(), genery::record::RecordError>(())
    /// ```
    pub fn exclude<I, K>(&mut self, keys: I) -> Result<&mut Self, RecordError>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in keys {
            let key = key.as_ref();
            if self.children.remove(key).is_none() {
                return Err(RecordError::MissingKey {
                    key: key.to_string(),
                });
            }
            debug!(key, "Excluded key from record");
        }
        Ok(self)
    }

    /// Returns the first value found under any of `paths`, using `.` as the
    /// delimiter.
    ///
    /// See [`Record::lookup_with`] for the exact semantics.
    pub fn lookup<'a, P: AsRef<str>>(&'a self, paths: &[P], default: &'a Value) -> &'a Value {
        self.lookup_with(paths, default, path::DEFAULT_DELIMITER)
    }

    /// Returns the first value found under any of `paths`.
    ///
    /// Each path is split on `delimiter` and resolved segment by segment.
    /// Paths are tried left to right and the first result that differs from
    /// `default` wins. A path that is absent, too long for the nesting, or
    /// that descends through a non-record value resolves to `default`.
    ///
    /// A stored value that equals `default` cannot be told apart from a
    /// missing one; callers that need that distinction should pass a
    /// sentinel default or use [`path::resolve_path`].
    ///
    /// ```
    /// # use genery::record::{Record, Value};
    /// # use serde_json::json;
    /// let record = Record::from_json(json!({
    ///     "lang": {"en": {"label": "Eng"}, "pl": {"label": "Polish"}}
    /// }))?;
    ///
    /// let paths = ["lang.cz.label", "gorgonzola", "lang.en.label", "wu"];
    /// assert_eq!(record.lookup(&paths, &Value::Null), "Eng");
    /// assert_eq!(record.lookup_with(&["lang/pl/label"], &Value::Null, "/"), "Polish");
    /// # Ok::<(), genery::Error>(())
    /// ```
    pub fn lookup_with<'a, P: AsRef<str>>(
        &'a self,
        paths: &[P],
        default: &'a Value,
        delimiter: &str,
    ) -> &'a Value {
        for path in paths {
            let found = path::resolve_path(self, path.as_ref(), delimiter).unwrap_or(default);
            if found != default {
                return found;
            }
        }
        default
    }

    /// Flattens the record in place using `_` as the separator.
    ///
    /// See [`Record::flatten_with`].
    pub fn flatten(&mut self) -> &mut Self {
        self.flatten_with("_")
    }

    /// Flattens the record in place, joining nested keys with `separator`.
    ///
    /// This is destructive: nested records are replaced by composite keys,
    /// so `{"lang": {"name": "English"}}` becomes `{"lang_name": "English"}`
    /// and `lang` no longer exists. Lists are kept as leaves. When two paths
    /// compose to the same key, the one visited last wins.
    pub fn flatten_with(&mut self, separator: &str) -> &mut Self {
        let before = self.children.len();
        let flat = containers::flatten_record(self, separator);
        self.children = flat.children;
        debug!(
            before,
            after = self.children.len(),
            separator,
            "Flattened record"
        );
        self
    }

    /// Deep-merges `overrides` into this record.
    ///
    /// Non-empty nested records merge recursively; every other value
    /// replaces what was stored under its key. Keys absent from `overrides`
    /// are preserved.
    pub fn update(&mut self, overrides: &Record) -> &mut Self {
        containers::deep_update(self, overrides);
        self
    }

    /// Builds a record from a list of records, mapping each record's `key`
    /// field to its `val` field.
    ///
    /// Key fields holding text are used verbatim, other scalars through
    /// their display form. Duplicate keys overwrite earlier entries.
    ///
    /// ```
    /// # use genery::record::Record;
    /// # use serde_json::json;
    /// let input = vec![
    ///     Record::from_json(json!({"element": "akash", "consort": {"id": "Bhumi"}}))?,
    ///     Record::from_json(json!({"element": "agni", "consort": {"id": "Swaha"}}))?,
    /// ];
    /// let record = Record::from_list(&input, "element", "consort")?;
    /// assert_eq!(record.attr("agni")?.attr("id")?, "Swaha");
    /// # Ok::<(), genery::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MalformedAggregation`] if any record lacks
    /// `key` or `val`, and [`RecordError::TypeMismatch`] if a key field is
    /// not a scalar.
    pub fn from_list(records: &[Record], key: &str, val: &str) -> Result<Self, RecordError> {
        let mut result = Record::new();
        for (index, record) in records.iter().enumerate() {
            let name = aggregation_field(record, index, key)?.to_key()?;
            let value = aggregation_field(record, index, val)?.clone();
            result.children.insert(name, value);
        }
        Ok(result)
    }

    /// Builds a record from a list of records, collecting the `val` fields of
    /// records that share the same `key` field into a list.
    ///
    /// Values keep their order of appearance. Records missing the `val` field
    /// contribute nothing.
    ///
    /// ```
    /// # use genery::record::{Record, Value};
    /// # use serde_json::json;
    /// let input: Vec<Record> = [("GPE", "Philippines"), ("GPE", "Nigeria"), ("ORG", "FSC")]
    ///     .into_iter()
    ///     .map(|(label, text)| Record::new().with("label", label).with("text", text))
    ///     .collect();
    ///
    /// let record = Record::from_list_aggregate(&input, "label", "text")?;
    /// assert_eq!(record["GPE"], Value::from(vec!["Philippines", "Nigeria"]));
    /// assert_eq!(record["ORG"], Value::from(vec!["FSC"]));
    /// # Ok::<(), genery::record::RecordError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - [`RecordError::MalformedAggregation`] if a record lacks the `key` field
    /// - [`RecordError::TypeMismatch`] if a key field is not a scalar
    pub fn from_list_aggregate(
        records: &[Record],
        key: &str,
        val: &str,
    ) -> Result<Self, RecordError> {
        let mut result = Record::new();
        for (index, record) in records.iter().enumerate() {
            let name = aggregation_field(record, index, key)?;
            let Some(value) = record.get(val) else {
                debug!(index, val, "Skipping record without aggregation value");
                continue;
            };

            let slot = result
                .children
                .entry(name.to_key()?)
                .or_insert_with(|| Value::List(Vec::new()));
            if let Value::List(items) = slot {
                items.push(value.clone());
            }
        }
        Ok(result)
    }

    /// Returns an iterator over all key-value pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.children.iter()
    }

    /// Returns a mutable iterator over all key-value pairs
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.children.iter_mut()
    }

    /// Returns an iterator over all keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    /// Returns an iterator over all values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }

    /// Clears all data from this record
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Get a reference to the internal map for advanced access
    pub fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.children
    }

    /// Converts the record into a JSON-safe tree.
    ///
    /// Date-times become ISO-8601 strings; see
    /// [`containers::prepare_to_serialize`].
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.children
                .iter()
                .map(|(key, value)| (key.clone(), containers::prepare_to_serialize(value)))
                .collect(),
        )
    }
}

fn aggregation_field<'a>(
    record: &'a Record,
    index: usize,
    field: &str,
) -> Result<&'a Value, RecordError> {
    record
        .get(field)
        .ok_or_else(|| RecordError::MalformedAggregation {
            index,
            field: field.to_string(),
        })
}

// Builder pattern methods
impl Record {
    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder method to set a nested record
    pub fn with_record(self, key: impl Into<String>, value: Record) -> Self {
        self.with(key, Value::Record(value))
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = RecordError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match Value::from(value) {
            Value::Record(record) => Ok(record),
            other => Err(RecordError::NotAMapping {
                actual: other.type_name().to_string(),
            }),
        }
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Record(record) => Ok(record),
            other => Err(RecordError::NotAMapping {
                actual: other.type_name().to_string(),
            }),
        }
    }
}

impl Index<&str> for Record {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if the key is not present, like map indexing does.
    fn index(&self, key: &str) -> &Value {
        match self.children.get(key) {
            Some(value) => value,
            None => panic!("Missing key: {key}"),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Self {
            children: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

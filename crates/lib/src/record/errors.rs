//! Error types for record operations.
//!
//! This module defines structured error types for [`Record`](super::Record)
//! access and construction: missing keys, attribute-style access to absent
//! fields, malformed aggregation input and non-mapping top-level input.

use thiserror::Error;

/// Structured error types for record operations.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// Direct key access or removal of a key that does not exist
    #[error("Missing key: {key}")]
    MissingKey { key: String },

    /// Attribute-style access to a field that does not exist at that level
    #[error("Record has no attribute '{name}'")]
    MissingAttribute { name: String },

    /// An aggregation record lacks the designated key or value field
    #[error("Malformed aggregation input at record {index}: missing field '{field}'")]
    MalformedAggregation { index: usize, field: String },

    /// A record was requested from something that is not a mapping
    #[error("Expected a mapping, found {actual}")]
    NotAMapping { actual: String },

    /// Type mismatch during typed value access
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl RecordError {
    /// Check if this error is a missing key or missing attribute
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RecordError::MissingKey { .. } | RecordError::MissingAttribute { .. }
        )
    }

    /// Check if this error was raised by an aggregation constructor
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            RecordError::MalformedAggregation { .. } | RecordError::NotAMapping { .. }
        )
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, RecordError::TypeMismatch { .. })
    }

    /// Get the key or attribute name if this is a not-found error
    pub fn key(&self) -> Option<&str> {
        match self {
            RecordError::MissingKey { key } => Some(key),
            RecordError::MissingAttribute { name } => Some(name),
            _ => None,
        }
    }
}

impl From<RecordError> for crate::Error {
    fn from(err: RecordError) -> Self {
        crate::Error::Record(err)
    }
}

//!
//! Genery: general-purpose helpers for nested records, text and small
//! calculations.
//!
//! ## Core Concepts
//!
//! * **Records (`record::Record`)**: A nested key/value container built from JSON-like data, with attribute-style access, path lookup, deep merge and flattening.
//! * **Values (`record::Value`)**: The leaf and branch variants a record holds: scalars, date-times, lists and nested records.
//! * **Containers (`containers`)**: Free functions over records and sequences: deep update, key normalization, distinct elements and frequency compression.
//! * **Text (`text`)**: Transliteration to basic Latin, cleanup, URL extraction and normalization, truncation and key generation.
//! * **Calculations, dates and commands (`calcs`, `datetime`, `cmd`)**: Rescaling of weights, chart interval rounding, human-readable durations and external command execution.

pub mod calcs;
pub mod cmd;
pub mod containers;
pub mod datetime;
pub mod record;
pub mod text;
pub mod timing;

/// Re-export the core container types for easier access.
pub use record::{Record, Value};

/// Result type used throughout the Genery library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Genery library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured record errors from the record module
    #[error(transparent)]
    Record(record::RecordError),

    /// Structured date/time errors from the datetime module
    #[error(transparent)]
    Time(datetime::TimeError),

    /// Structured command errors from the cmd module
    #[error(transparent)]
    Cmd(cmd::CmdError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Record(_) => "record",
            Error::Time(_) => "datetime",
            Error::Cmd(_) => "cmd",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a key, attribute or command was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Record(record_err) => record_err.is_not_found(),
            Error::Cmd(cmd_err) => cmd_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error was caused by malformed input data.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Error::Record(record_err) => record_err.is_malformed_input(),
            Error::Time(time_err) => time_err.is_invalid_input(),
            Error::Serialize(_) => true,
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Record(record_err) => record_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_) | Error::Cmd(cmd::CmdError::Io(_)))
    }
}

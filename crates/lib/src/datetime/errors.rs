//! Error types for date and time helpers.

use thiserror::Error;

/// Structured error types for date and time helpers.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum TimeError {
    /// A duration was negative where only non-negative durations make sense
    #[error("Time value cannot be negative: {ms} ms")]
    NegativeDuration { ms: f64 },
}

impl TimeError {
    /// Check if this error was caused by invalid input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, TimeError::NegativeDuration { .. })
    }
}

impl From<TimeError> for crate::Error {
    fn from(err: TimeError) -> Self {
        crate::Error::Time(err)
    }
}

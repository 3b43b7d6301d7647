//! Errors raised while ingesting a best-track file.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrackError {
    /// A line that cannot be turned into a record. Recovered by skipping the line.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A position that is not `<number><hemisphere>`. Never recovered.
    #[error("invalid coordinate `{value}`")]
    InvalidCoordinate { value: String },

    /// A summary was requested for a track with no records.
    #[error("cannot summarise an empty track")]
    EmptySeries,
}

impl TrackError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        TrackError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// True for errors that only invalidate a single line.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TrackError::MalformedRecord { .. })
    }
}

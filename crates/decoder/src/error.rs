use model::{ModelError, RawKind, ResultFormat};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("range error: {0}")]
    Range(#[from] RangeError),
}

/// The input does not match what its declared format allows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("{kind} cell is not valid in a {format} result")]
    KindMismatch { format: ResultFormat, kind: RawKind },

    #[error("'{input}' does not match YYYY-MM-DD")]
    Pattern { input: String },

    #[error("'{input}' is not a calendar date")]
    InvalidDate { input: String },
}

/// The value cannot be represented as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("{0} days from the epoch is outside the supported date range")]
    EpochDays(i64),

    #[error("{0} ms from the epoch is outside the supported instant range")]
    EpochMillis(i64),

    #[error("offset of {0} minutes is not a valid UTC offset")]
    Offset(i32),
}

/// A cell of a column failed to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row}: {source}")]
pub struct ColumnDecodeError {
    pub row: usize,
    pub source: DecodeError,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid decoder settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl DecodeError {
    pub fn is_format_error(&self) -> bool {
        matches!(self, DecodeError::Format(_))
    }

    pub fn is_range_error(&self) -> bool {
        matches!(self, DecodeError::Range(_))
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;

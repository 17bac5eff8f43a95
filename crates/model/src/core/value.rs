use serde::{Deserialize, Serialize};
use std::fmt;

/// A temporal cell exactly as the result-set reader handed it over, before
/// any zone interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawTemporalValue {
    /// Days since 1970-01-01. A pure date: no time of day, no zone.
    EpochDays(i64),

    /// UTC instant in milliseconds together with the offset the source
    /// attached to it.
    EpochMillisWithOffset { millis: i64, offset_minutes: i32 },

    /// Textual `YYYY-MM-DD`.
    IsoDate(String),
}

/// Variant tag of a [`RawTemporalValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawKind {
    EpochDays,
    EpochMillisWithOffset,
    IsoDate,
}

impl RawTemporalValue {
    pub fn kind(&self) -> RawKind {
        match self {
            RawTemporalValue::EpochDays(_) => RawKind::EpochDays,
            RawTemporalValue::EpochMillisWithOffset { .. } => RawKind::EpochMillisWithOffset,
            RawTemporalValue::IsoDate(_) => RawKind::IsoDate,
        }
    }

    pub fn iso_date(value: impl Into<String>) -> Self {
        RawTemporalValue::IsoDate(value.into())
    }
}

impl fmt::Display for RawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RawKind::EpochDays => "epoch-days",
            RawKind::EpochMillisWithOffset => "epoch-millis-with-offset",
            RawKind::IsoDate => "iso-date",
        };
        f.write_str(name)
    }
}

impl fmt::Display for RawTemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawTemporalValue::EpochDays(days) => write!(f, "{days}d"),
            RawTemporalValue::EpochMillisWithOffset {
                millis,
                offset_minutes,
            } => write!(f, "{millis}ms@{offset_minutes:+}min"),
            RawTemporalValue::IsoDate(s) => write!(f, "'{s}'"),
        }
    }
}

use crate::core::error::ModelError;
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A zone an instant can be re-expressed in before truncating it to a date.
///
/// Parsed from `UTC`, `Z`, `+HH:MM`, `+HHMM`, `+HH` (either sign) or an IANA
/// name such as `America/New_York`. There is no fallback zone: anything else
/// is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TargetZone {
    Fixed(FixedOffset),
    Named(Tz),
}

impl TargetZone {
    pub fn utc() -> Self {
        TargetZone::Fixed(Utc.fix())
    }

    /// Fixed zone `minutes` east of UTC; `None` unless |minutes| < 24h.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(TargetZone::Fixed)
    }

    /// Calendar date of `instant` as observed in this zone; `None` when the
    /// local wall time leaves the range chrono can represent.
    pub fn local_date(&self, instant: &DateTime<Utc>) -> Option<NaiveDate> {
        let naive_utc = instant.naive_utc();
        let offset = match self {
            TargetZone::Fixed(offset) => *offset,
            TargetZone::Named(tz) => tz.offset_from_utc_datetime(&naive_utc).fix(),
        };
        naive_utc
            .checked_add_offset(offset)
            .map(|local| local.date())
    }
}

impl FromStr for TargetZone {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("utc") || trimmed == "Z" {
            return Ok(TargetZone::utc());
        }

        if trimmed.starts_with(['+', '-']) {
            return parse_fixed_offset(trimmed)
                .map(TargetZone::Fixed)
                .ok_or_else(|| ModelError::InvalidZone(s.to_string()));
        }

        trimmed
            .parse::<Tz>()
            .map(TargetZone::Named)
            .map_err(|_| ModelError::InvalidZone(s.to_string()))
    }
}

impl TryFrom<String> for TargetZone {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TargetZone> for String {
    fn from(zone: TargetZone) -> Self {
        zone.to_string()
    }
}

impl fmt::Display for TargetZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetZone::Fixed(offset) => write!(f, "{offset}"),
            TargetZone::Named(tz) => write!(f, "{tz}"),
        }
    }
}

fn parse_fixed_offset(raw: &str) -> Option<FixedOffset> {
    let (sign, rest) = match raw.as_bytes().first()? {
        b'+' => (1, &raw[1..]),
        b'-' => (-1, &raw[1..]),
        _ => return None,
    };

    if !rest.is_ascii() {
        return None;
    }

    let (hours, minutes) = match rest.len() {
        2 => (rest, "00"),
        4 => rest.split_at(2),
        5 if rest.as_bytes()[2] == b':' => (&rest[..2], &rest[3..]),
        _ => return None,
    };

    let all_digits = |field: &str| field.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(hours) || !all_digits(minutes) {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

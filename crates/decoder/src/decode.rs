use crate::{
    error::{FormatError, RangeError, Result},
    iso::parse_iso_date,
};
use chrono::{DateTime, Utc};
use model::{
    CalendarDate, RawTemporalValue, ResultFormat, TargetZone, ZoneConversion, ZonePolicy,
};
use tracing::{debug, trace, warn};

/// Decode one temporal cell into the calendar date the source meant.
///
/// The path is chosen by the variant tag alone. `EpochDays` and `IsoDate`
/// never see `policy`; only instants are subject to zone handling, and only
/// the zones named in `policy` are ever used.
pub fn decode(
    raw: &RawTemporalValue,
    format: ResultFormat,
    policy: &ZonePolicy,
) -> Result<CalendarDate> {
    let kind = raw.kind();
    if !format.accepts(kind) {
        warn!(%format, %kind, "temporal cell rejected by result format");
        return Err(FormatError::KindMismatch { format, kind }.into());
    }

    trace!(%format, value = %raw, "decoding temporal cell");
    match raw {
        RawTemporalValue::EpochDays(days) => decode_epoch_days(*days),
        RawTemporalValue::EpochMillisWithOffset {
            millis,
            offset_minutes,
        } => decode_instant(*millis, *offset_minutes, policy),
        RawTemporalValue::IsoDate(input) => parse_iso_date(input),
    }
}

fn decode_epoch_days(days: i64) -> Result<CalendarDate> {
    CalendarDate::from_epoch_days(days).ok_or_else(|| RangeError::EpochDays(days).into())
}

fn decode_instant(millis: i64, offset_minutes: i32, policy: &ZonePolicy) -> Result<CalendarDate> {
    let instant =
        DateTime::<Utc>::from_timestamp_millis(millis).ok_or(RangeError::EpochMillis(millis))?;

    let source = if policy.honor_embedded_offset {
        TargetZone::from_offset_minutes(offset_minutes).ok_or(RangeError::Offset(offset_minutes))?
    } else {
        TargetZone::utc()
    };

    let zone = match policy.conversion {
        ZoneConversion::None => source,
        ZoneConversion::ToTarget(target) => {
            debug!(
                source_zone = %source,
                target_zone = %target,
                millis,
                "re-expressing instant in target zone"
            );
            target
        }
    };

    zone.local_date(&instant)
        .map(CalendarDate::from)
        .ok_or_else(|| RangeError::EpochMillis(millis).into())
}

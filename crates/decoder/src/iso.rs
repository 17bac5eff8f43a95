use crate::error::{FormatError, Result};
use model::CalendarDate;

const ISO_DATE_LEN: usize = 10;

/// Parse a fixed-width `YYYY-MM-DD` string field by field.
///
/// No instant or zone is involved at any point.
pub fn parse_iso_date(input: &str) -> Result<CalendarDate> {
    let bytes = input.as_bytes();
    if bytes.len() != ISO_DATE_LEN || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(pattern_error(input));
    }

    let year = parse_digits(&bytes[0..4]).ok_or_else(|| pattern_error(input))?;
    let month = parse_digits(&bytes[5..7]).ok_or_else(|| pattern_error(input))?;
    let day = parse_digits(&bytes[8..10]).ok_or_else(|| pattern_error(input))?;

    // four digits always fit an i32
    CalendarDate::new(year as i32, month, day).ok_or_else(|| {
        FormatError::InvalidDate {
            input: input.to_string(),
        }
        .into()
    })
}

fn parse_digits(field: &[u8]) -> Option<u32> {
    field.iter().try_fold(0u32, |acc, b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

fn pattern_error(input: &str) -> crate::error::DecodeError {
    FormatError::Pattern {
        input: input.to_string(),
    }
    .into()
}

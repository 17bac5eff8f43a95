use crate::{decode::decode, error::ColumnDecodeError};
use model::{CalendarDate, RawTemporalValue, ResultFormat, ZonePolicy};
use tracing::debug;

/// Decode a column of cells. SQL NULLs (`None`) stay `None`; the first
/// failing cell aborts the column and reports its row index.
pub fn decode_column(
    cells: &[Option<RawTemporalValue>],
    format: ResultFormat,
    policy: &ZonePolicy,
) -> Result<Vec<Option<CalendarDate>>, ColumnDecodeError> {
    debug!(%format, rows = cells.len(), "decoding temporal column");

    cells
        .iter()
        .enumerate()
        .map(|(row, cell)| {
            cell.as_ref()
                .map(|raw| decode(raw, format, policy))
                .transpose()
                .map_err(|source| ColumnDecodeError { row, source })
        })
        .collect()
}

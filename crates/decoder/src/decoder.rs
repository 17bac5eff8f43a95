use crate::{
    column::decode_column,
    decode::decode,
    error::{ColumnDecodeError, Result},
};
use model::{CalendarDate, RawTemporalValue, ResultFormat, ZonePolicy};

/// A result format paired with the zone policy the caller chose for it.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalDecoder {
    format: ResultFormat,
    policy: ZonePolicy,
}

impl TemporalDecoder {
    pub fn new(format: ResultFormat, policy: ZonePolicy) -> Self {
        Self { format, policy }
    }

    pub fn format(&self) -> ResultFormat {
        self.format
    }

    pub fn policy(&self) -> &ZonePolicy {
        &self.policy
    }

    pub fn decode(&self, raw: &RawTemporalValue) -> Result<CalendarDate> {
        decode(raw, self.format, &self.policy)
    }

    pub fn decode_column(
        &self,
        cells: &[Option<RawTemporalValue>],
    ) -> std::result::Result<Vec<Option<CalendarDate>>, ColumnDecodeError> {
        decode_column(cells, self.format, &self.policy)
    }
}

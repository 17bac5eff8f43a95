use crate::core::{format::ResultFormat, zone::TargetZone};
use serde::{Deserialize, Serialize};

/// Whether an instant is re-expressed in a caller-chosen zone before it is
/// truncated to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneConversion {
    None,
    ToTarget(TargetZone),
}

/// Zone handling for instant-bearing cells.
///
/// Deliberately has no `Default`: the conversion step is always stated by
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonePolicy {
    pub honor_embedded_offset: bool,
    pub conversion: ZoneConversion,
}

impl ZonePolicy {
    pub fn new(honor_embedded_offset: bool, conversion: ZoneConversion) -> Self {
        Self {
            honor_embedded_offset,
            conversion,
        }
    }

    /// Honors the embedded offset exactly when `format` carries one.
    pub fn for_format(format: ResultFormat, conversion: ZoneConversion) -> Self {
        Self::new(format.embeds_offset(), conversion)
    }

    pub fn target_zone(&self) -> Option<&TargetZone> {
        match &self.conversion {
            ZoneConversion::None => None,
            ZoneConversion::ToTarget(zone) => Some(zone),
        }
    }
}

//! Timezone-safe decoding of temporal result-set cells into calendar dates.
//!
//! Every setting that influences a conversion travels in a [`ZonePolicy`];
//! nothing here consults the process time zone or any other global.

pub mod column;
pub mod decode;
pub mod decoder;
pub mod error;
pub mod iso;
pub mod settings;

pub use column::decode_column;
pub use decode::decode;
pub use decoder::TemporalDecoder;
pub use error::{ColumnDecodeError, DecodeError, FormatError, RangeError, Result, SettingsError};
pub use settings::{ConversionSetting, DecoderSettings};

pub use model::{
    CalendarDate, RawKind, RawTemporalValue, ResultFormat, TargetZone, ZoneConversion, ZonePolicy,
};

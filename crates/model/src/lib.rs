pub mod core;

pub use crate::core::{
    date::CalendarDate,
    error::ModelError,
    format::ResultFormat,
    policy::{ZoneConversion, ZonePolicy},
    value::{RawKind, RawTemporalValue},
    zone::TargetZone,
};

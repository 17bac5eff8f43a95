use crate::core::{error::ModelError, value::RawKind};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, str::FromStr};

/// How the source system serialized the result set.
///
/// Parsing and deserialization share the same case-insensitive alias table
/// (`arrow`, `json`, `legacy-row`, ...); serialization writes the canonical
/// snake_case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ResultFormat {
    TextJson,
    LegacyRow,
    ColumnarBinary,
}

lazy_static! {
    static ref FORMAT_ALIASES: HashMap<&'static str, ResultFormat> = build_format_aliases();
}

impl ResultFormat {
    /// Whether a cell of the given kind may appear in this format.
    pub fn accepts(&self, kind: RawKind) -> bool {
        matches!(
            (self, kind),
            (ResultFormat::TextJson, RawKind::IsoDate)
                | (ResultFormat::LegacyRow, RawKind::EpochMillisWithOffset)
                | (ResultFormat::ColumnarBinary, RawKind::EpochDays)
                | (ResultFormat::ColumnarBinary, RawKind::EpochMillisWithOffset)
        )
    }

    /// Whether instants in this format carry the source's UTC offset.
    pub fn embeds_offset(&self) -> bool {
        match self {
            ResultFormat::TextJson => false,
            ResultFormat::LegacyRow | ResultFormat::ColumnarBinary => true,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResultFormat::TextJson => "text_json",
            ResultFormat::LegacyRow => "legacy_row",
            ResultFormat::ColumnarBinary => "columnar_binary",
        }
    }

    fn normalize_name(name: &str) -> String {
        name.trim().to_ascii_lowercase().replace('-', "_")
    }
}

impl FromStr for ResultFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FORMAT_ALIASES
            .get(Self::normalize_name(s).as_str())
            .copied()
            .ok_or_else(|| ModelError::UnknownFormat(s.to_string()))
    }
}

impl TryFrom<String> for ResultFormat {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResultFormat> for String {
    fn from(format: ResultFormat) -> Self {
        format.name().to_string()
    }
}

impl fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn build_format_aliases() -> HashMap<&'static str, ResultFormat> {
    HashMap::from([
        ("text_json", ResultFormat::TextJson),
        ("json", ResultFormat::TextJson),
        ("text", ResultFormat::TextJson),
        ("legacy_row", ResultFormat::LegacyRow),
        ("legacy", ResultFormat::LegacyRow),
        ("row", ResultFormat::LegacyRow),
        ("columnar_binary", ResultFormat::ColumnarBinary),
        ("columnar", ResultFormat::ColumnarBinary),
        ("arrow", ResultFormat::ColumnarBinary),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("json".parse::<ResultFormat>(), Ok(ResultFormat::TextJson));
        assert_eq!("Legacy-Row".parse::<ResultFormat>(), Ok(ResultFormat::LegacyRow));
        assert_eq!(" ARROW ".parse::<ResultFormat>(), Ok(ResultFormat::ColumnarBinary));
        assert_eq!(
            "csv".parse::<ResultFormat>(),
            Err(ModelError::UnknownFormat("csv".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for format in [
            ResultFormat::TextJson,
            ResultFormat::LegacyRow,
            ResultFormat::ColumnarBinary,
        ] {
            assert_eq!(format.to_string().parse::<ResultFormat>(), Ok(format));
        }
    }

    #[test]
    fn test_accepted_kinds() {
        assert!(ResultFormat::TextJson.accepts(RawKind::IsoDate));
        assert!(!ResultFormat::TextJson.accepts(RawKind::EpochDays));
        assert!(ResultFormat::LegacyRow.accepts(RawKind::EpochMillisWithOffset));
        assert!(!ResultFormat::LegacyRow.accepts(RawKind::IsoDate));
        assert!(ResultFormat::ColumnarBinary.accepts(RawKind::EpochDays));
        assert!(ResultFormat::ColumnarBinary.accepts(RawKind::EpochMillisWithOffset));
        assert!(!ResultFormat::ColumnarBinary.accepts(RawKind::IsoDate));
    }

    #[test]
    fn test_serde_accepts_the_same_aliases() {
        for (alias, expected) in [
            ("\"arrow\"", ResultFormat::ColumnarBinary),
            ("\"JSON\"", ResultFormat::TextJson),
            ("\"Legacy-Row\"", ResultFormat::LegacyRow),
            ("\"columnar_binary\"", ResultFormat::ColumnarBinary),
        ] {
            let format: ResultFormat = serde_json::from_str(alias).unwrap();
            assert_eq!(format, expected, "{alias}");
        }

        assert!(serde_json::from_str::<ResultFormat>("\"parquet\"").is_err());
        assert_eq!(
            serde_json::to_string(&ResultFormat::ColumnarBinary).unwrap(),
            "\"columnar_binary\""
        );
    }

    #[test]
    fn test_embeds_offset() {
        assert!(!ResultFormat::TextJson.embeds_offset());
        assert!(ResultFormat::LegacyRow.embeds_offset());
        assert!(ResultFormat::ColumnarBinary.embeds_offset());
    }
}

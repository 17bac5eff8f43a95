use crate::{decoder::TemporalDecoder, error::SettingsError};
use model::{ResultFormat, TargetZone, ZoneConversion, ZonePolicy};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Decoder configuration as supplied by the embedding application.
///
/// ```json
/// {
///   "format": "arrow",
///   "honor_embedded_offset": true,
///   "target_zone_conversion": { "to_target": "America/New_York" }
/// }
/// ```
///
/// `target_zone_conversion` is mandatory (`"none"` to opt out). When
/// `honor_embedded_offset` is absent it follows the format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecoderSettings {
    pub format: ResultFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honor_embedded_offset: Option<bool>,
    pub target_zone_conversion: ConversionSetting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionSetting {
    None,
    ToTarget(String),
}

impl DecoderSettings {
    pub fn from_json(source: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn build(&self) -> Result<TemporalDecoder, SettingsError> {
        let format = self.format;

        let conversion = match &self.target_zone_conversion {
            ConversionSetting::None => ZoneConversion::None,
            ConversionSetting::ToTarget(zone) => {
                ZoneConversion::ToTarget(zone.parse::<TargetZone>()?)
            }
        };

        let policy = match self.honor_embedded_offset {
            Some(honor) => ZonePolicy::new(honor, conversion),
            None => ZonePolicy::for_format(format, conversion),
        };

        debug!(%format, ?policy, "built temporal decoder");
        Ok(TemporalDecoder::new(format, policy))
    }
}

impl TryFrom<&DecoderSettings> for TemporalDecoder {
    type Error = SettingsError;

    fn try_from(settings: &DecoderSettings) -> Result<Self, Self::Error> {
        settings.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::ModelError;

    #[test]
    fn test_build_from_json() {
        let settings = DecoderSettings::from_json(
            r#"{
                "format": "arrow",
                "target_zone_conversion": { "to_target": "America/New_York" }
            }"#,
        )
        .unwrap();

        let decoder = settings.build().unwrap();
        assert_eq!(decoder.format(), ResultFormat::ColumnarBinary);
        assert!(decoder.policy().honor_embedded_offset);
        let new_york: TargetZone = "America/New_York".parse().unwrap();
        assert_eq!(decoder.policy().target_zone(), Some(&new_york));
    }

    #[test]
    fn test_explicit_offset_flag_wins() {
        let settings = DecoderSettings::from_json(
            r#"{"format": "Legacy-Row", "honor_embedded_offset": false, "target_zone_conversion": "none"}"#,
        )
        .unwrap();

        let decoder = TemporalDecoder::try_from(&settings).unwrap();
        assert_eq!(decoder.format(), ResultFormat::LegacyRow);
        assert_eq!(
            *decoder.policy(),
            ZonePolicy::new(false, ZoneConversion::None)
        );
    }

    #[test]
    fn test_conversion_is_required() {
        let result = DecoderSettings::from_json(r#"{"format": "json"}"#);
        assert!(matches!(result, Err(SettingsError::Json(_))));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = DecoderSettings::from_json(
            r#"{"format": "json", "target_zone_conversion": "none", "timezone": "UTC"}"#,
        );
        assert!(matches!(result, Err(SettingsError::Json(_))));
    }

    #[test]
    fn test_invalid_zone_is_not_replaced_by_utc() {
        let settings = DecoderSettings {
            format: ResultFormat::TextJson,
            honor_embedded_offset: None,
            target_zone_conversion: ConversionSetting::ToTarget("Atlantis/Capital".to_string()),
        };

        let err = settings.build().unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Model(ModelError::InvalidZone(ref zone)) if zone == "Atlantis/Capital"
        ));
    }

    #[test]
    fn test_unknown_format_is_rejected_while_loading() {
        let err = DecoderSettings::from_json(
            r#"{"format": "protobuf", "target_zone_conversion": "none"}"#,
        )
        .unwrap_err();

        assert!(matches!(err, SettingsError::Json(_)));
        assert!(err.to_string().contains("unknown result format: protobuf"));
    }

    #[test]
    fn test_settings_serialize_back() {
        let settings = DecoderSettings {
            format: ResultFormat::TextJson,
            honor_embedded_offset: None,
            target_zone_conversion: ConversionSetting::ToTarget("+05:30".to_string()),
        };

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "format": "text_json",
                "target_zone_conversion": { "to_target": "+05:30" }
            })
        );
    }
}

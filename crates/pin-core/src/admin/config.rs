//! Admin configuration model.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::mask::KEY_NOT_SET;
use crate::error::{PinError, Result};

/// Accepted values for `rag.topK`.
pub const TOP_K_RANGE: RangeInclusive<u32> = 1..=10;
/// Accepted values for `rag.minScore`.
pub const MIN_SCORE_RANGE: RangeInclusive<f64> = 0.0..=1.0;
/// Accepted values for `flows.maxTurnsBeforeEscalate`.
pub const MAX_TURNS_RANGE: RangeInclusive<u32> = 3..=30;

/// Language-model provider selectable in the admin panel.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LlmProvider {
    #[default]
    Mock,
    OpenaiCompat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub model: String,
    /// Display form of the last entered key; the key itself is never kept.
    pub api_key_masked: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: LlmProvider::Mock,
            model: "gpt-4o-mini".to_string(),
            api_key_masked: KEY_NOT_SET.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagSettings {
    pub top_k: u32,
    pub min_score: f64,
}

impl Default for RagSettings {
    fn default() -> Self {
        Self {
            top_k: 4,
            min_score: 0.15,
        }
    }
}

impl RagSettings {
    pub fn validate(&self) -> Result<()> {
        if !TOP_K_RANGE.contains(&self.top_k) {
            return Err(PinError::validation(
                "topK",
                format!(
                    "{} is outside {}..={}",
                    self.top_k,
                    TOP_K_RANGE.start(),
                    TOP_K_RANGE.end()
                ),
            ));
        }
        if !MIN_SCORE_RANGE.contains(&self.min_score) {
            return Err(PinError::validation(
                "minScore",
                format!(
                    "{} is outside {}..={}",
                    self.min_score,
                    MIN_SCORE_RANGE.start(),
                    MIN_SCORE_RANGE.end()
                ),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSettings {
    /// User turns after which the assistant recommends generating a ticket.
    pub max_turns_before_escalate: u32,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            max_turns_before_escalate: 8,
        }
    }
}

impl FlowSettings {
    pub fn validate(&self) -> Result<()> {
        if !MAX_TURNS_RANGE.contains(&self.max_turns_before_escalate) {
            return Err(PinError::validation(
                "maxTurnsBeforeEscalate",
                format!(
                    "{} is outside {}..={}",
                    self.max_turns_before_escalate,
                    MAX_TURNS_RANGE.start(),
                    MAX_TURNS_RANGE.end()
                ),
            ));
        }
        Ok(())
    }
}

/// Admin configuration singleton.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdminConfig {
    pub llm: LlmSettings,
    pub rag: RagSettings,
    pub flows: FlowSettings,
}

impl AdminConfig {
    /// Applies the load policy to a stored blob.
    ///
    /// The stored JSON is deep-merged over the defaults so missing fields and
    /// sub-objects self-heal. Returns `None` when the blob is not JSON or the
    /// merged value does not decode; callers then use the defaults as a whole.
    pub fn merge_over_defaults(raw: &str) -> Option<Self> {
        let stored: JsonValue = serde_json::from_str(raw).ok()?;
        let mut merged = serde_json::to_value(Self::default()).ok()?;
        merge_json(&mut merged, stored);
        serde_json::from_value(merged).ok()
    }
}

/// Recursively merges `overlay` into `base`.
///
/// Objects merge key by key; any other overlay value (including arrays)
/// replaces the base value. A `null` overlay leaves the base untouched.
pub fn merge_json(base: &mut JsonValue, overlay: JsonValue) {
    match (base, overlay) {
        (JsonValue::Object(base_map), JsonValue::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (_, JsonValue::Null) => {}
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::default();
        assert_eq!(config.llm.provider, LlmProvider::Mock);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.api_key_masked, "not-set");
        assert_eq!(config.rag.top_k, 4);
        assert_eq!(config.rag.min_score, 0.15);
        assert_eq!(config.flows.max_turns_before_escalate, 8);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(AdminConfig::default()).unwrap();
        assert_eq!(json["llm"]["apiKeyMasked"], "not-set");
        assert_eq!(json["llm"]["provider"], "mock");
        assert_eq!(json["rag"]["topK"], 4);
        assert_eq!(json["flows"]["maxTurnsBeforeEscalate"], 8);
    }

    #[test]
    fn test_merge_keeps_missing_subobjects() {
        let config =
            AdminConfig::merge_over_defaults(r#"{"rag": {"topK": 7}}"#).unwrap();
        assert_eq!(config.rag.top_k, 7);
        assert_eq!(config.rag.min_score, 0.15);
        assert_eq!(config.llm, LlmSettings::default());
        assert_eq!(config.flows, FlowSettings::default());
    }

    #[test]
    fn test_merge_ignores_unknown_fields() {
        let config = AdminConfig::merge_over_defaults(
            r#"{"llm": {"provider": "openai_compat", "temperature": 0.2}, "extra": true}"#,
        )
        .unwrap();
        assert_eq!(config.llm.provider, LlmProvider::OpenaiCompat);
        assert_eq!(config.llm.model, "gpt-4o-mini");
    }

    #[test]
    fn test_merge_rejects_garbage() {
        assert!(AdminConfig::merge_over_defaults("{ not json").is_none());
        assert!(AdminConfig::merge_over_defaults(r#"{"rag": {"topK": "many"}}"#).is_none());
    }

    #[test]
    fn test_merge_json_null_keeps_base() {
        let mut base = json!({"a": 1, "b": {"c": 2}});
        merge_json(&mut base, json!({"a": null, "b": {"d": 3}}));
        assert_eq!(base, json!({"a": 1, "b": {"c": 2, "d": 3}}));
    }

    #[test]
    fn test_validation_ranges() {
        assert!(RagSettings { top_k: 0, min_score: 0.5 }.validate().is_err());
        assert!(RagSettings { top_k: 10, min_score: 1.0 }.validate().is_ok());
        assert!(RagSettings { top_k: 3, min_score: 1.5 }.validate().is_err());
        assert!(FlowSettings { max_turns_before_escalate: 2 }.validate().is_err());
        assert!(FlowSettings { max_turns_before_escalate: 30 }.validate().is_ok());
    }
}

//! Admin form submissions.
//!
//! `None` (or a blank string) means "keep the current value". Applying an
//! update never validates; the controller validates the result before saving.

use pin_core::admin::{FlowSettings, LlmProvider, LlmSettings, RagSettings, mask_api_key};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LlmUpdate {
    pub provider: Option<LlmProvider>,
    pub model: Option<String>,
    /// Raw key as typed. Only its mask is kept.
    pub api_key: Option<String>,
}

impl LlmUpdate {
    pub fn apply_to(&self, current: &LlmSettings) -> LlmSettings {
        let mut next = current.clone();
        if let Some(provider) = self.provider {
            next.provider = provider;
        }
        if let Some(model) = non_blank(self.model.as_deref()) {
            next.model = model.to_string();
        }
        if let Some(key) = non_blank(self.api_key.as_deref()) {
            next.api_key_masked = mask_api_key(key);
        }
        next
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RagUpdate {
    pub top_k: Option<u32>,
    pub min_score: Option<f64>,
}

impl RagUpdate {
    pub fn apply_to(&self, current: &RagSettings) -> RagSettings {
        RagSettings {
            top_k: self.top_k.unwrap_or(current.top_k),
            min_score: self.min_score.unwrap_or(current.min_score),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlowsUpdate {
    pub max_turns_before_escalate: Option<u32>,
}

impl FlowsUpdate {
    pub fn apply_to(&self, current: &FlowSettings) -> FlowSettings {
        FlowSettings {
            max_turns_before_escalate: self
                .max_turns_before_escalate
                .unwrap_or(current.max_turns_before_escalate),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

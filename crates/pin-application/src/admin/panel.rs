//! Admin views.

use pin_core::admin::{AuditEntry, FlowSettings, LlmProvider, LlmSettings, RagSettings};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum AdminView {
    #[default]
    Llm,
    Rag,
    Flows,
    Audit,
}

impl AdminView {
    /// Parses a view name; unknown names fall back to [`AdminView::Llm`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

/// Render output of one admin view.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminPanel {
    Llm {
        settings: LlmSettings,
        /// Selectable providers.
        providers: Vec<LlmProvider>,
    },
    Rag(RagSettings),
    Flows(FlowSettings),
    /// Newest first.
    Audit(Vec<AuditEntry>),
}

impl AdminPanel {
    pub fn view(&self) -> AdminView {
        match self {
            Self::Llm { .. } => AdminView::Llm,
            Self::Rag(_) => AdminView::Rag,
            Self::Flows(_) => AdminView::Flows,
            Self::Audit(_) => AdminView::Audit,
        }
    }

    pub(crate) fn llm(settings: LlmSettings) -> Self {
        Self::Llm {
            settings,
            providers: LlmProvider::iter().collect(),
        }
    }
}

//! Admin page controller.

use std::sync::Arc;

use pin_core::admin::{
    AdminConfig, AdminConfigRepository, AuditAction, AuditEntry, AuditLog, FlowSettings,
    LlmSettings, RagSettings,
};
use pin_core::error::Result;
use pin_core::session::{Session, SessionRepository};
use serde_json::json;

use super::panel::{AdminPanel, AdminView};
use super::update::{FlowsUpdate, LlmUpdate, RagUpdate};
use crate::auth::{AuthGate, Entry, Page};

/// Edits the admin configuration on behalf of the logged-in user.
///
/// The configuration is loaded once when the page opens. Every save
/// validates, overwrites the whole stored object and records one audit entry
/// with the session email as actor. When the audit entry cannot be written
/// the previous configuration is written back and the save fails.
pub struct AdminController {
    session: Session,
    gate: AuthGate,
    admin: Arc<dyn AdminConfigRepository>,
    config: AdminConfig,
}

impl AdminController {
    pub fn open(
        sessions: Arc<dyn SessionRepository>,
        admin: Arc<dyn AdminConfigRepository>,
    ) -> Result<Entry<Self>> {
        let gate = AuthGate::new(sessions);
        let session = match gate.require()? {
            Entry::Ready(session) => session,
            Entry::Redirect(page) => return Ok(Entry::Redirect(page)),
        };
        let config = admin.load_config()?;

        Ok(Entry::Ready(Self {
            session,
            gate,
            admin,
            config,
        }))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// Renders a view by name, falling back to the LLM view.
    pub fn navigate(&self, name: &str) -> Result<AdminPanel> {
        self.route(AdminView::from_name(name))
    }

    pub fn route(&self, view: AdminView) -> Result<AdminPanel> {
        tracing::debug!(view = %view, "rendered admin view");
        Ok(match view {
            AdminView::Llm => AdminPanel::llm(self.config.llm.clone()),
            AdminView::Rag => AdminPanel::Rag(self.config.rag.clone()),
            AdminView::Flows => AdminPanel::Flows(self.config.flows.clone()),
            AdminView::Audit => AdminPanel::Audit(self.admin.load_audit()?.entries().to_vec()),
        })
    }

    pub fn audit(&self) -> Result<AuditLog> {
        self.admin.load_audit()
    }

    pub fn save_llm(&mut self, update: &LlmUpdate) -> Result<&LlmSettings> {
        let llm = update.apply_to(&self.config.llm);
        let detail = json!({
            "provider": llm.provider,
            "model": llm.model,
            "apiKey": llm.api_key_masked,
        });
        self.commit(AuditAction::UpdateLlm, detail, |config| config.llm = llm)?;
        Ok(&self.config.llm)
    }

    pub fn save_rag(&mut self, update: &RagUpdate) -> Result<&RagSettings> {
        let rag = update.apply_to(&self.config.rag);
        rag.validate()?;
        let detail = json!({ "topK": rag.top_k, "minScore": rag.min_score });
        self.commit(AuditAction::UpdateRag, detail, |config| config.rag = rag)?;
        Ok(&self.config.rag)
    }

    pub fn save_flows(&mut self, update: &FlowsUpdate) -> Result<&FlowSettings> {
        let flows = update.apply_to(&self.config.flows);
        flows.validate()?;
        let detail = json!({ "maxTurnsBeforeEscalate": flows.max_turns_before_escalate });
        self.commit(AuditAction::UpdateFlows, detail, |config| config.flows = flows)?;
        Ok(&self.config.flows)
    }

    pub fn logout(&self) -> Result<Page> {
        self.gate.logout()
    }

    fn commit(
        &mut self,
        action: AuditAction,
        detail: serde_json::Value,
        change: impl FnOnce(&mut AdminConfig),
    ) -> Result<()> {
        let mut next = self.config.clone();
        change(&mut next);
        let mut log = self.admin.load_audit()?;
        log.record(AuditEntry::new(&self.session.email, action, detail));

        self.admin.save_config(&next)?;
        if let Err(err) = self.admin.save_audit(&log) {
            // A config change without its audit entry must not stick.
            if let Err(restore) = self.admin.save_config(&self.config) {
                tracing::warn!(error = %restore, "failed to restore admin config after audit failure");
            }
            return Err(err);
        }
        self.config = next;
        tracing::info!(action = %action, actor = %self.session.email, "saved admin settings");
        Ok(())
    }
}

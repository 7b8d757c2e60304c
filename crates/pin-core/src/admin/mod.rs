//! Admin configuration domain module.
//!
//! # Module Structure
//!
//! - `config`: LLM / RAG / flow settings and the merge-with-defaults policy
//! - `mask`: API key display masking
//! - `audit`: Bounded, newest-first audit trail
//! - `repository`: Persistence contract

mod audit;
mod config;
mod mask;
mod repository;

pub use audit::{AUDIT_CAPACITY, AuditAction, AuditEntry, AuditLog};
pub use config::{
    AdminConfig, FlowSettings, LlmProvider, LlmSettings, MAX_TURNS_RANGE, MIN_SCORE_RANGE,
    RagSettings, TOP_K_RANGE, merge_json,
};
pub use mask::{KEY_NOT_SET, SHORT_KEY_MASK, mask_api_key};
pub use repository::AdminConfigRepository;

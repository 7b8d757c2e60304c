//! Admin panel.
//!
//! # Module Structure
//!
//! - `panel`: Admin view names and render output
//! - `update`: Form submissions with blank-keeps-current semantics
//! - `controller`: Load, validate, save and audit

mod controller;
mod panel;
mod update;

pub use controller::AdminController;
pub use panel::{AdminPanel, AdminView};
pub use update::{FlowsUpdate, LlmUpdate, RagUpdate};

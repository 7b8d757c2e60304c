//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: Session record and remembered login values
//! - `repository`: Persistence contract for both

mod model;
mod repository;

pub use model::{DEFAULT_COMPANY, DEFAULT_DEPARTMENT, DEFAULT_EMAIL, RememberedLogin, Session};
pub use repository::SessionRepository;

//! Infrastructure layer for Pin: storage backends, typed repositories,
//! filesystem paths and settings.

pub mod paths;
pub mod repository;
pub mod settings;
pub mod storage;

pub use crate::paths::PinPaths;
pub use crate::repository::{
    Repositories, StoreAdminConfigRepository, StoreConversationRepository, StoreSessionRepository,
};
pub use crate::settings::PinSettings;
pub use crate::storage::{JsonFileStore, MemoryStore};

//! Core business-rule layer for the user registry.
//! This crate is the single source of truth for registration invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod policy;
pub mod repo;
pub mod service;

pub use config::{ConfigError, RegistryConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::transfer::{
    dto_from_user, patch_from_user, user_from_dto, UserDto, UserPatch,
};
pub use model::user::{User, UserId, UserValidationError};
pub use policy::RegistrationPolicy;
pub use repo::user_repo::{RepoError, RepoResult, SqliteUserRepository, UserRepository};
pub use service::user_registry::{RegistryError, RegistryResult, UserRegistry};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

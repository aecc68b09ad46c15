//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate policy checks and repository calls into the registry API.
//! - Keep callers (CLI, transport bindings) decoupled from storage details.

pub mod user_registry;

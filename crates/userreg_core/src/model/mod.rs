//! Domain model for the user registry.
//!
//! # Responsibility
//! - Define the canonical persisted record shape used by core business logic.
//! - Define the external transfer shapes and the explicit field mappers.
//!
//! # Invariants
//! - Every persisted record is identified by a store-assigned `UserId`.
//! - Field validation lives on the record type and is re-verified by the
//!   repository on every write path.

pub mod transfer;
pub mod user;

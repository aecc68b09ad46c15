//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract the registry service depends on.
//! - Isolate SQLite query details from business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `User::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod user_repo;

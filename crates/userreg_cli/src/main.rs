//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `userreg_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("userreg_core version={}", userreg_core::core_version());
    println!(
        "userreg_core schema_version={}",
        userreg_core::db::migrations::latest_version()
    );
}

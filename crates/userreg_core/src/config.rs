//! Registry configuration.
//!
//! # Responsibility
//! - Hold the externally sourced settings the core reads at process start.
//!
//! # Invariants
//! - Configuration is constructed once and read-only afterwards; there is
//!   no hot-reload path.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable consulted by [`RegistryConfig::from_env`].
pub const MIN_REGISTRATION_AGE_ENV: &str = "USERREG_MIN_REGISTRATION_AGE";

const DEFAULT_MIN_REGISTRATION_AGE: u32 = 18;

/// Explicit configuration struct, built once at process start and passed
/// by reference into the registration policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Minimum whole years of age required to register.
    pub minimum_age: u32,
}

impl RegistryConfig {
    pub fn new(minimum_age: u32) -> Self {
        Self { minimum_age }
    }

    /// Reads configuration from the process environment.
    ///
    /// Missing variable falls back to the default minimum age; a present
    /// but unparseable value is an error rather than a silent default.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(MIN_REGISTRATION_AGE_ENV) {
            Ok(raw) => Ok(Self::new(parse_minimum_age(&raw)?)),
            Err(std::env::VarError::NotPresent) => {
                Ok(Self::new(DEFAULT_MIN_REGISTRATION_AGE))
            }
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidMinimumAge(
                "<non-unicode value>".to_string(),
            )),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_REGISTRATION_AGE)
    }
}

fn parse_minimum_age(raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidMinimumAge(raw.to_string()))
}

/// Configuration loading error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The minimum-age setting is not a non-negative integer.
    InvalidMinimumAge(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMinimumAge(raw) => write!(
                f,
                "invalid {MIN_REGISTRATION_AGE_ENV} value `{raw}`; expected a non-negative integer"
            ),
        }
    }
}

impl Error for ConfigError {}

//! User domain record.
//!
//! # Responsibility
//! - Define the canonical persisted record for registered users.
//! - Provide field-level validation re-verified on every write path.
//!
//! # Invariants
//! - `id` is assigned by the store on first insert and never changes.
//! - `email` matches the registry email pattern and is never blank.
//! - `birth_date` is strictly in the past relative to the validation date.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned identifier, monotonically increasing per insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = i64;

/// ASCII local part of letters/digits/`+_.-`, domain of letters/digits/`.-`.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").expect("valid email regex"));

/// Canonical persisted record for one registered user.
///
/// `address` and `phone_number` are optional contact fields; everything else
/// is required. `id` is `None` until the store assigns one on first insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identity, absent until first save.
    pub id: Option<UserId>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Calendar date, strictly in the past.
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl User {
    /// Validates field-level invariants against the given calendar date.
    ///
    /// The age-eligibility gate is a separate policy concern and is not
    /// checked here; this only enforces the record-shape invariants.
    pub fn validate(&self, today: NaiveDate) -> Result<(), UserValidationError> {
        if !EMAIL_RE.is_match(&self.email) {
            return Err(UserValidationError::InvalidEmail(self.email.clone()));
        }
        if self.first_name.trim().is_empty() {
            return Err(UserValidationError::BlankField("first_name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(UserValidationError::BlankField("last_name"));
        }
        if self.birth_date >= today {
            return Err(UserValidationError::BirthDateNotInPast(self.birth_date));
        }
        Ok(())
    }
}

/// Field-level validation error for the user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Email does not match the registry email pattern (or is empty).
    InvalidEmail(String),
    /// A required text field is empty or whitespace-only.
    BlankField(&'static str),
    /// Birth date is today or in the future.
    BirthDateNotInPast(NaiveDate),
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEmail(value) => write!(f, "invalid email format: `{value}`"),
            Self::BlankField(field) => write!(f, "field {field} is required"),
            Self::BirthDateNotInPast(date) => {
                write!(f, "birth date must be in the past, got {date}")
            }
        }
    }
}

impl Error for UserValidationError {}

#[cfg(test)]
mod tests {
    use super::{User, UserValidationError};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_user() -> User {
        User {
            id: None,
            email: "jane.doe+reg@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            birth_date: date(1990, 5, 20),
            address: None,
            phone_number: None,
        }
    }

    #[test]
    fn valid_record_passes() {
        assert!(valid_user().validate(date(2024, 6, 1)).is_ok());
    }

    #[test]
    fn email_pattern_is_enforced() {
        let today = date(2024, 6, 1);
        for bad in ["", "no-at-sign", "two@@example.com", "a b@example.com"] {
            let mut user = valid_user();
            user.email = bad.to_string();
            let err = user.validate(today).unwrap_err();
            assert!(matches!(err, UserValidationError::InvalidEmail(_)), "{bad}");
        }
    }

    #[test]
    fn blank_names_are_rejected() {
        let today = date(2024, 6, 1);

        let mut user = valid_user();
        user.first_name = "  ".to_string();
        assert_eq!(
            user.validate(today).unwrap_err(),
            UserValidationError::BlankField("first_name")
        );

        let mut user = valid_user();
        user.last_name = String::new();
        assert_eq!(
            user.validate(today).unwrap_err(),
            UserValidationError::BlankField("last_name")
        );
    }

    #[test]
    fn birth_date_must_be_strictly_past() {
        let today = date(2024, 6, 1);

        let mut user = valid_user();
        user.birth_date = today;
        assert!(matches!(
            user.validate(today).unwrap_err(),
            UserValidationError::BirthDateNotInPast(_)
        ));

        user.birth_date = date(2024, 5, 31);
        assert!(user.validate(today).is_ok());
    }
}

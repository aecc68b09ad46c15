//! Registration eligibility policy.
//!
//! # Responsibility
//! - Hold the configured minimum registration age.
//! - Decide age eligibility for create and full-replace operations.
//!
//! # Invariants
//! - The boundary is exclusive: a birth date exactly `minimum_age` years
//!   before today is NOT eligible.
//! - The policy is read-only for the lifetime of the process.

use crate::config::RegistryConfig;
use chrono::{Months, NaiveDate};

/// Age-based registration gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationPolicy {
    minimum_age: u32,
}

impl RegistrationPolicy {
    pub fn new(config: &RegistryConfig) -> Self {
        Self {
            minimum_age: config.minimum_age,
        }
    }

    /// Configured minimum whole years of age.
    pub fn minimum_age(&self) -> u32 {
        self.minimum_age
    }

    /// Returns whether a person born on `birth_date` may register as of
    /// `today`.
    ///
    /// Computed as `birth_date < today - minimum_age years`, matching
    /// calendar-year subtraction (Feb 29 clamps to Feb 28 in non-leap
    /// years). Strict comparison: being exactly `minimum_age` years old
    /// today is not enough.
    pub fn is_eligible(&self, birth_date: NaiveDate, today: NaiveDate) -> bool {
        match today.checked_sub_months(Months::new(self.minimum_age * 12)) {
            Some(cutoff) => birth_date < cutoff,
            // Cutoff underflows the calendar range; nobody qualifies.
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RegistrationPolicy;
    use crate::config::RegistryConfig;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy(minimum_age: u32) -> RegistrationPolicy {
        RegistrationPolicy::new(&RegistryConfig::new(minimum_age))
    }

    #[test]
    fn boundary_is_exclusive() {
        let policy = policy(18);
        let today = date(2024, 6, 1);

        // Exactly 18 years old today: not eligible.
        assert!(!policy.is_eligible(date(2006, 6, 1), today));
        // 18 years and one day: eligible.
        assert!(policy.is_eligible(date(2006, 5, 31), today));
        // Younger: not eligible.
        assert!(!policy.is_eligible(date(2010, 1, 1), today));
    }

    #[test]
    fn minimum_age_zero_still_excludes_today() {
        let policy = policy(0);
        let today = date(2024, 6, 1);

        assert!(policy.is_eligible(date(2024, 5, 31), today));
        assert!(!policy.is_eligible(today, today));
    }

    #[test]
    fn leap_day_cutoff_clamps_to_feb_28() {
        let policy = policy(1);
        // 2023 is not a leap year: cutoff for 2024-02-29 clamps to 2023-02-28.
        let today = date(2024, 2, 29);

        assert!(policy.is_eligible(date(2023, 2, 27), today));
        assert!(!policy.is_eligible(date(2023, 2, 28), today));
    }

    #[test]
    fn minimum_age_is_exposed() {
        assert_eq!(policy(21).minimum_age(), 21);
    }
}

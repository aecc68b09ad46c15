//! User registry use-case service.
//!
//! # Responsibility
//! - Own every business-rule decision: registration eligibility, which
//!   fields each update operation may change, error classification.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - The eligibility gate runs before any store access on create and full
//!   replace; a violation leaves the store untouched.
//! - Partial update never touches names or birth date and performs NO age
//!   re-check: age is gated at registration and full replace only, and a
//!   later policy change is never re-enforced against existing records.
//! - Operations are stateless; every call re-reads current store state
//!   before mutating it.

use crate::model::transfer::{dto_from_user, patch_from_user, user_from_dto, UserDto, UserPatch};
use crate::model::user::UserId;
use crate::policy::RegistrationPolicy;
use crate::repo::user_repo::{RepoError, UserRepository};
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Registry operation error, discriminated for caller pattern-matching.
///
/// Transport bindings map `Validation` to a bad-request response and
/// `NotFound` to a missing-resource response; `Infrastructure` carries
/// store/mapper failures unchanged.
#[derive(Debug)]
pub enum RegistryError {
    /// A precondition on input values failed. Carries the human-readable
    /// message with the violated threshold interpolated.
    Validation(String),
    /// The referenced id does not exist in the store.
    NotFound(UserId),
    /// The store failed for reasons opaque to the core.
    Infrastructure(RepoError),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "{message}"),
            Self::NotFound(id) => write!(f, "user not found with id: {id}"),
            Self::Infrastructure(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Infrastructure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for RegistryError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            RepoError::Validation(err) => Self::Validation(err.to_string()),
            other => Self::Infrastructure(other),
        }
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// The registry core: five operations over an abstract store, gated by the
/// registration policy.
pub struct UserRegistry<R: UserRepository> {
    repo: R,
    policy: RegistrationPolicy,
}

impl<R: UserRepository> UserRegistry<R> {
    /// Creates a registry over the provided store and policy.
    pub fn new(repo: R, policy: RegistrationPolicy) -> Self {
        Self { repo, policy }
    }

    /// Registers a new user.
    ///
    /// # Contract
    /// - Fails with `Validation` before any write when the birth date does
    ///   not satisfy the minimum-age policy.
    /// - On success the returned dto mirrors the input plus the assigned id.
    pub fn create_user(&self, dto: &UserDto) -> RegistryResult<UserDto> {
        self.check_eligibility(dto.birth_date)?;

        let mut user = user_from_dto(dto);
        let id = self.repo.insert_user(&user)?;
        user.id = Some(id);
        Ok(dto_from_user(&user))
    }

    /// Replaces every mutable field of an existing record.
    ///
    /// # Contract
    /// - The eligibility gate is evaluated BEFORE the lookup; an ineligible
    ///   input fails `Validation` without touching the store, even for a
    ///   missing id.
    /// - Full replace semantics: optional fields absent in the input
    ///   overwrite existing stored values.
    pub fn update_all_fields(&self, id: UserId, dto: &UserDto) -> RegistryResult<UserDto> {
        self.check_eligibility(dto.birth_date)?;

        let mut user = self
            .repo
            .get_user(id)?
            .ok_or(RegistryError::NotFound(id))?;
        user.email = dto.email.clone();
        user.first_name = dto.first_name.clone();
        user.last_name = dto.last_name.clone();
        user.birth_date = dto.birth_date;
        user.address = dto.address.clone();
        user.phone_number = dto.phone_number.clone();

        self.repo.update_user(id, &user)?;
        Ok(dto_from_user(&user))
    }

    /// Applies a partial update to an existing record.
    ///
    /// # Contract
    /// - `email` is unconditionally overwritten.
    /// - `address` and `phone_number` are overwritten only when present in
    ///   the patch; absent fields preserve the stored values.
    /// - Names and birth date are never touched; no age re-check happens.
    pub fn update_user(&self, id: UserId, patch: &UserPatch) -> RegistryResult<UserPatch> {
        let mut user = self
            .repo
            .get_user(id)?
            .ok_or(RegistryError::NotFound(id))?;
        user.email = patch.email.clone();
        if let Some(address) = &patch.address {
            user.address = Some(address.clone());
        }
        if let Some(phone_number) = &patch.phone_number {
            user.phone_number = Some(phone_number.clone());
        }

        self.repo.update_user(id, &user)?;
        Ok(patch_from_user(&user))
    }

    /// Removes a record from the store.
    ///
    /// Repeated calls with the same id fail with `NotFound` after the first
    /// success; that is the expected terminal behavior.
    pub fn delete_user(&self, id: UserId) -> RegistryResult<()> {
        self.repo.delete_user(id)?;
        info!("event=user_delete module=service status=ok user_id={id}");
        Ok(())
    }

    /// Returns every record whose birth date falls within `[from, to]`
    /// inclusive, in store order.
    ///
    /// `from <= to` is not validated here; an inverted or empty range
    /// yields an empty sequence.
    pub fn search_users_by_birth_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RegistryResult<Vec<UserDto>> {
        let users = self.repo.find_by_birth_date_between(from, to)?;
        Ok(users.iter().map(dto_from_user).collect())
    }

    fn check_eligibility(&self, birth_date: NaiveDate) -> RegistryResult<()> {
        let today = chrono::Local::now().date_naive();
        if !self.policy.is_eligible(birth_date, today) {
            let minimum_age = self.policy.minimum_age();
            return Err(RegistryError::Validation(format!(
                "User must be at least {minimum_age} years old to register."
            )));
        }
        Ok(())
    }
}

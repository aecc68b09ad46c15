//! Transfer shapes and explicit record mapping.
//!
//! # Responsibility
//! - Define the full and partial external representations of a user record.
//! - Provide hand-written, auditable conversions between record and
//!   transfer shapes (no reflection-style mapping).
//!
//! # Invariants
//! - `UserDto` carries every record field; it is the shape for create and
//!   full replace.
//! - `UserPatch` carries only `id`, `email`, `address`, `phone_number`;
//!   names and birth date are unrepresentable in a partial update.
//! - Wire field names are camelCase to interoperate with the reference
//!   HTTP binding.

use crate::model::user::{User, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Full transfer shape, mirroring every record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// Absent on create input; set on every output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Partial transfer shape for the restricted update operation.
///
/// `email` is required and always applied; `address` and `phone_number`
/// are applied only when present. There is deliberately no way to express
/// a name or birth-date change here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Builds a fresh (unsaved) record from a full transfer shape.
///
/// Any `id` present on the input is ignored; identity is store-assigned.
pub fn user_from_dto(dto: &UserDto) -> User {
    User {
        id: None,
        email: dto.email.clone(),
        first_name: dto.first_name.clone(),
        last_name: dto.last_name.clone(),
        birth_date: dto.birth_date,
        address: dto.address.clone(),
        phone_number: dto.phone_number.clone(),
    }
}

/// Projects a record into the full transfer shape.
pub fn dto_from_user(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        email: user.email.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        birth_date: user.birth_date,
        address: user.address.clone(),
        phone_number: user.phone_number.clone(),
    }
}

/// Projects a record into the partial transfer shape.
pub fn patch_from_user(user: &User) -> UserPatch {
    UserPatch {
        id: user.id,
        email: user.email.clone(),
        address: user.address.clone(),
        phone_number: user.phone_number.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{dto_from_user, patch_from_user, user_from_dto, UserDto};
    use crate::model::user::User;
    use chrono::NaiveDate;

    fn sample_record() -> User {
        User {
            id: Some(7),
            email: "a@b.com".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            address: Some("old street".to_string()),
            phone_number: None,
        }
    }

    #[test]
    fn dto_projection_carries_every_field() {
        let user = sample_record();
        let dto = dto_from_user(&user);
        assert_eq!(dto.id, Some(7));
        assert_eq!(dto.email, user.email);
        assert_eq!(dto.first_name, user.first_name);
        assert_eq!(dto.last_name, user.last_name);
        assert_eq!(dto.birth_date, user.birth_date);
        assert_eq!(dto.address, user.address);
        assert_eq!(dto.phone_number, user.phone_number);
    }

    #[test]
    fn record_from_dto_ignores_input_id() {
        let dto = dto_from_user(&sample_record());
        let user = user_from_dto(&dto);
        assert_eq!(user.id, None);
        assert_eq!(user.email, dto.email);
        assert_eq!(user.birth_date, dto.birth_date);
    }

    #[test]
    fn patch_projection_is_the_restricted_subset() {
        let user = sample_record();
        let patch = patch_from_user(&user);
        assert_eq!(patch.id, Some(7));
        assert_eq!(patch.email, "a@b.com");
        assert_eq!(patch.address.as_deref(), Some("old street"));
        assert_eq!(patch.phone_number, None);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(dto_from_user(&sample_record())).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("birthDate").is_some());
        assert_eq!(json["birthDate"], serde_json::json!("2000-01-01"));
    }

    #[test]
    fn absent_optional_fields_deserialize_as_none() {
        let patch: super::UserPatch =
            serde_json::from_str(r#"{"email":"x@y.com","phoneNumber":"999"}"#).unwrap();
        assert_eq!(patch.email, "x@y.com");
        assert_eq!(patch.address, None);
        assert_eq!(patch.phone_number.as_deref(), Some("999"));
    }
}

//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide save/find/delete/range-query APIs over the `users` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `User::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Identity is store-assigned, monotonically increasing, never reused
//!   within one database file.

use crate::db::DbError;
use crate::model::user::{User, UserId, UserValidationError};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const USER_SELECT_SQL: &str = "SELECT
    id,
    email,
    first_name,
    last_name,
    birth_date,
    address,
    phone_number
FROM users";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for user persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(UserValidationError),
    Db(DbError),
    NotFound(UserId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "user not found with id: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted user data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<UserValidationError> for RepoError {
    fn from(value: UserValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for user persistence.
///
/// The registry service treats implementations as the opaque store; all
/// ordering and isolation guarantees are the store's.
pub trait UserRepository {
    /// Persists a new record and returns the store-assigned id.
    fn insert_user(&self, user: &User) -> RepoResult<UserId>;
    /// Overwrites every mutable column of an existing record.
    fn update_user(&self, id: UserId, user: &User) -> RepoResult<()>;
    /// Fetches one record by id.
    fn get_user(&self, id: UserId) -> RepoResult<Option<User>>;
    /// Hard-deletes one record by id.
    fn delete_user(&self, id: UserId) -> RepoResult<()>;
    /// Returns records with `from <= birth_date <= to`, in id order.
    fn find_by_birth_date_between(&self, from: NaiveDate, to: NaiveDate)
        -> RepoResult<Vec<User>>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn validation_date(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn insert_user(&self, user: &User) -> RepoResult<UserId> {
        user.validate(self.validation_date())?;

        self.conn.execute(
            "INSERT INTO users (
                email,
                first_name,
                last_name,
                birth_date,
                address,
                phone_number
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                user.email.as_str(),
                user.first_name.as_str(),
                user.last_name.as_str(),
                user.birth_date,
                user.address.as_deref(),
                user.phone_number.as_deref(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_user(&self, id: UserId, user: &User) -> RepoResult<()> {
        user.validate(self.validation_date())?;

        let changed = self.conn.execute(
            "UPDATE users
             SET
                email = ?1,
                first_name = ?2,
                last_name = ?3,
                birth_date = ?4,
                address = ?5,
                phone_number = ?6,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?7;",
            params![
                user.email.as_str(),
                user.first_name.as_str(),
                user.last_name.as_str(),
                user.birth_date,
                user.address.as_deref(),
                user.phone_number.as_deref(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }

        Ok(None)
    }

    fn delete_user(&self, id: UserId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM users WHERE id = ?1;", params![id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn find_by_birth_date_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepoResult<Vec<User>> {
        let mut stmt = self.conn.prepare(&format!(
            "{USER_SELECT_SQL}
             WHERE birth_date BETWEEN ?1 AND ?2
             ORDER BY id ASC;"
        ))?;

        let mut rows = stmt.query(params![from, to])?;
        let mut users = Vec::new();

        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }

        Ok(users)
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let id: UserId = row.get("id")?;
    if id <= 0 {
        return Err(RepoError::InvalidData(format!(
            "invalid id value `{id}` in users.id"
        )));
    }

    Ok(User {
        id: Some(id),
        email: row.get("email")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        birth_date: row.get("birth_date")?,
        address: row.get("address")?,
        phone_number: row.get("phone_number")?,
    })
}

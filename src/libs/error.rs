//! Typed failures for input validation, persistence and configuration.
//!
//! Validation failures are produced before any database interaction and never
//! reach the store. Store failures classify the underlying SQLite error code so
//! callers can tell a duplicate record from a lost connection without string
//! matching.

use rusqlite::ErrorCode;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Rejected form input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),

    #[error("'{0}' is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Employee column whose uniqueness was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    EmployeeId,
    Email,
}

impl DuplicateField {
    pub fn column(&self) -> &'static str {
        match self {
            DuplicateField::EmployeeId => "employee_id",
            DuplicateField::Email => "email",
        }
    }

    fn from_column(column: &str) -> Option<Self> {
        match column {
            "employee_id" => Some(DuplicateField::EmployeeId),
            "email" => Some(DuplicateField::Email),
            _ => None,
        }
    }
}

impl Display for DuplicateField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Employee with {field} '{value}' already exists")]
    Duplicate { field: DuplicateField, value: String },

    #[error("Employee with id {0} not found")]
    NotFound(i64),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database unavailable: {0}")]
    Unavailable(#[source] rusqlite::Error),

    #[error("Database query failed: {0}")]
    Query(#[source] rusqlite::Error),
}

impl StoreError {
    /// Returns the employee column named by a SQLite UNIQUE/PRIMARY KEY
    /// failure, e.g. `UNIQUE constraint failed: employees.email`.
    pub(crate) fn unique_violation(err: &rusqlite::Error) -> Option<DuplicateField> {
        let rusqlite::Error::SqliteFailure(failure, Some(message)) = err else {
            return None;
        };
        let unique = failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
            || failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY;
        if !unique {
            return None;
        }

        let columns = message.split_once("failed: ")?.1;
        columns
            .split(", ")
            .filter_map(|qualified| qualified.rsplit('.').next())
            .find_map(DuplicateField::from_column)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        let code = match &err {
            rusqlite::Error::SqliteFailure(failure, _) => failure.code,
            _ => return StoreError::Query(err),
        };

        match code {
            ErrorCode::ConstraintViolation => {
                let message = match &err {
                    rusqlite::Error::SqliteFailure(_, Some(message)) => message.clone(),
                    _ => err.to_string(),
                };
                StoreError::Constraint(message)
            }
            ErrorCode::CannotOpen
            | ErrorCode::DatabaseBusy
            | ErrorCode::DatabaseLocked
            | ErrorCode::NotADatabase
            | ErrorCode::SystemIoFailure
            | ErrorCode::PermissionDenied
            | ErrorCode::ReadOnly
            | ErrorCode::DiskFull => StoreError::Unavailable(err),
            _ => StoreError::Query(err),
        }
    }
}

/// Malformed environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unsupported database URL scheme '{0}', only sqlite is available")]
    UnsupportedScheme(String),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

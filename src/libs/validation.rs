//! Input validation for employee and attendance forms.
//!
//! Turns raw, untrusted strings into [`NewEmployee`] and [`NewAttendance`]
//! values. Nothing here touches the database; uniqueness is checked by the
//! store when the record is inserted.
//!
//! ## Normalization
//!
//! - Surrounding whitespace is trimmed from every field.
//! - A field that is empty after trimming counts as missing.
//! - The domain part of an email is lowercased, the local part is kept as typed.
//!
//! ## Usage
//!
//! ```rust
//! use hrms::libs::validation::{validate_attendance, validate_employee};
//!
//! let employee = validate_employee("E001", "Ada Lovelace", "ada@Example.com", "Engineering").unwrap();
//! assert_eq!(employee.email(), "ada@example.com");
//!
//! let attendance = validate_attendance("E001", "2024-01-15", "present").unwrap();
//! assert_eq!(attendance.date().to_string(), "2024-01-15");
//! ```

use super::attendance::NewAttendance;
use super::employee::NewEmployee;
use super::error::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted textual date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$"#)
        .expect("valid email regex")
});

/// Validates the four employee form fields.
pub fn validate_employee(employee_id: &str, full_name: &str, email: &str, department: &str) -> Result<NewEmployee, ValidationError> {
    let employee_id = required("employee_id", employee_id)?;
    let full_name = required("full_name", full_name)?;
    let email = normalize_email(required("email", email)?)?;
    let department = required("department", department)?;

    Ok(NewEmployee::new(employee_id, full_name, email, department))
}

/// Validates the three attendance form fields.
pub fn validate_attendance(employee_id: &str, date: &str, status: &str) -> Result<NewAttendance, ValidationError> {
    let employee_id = required("employee_id", employee_id)?;
    let date = parse_date(&required("date", date)?)?;
    let status = required("status", status)?;

    Ok(NewAttendance::new(employee_id, date, status))
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ValidationError::InvalidDate(value.trim().to_string()))
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value.to_string())
}

fn normalize_email(email: String) -> Result<String, ValidationError> {
    if email.len() > MAX_EMAIL_LEN || !EMAIL_RE.is_match(&email) {
        return Err(ValidationError::InvalidEmail(email));
    }

    // The regex guarantees exactly one '@' since it is not in the local-part class.
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail(email));
    };

    if local.len() > MAX_LOCAL_PART_LEN || local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(ValidationError::InvalidEmail(email));
    }

    Ok(format!("{}@{}", local, domain.to_ascii_lowercase()))
}

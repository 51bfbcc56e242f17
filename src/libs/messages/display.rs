//! Display implementation for `hrms` messages.
//!
//! Keeps all user-facing wording in one place so commands only pick a
//! [`Message`] variant and its parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === EMPLOYEE MESSAGES ===
            Message::EmployeeCreated(employee_id) => format!("Employee '{}' added.", employee_id),
            Message::EmployeeDeleted(id) => format!("Employee #{} deleted.", id),
            Message::EmployeeNotFound(id) => format!("Employee #{} not found, nothing deleted.", id),
            Message::EmployeeAlreadyExists(field, value) => {
                format!("An employee with {} '{}' already exists.", field, value)
            }
            Message::NoEmployeesFound => "No employees found.".to_string(),
            Message::EmployeeListHeader => "Employees:".to_string(),
            Message::EmployeeDetailsHeader(id) => format!("Employee #{}:", id),
            Message::ConfirmDeleteEmployee(name, id) => format!("Delete employee '{}' (#{})?", name, id),
            Message::EmployeeDeleteCancelled => "Deletion cancelled.".to_string(),
            Message::OrphanedAttendance(count) => {
                format!("{} attendance record(s) still reference this employee and were kept.", count)
            }
            Message::PromptEmployeeId => "Employee ID".to_string(),
            Message::PromptFullName => "Full name".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptDepartment => "Department".to_string(),

            // === ATTENDANCE MESSAGES ===
            Message::AttendanceMarked(employee_id, date, status) => {
                format!("Marked '{}' as {} on {}.", employee_id, status, date)
            }
            Message::NoAttendanceFound => "No attendance records found.".to_string(),
            Message::AttendanceListHeader => "Attendance:".to_string(),
            Message::SelectEmployee => "Select employee".to_string(),
            Message::SelectAttendanceStatus => "Status".to_string(),
            Message::UnknownEmployeeReference(employee_id) => {
                format!("No employee with ID '{}' exists, the record is stored anyway.", employee_id)
            }
            Message::AttendanceRejected(reason) => format!("Attendance was not recorded: {}", reason),

            // === VALIDATION MESSAGES ===
            Message::ValidationFailed(reason) => format!("Invalid input: {}", reason),

            // === DATABASE MESSAGES ===
            Message::DatabaseInitialized(target) => format!("Database ready at {}.", target),
            Message::UsingDatabase(target) => format!("Using database {}", target),
            Message::DatabaseUnavailable(reason) => format!("Database unavailable: {}", reason),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date.".to_string(),
            Message::DatabaseNeedsUpdate => "Database has pending migrations.".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NoMigrationsApplied => "No migrations applied yet.".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportingAllData => "Exporting employees and attendance...".to_string(),

            // === HEALTH MESSAGES ===
            Message::HealthCheckFailed => "Health check failed.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigInvalid(reason) => format!("Invalid configuration: {}", reason),
        };

        write!(f, "{}", s)
    }
}

//! Database layer for the hrms application.
//!
//! SQLite persistence for the employee directory and the attendance log. A
//! command opens one [`db::Db`] handle, hands references to the store
//! components, and drops the handle when it is done.
//!
//! ## Usage
//!
//! ```rust
//! use hrms::db::{attendance::AttendanceLog, db::Db};
//! use hrms::libs::config::DatabaseConfig;
//! use hrms::libs::validation::validate_attendance;
//!
//! let db = Db::open(&DatabaseConfig::memory())?;
//! let log = AttendanceLog::new(&db);
//! log.add(&validate_attendance("E001", "2024-01-15", "present")?)?;
//! assert_eq!(log.list()?.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Connection handle: opening, pragmas and migrations.
pub mod db;

/// Versioned schema changes.
pub mod migrations;

/// Employee directory: list, add with duplicate detection, delete.
pub mod employees;

/// Append-only attendance log.
pub mod attendance;

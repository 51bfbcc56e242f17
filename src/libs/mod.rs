//! Core library modules for the hrms application.
//!
//! ## Features
//!
//! - **Records**: typed employee and attendance values
//! - **Validation**: form input checks ahead of persistence
//! - **Errors**: typed validation, store and configuration failures
//! - **Infrastructure**: configuration, logging, build metadata, messaging
//! - **Presentation**: console tables and file export
//!
//! ## Usage
//!
//! ```rust
//! use hrms::db::{db::Db, employees::Employees};
//! use hrms::libs::config::DatabaseConfig;
//! use hrms::libs::validation::validate_employee;
//!
//! let db = Db::open(&DatabaseConfig::memory())?;
//! let employee = validate_employee("E001", "Ada Lovelace", "ada@example.com", "Engineering")?;
//! Employees::new(&db).add(&employee)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod app;
pub mod attendance;
pub mod config;
pub mod employee;
pub mod error;
pub mod export;
pub mod logging;
pub mod messages;
pub mod validation;
pub mod view;

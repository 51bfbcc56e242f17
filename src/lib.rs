//! # HRMS Lite
//!
//! Employee records and daily attendance kept in a local SQLite database.
//!
//! ## Features
//!
//! - **Employee Directory**: add, list, show and delete employees with
//!   uniqueness enforced on employee ID and email
//! - **Attendance Log**: append-only daily attendance entries
//! - **Validation**: form input is checked and normalized before it reaches the store
//! - **Data Export**: CSV and JSON export of both tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hrms::commands::Cli;
//! use hrms::libs::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     Cli::menu(&config)
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

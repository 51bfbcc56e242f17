//! Database schema migration management and versioning system.
//!
//! Schema changes are registered as numbered migrations. On every open the
//! pending ones are applied inside a single transaction and recorded in the
//! `migrations` table, so a partially applied upgrade never becomes visible.
//!
//! ## Usage
//!
//! ```rust
//! use hrms::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert!(get_db_version(&conn)? > 0);
//! # Ok::<(), hrms::libs::error::StoreError>(())
//! ```

use crate::libs::error::StoreResult;
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use tracing::{debug, error, info};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change.
#[derive(Debug, Clone)]
struct Migration {
    /// Unique version number for ordering and tracking
    version: u32,
    /// Human-readable name describing the migration's purpose
    name: &'static str,
    /// Applies the schema change within the shared transaction
    up: fn(&Transaction) -> rusqlite::Result<()>,
}

/// Registry of all migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers all database migrations in chronological order.
    fn register_migrations(&mut self) {
        // Version 1: employee directory and attendance log
        self.add_migration(1, "create_employees_and_attendance", |tx| {
            // AUTOINCREMENT keeps ids of deleted employees from being handed out again
            tx.execute(
                "CREATE TABLE IF NOT EXISTS employees (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    employee_id TEXT NOT NULL UNIQUE,
                    full_name TEXT NOT NULL,
                    email TEXT NOT NULL UNIQUE,
                    department TEXT NOT NULL
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS attendance (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    employee_id TEXT NOT NULL REFERENCES employees(employee_id),
                    date DATE NOT NULL,
                    status TEXT NOT NULL
                )",
                [],
            )?;
            Ok(())
        });

        // Version 2: lookups of attendance by employee and by day
        self.add_migration(2, "add_attendance_indices", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_attendance_employee_id ON attendance(employee_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> rusqlite::Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the current schema version.
    ///
    /// All pending migrations share one transaction: either the database ends
    /// up at the latest version or it stays where it was.
    pub fn run_migrations(&self, conn: &mut Connection) -> StoreResult<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            debug!(version = current_version, "database is up to date");
            return Ok(());
        }

        info!(count = pending.len(), "applying pending migrations");
        let tx = conn.transaction()?;

        for migration in pending {
            debug!(version = migration.version, name = migration.name, "running migration");

            if let Err(err) = (migration.up)(&tx) {
                error!(version = migration.version, error = %err, "migration failed");
                return Err(err.into());
            }

            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }

        tx.commit()?;
        info!(version = self.latest_version(), "migrations completed");

        Ok(())
    }

    /// Highest applied version, or 0 for a fresh database.
    fn get_current_version(&self, conn: &Connection) -> StoreResult<u32> {
        let version: Option<u32> = conn
            .query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))
            .optional()?
            .flatten();

        Ok(version.unwrap_or(0))
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> StoreResult<bool> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;

        Ok(count > 0)
    }

    /// Returns `(version, name, applied_at)` for each applied migration, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> StoreResult<Vec<(u32, String, String)>> {
        if !has_migrations_table(conn)? {
            return Ok(Vec::new());
        }

        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;
        let history = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(history)
    }
}

/// Applies all pending migrations to `conn`.
pub fn init_with_migrations(conn: &mut Connection) -> StoreResult<()> {
    MigrationManager::new().run_migrations(conn)
}

/// Current schema version of `conn`.
///
/// Returns 0 when the migrations table does not exist yet.
pub fn get_db_version(conn: &Connection) -> StoreResult<u32> {
    if !has_migrations_table(conn)? {
        return Ok(0);
    }
    MigrationManager::new().get_current_version(conn)
}

/// Whether `conn` is behind the latest registered migration.
pub fn needs_migration(conn: &Connection) -> StoreResult<bool> {
    let manager = MigrationManager::new();
    Ok(get_db_version(conn)? < manager.latest_version())
}

fn has_migrations_table(conn: &Connection) -> StoreResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'migrations'",
        [],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

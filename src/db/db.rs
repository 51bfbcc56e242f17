use super::migrations::init_with_migrations;
use crate::libs::config::{DatabaseConfig, DatabaseTarget};
use crate::libs::error::{StoreError, StoreResult};
use rusqlite::Connection;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Scoped store handle.
///
/// Owns one SQLite connection for the lifetime of a single command. The
/// connection is closed when the handle is dropped, whichever way the command
/// exits. Store components borrow it: `Employees::new(&db)`.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured database and applies pending migrations.
    pub fn open(config: &DatabaseConfig) -> StoreResult<Db> {
        let started_at = Instant::now();
        let mut conn = Self::connect(config)?;

        if let Err(err) = init_with_migrations(&mut conn) {
            error!(database = %config.target, error = %err, "database bootstrap failed");
            return Err(err);
        }

        info!(
            database = %config.target,
            foreign_keys = config.enforce_foreign_keys,
            duration_ms = started_at.elapsed().as_millis() as u64,
            "database opened"
        );
        Ok(Db { conn })
    }

    /// Opens a connection without touching the schema.
    pub fn open_without_migrations(config: &DatabaseConfig) -> StoreResult<Connection> {
        Self::connect(config)
    }

    /// Round-trips a trivial query to prove the connection is usable.
    pub fn ping(&self) -> StoreResult<()> {
        let one: i64 = self.conn.query_row("SELECT 1", [], |row| row.get(0))?;
        debug!(result = one, "database ping");
        Ok(())
    }

    fn connect(config: &DatabaseConfig) -> StoreResult<Connection> {
        let conn = match &config.target {
            DatabaseTarget::File(path) => Connection::open(path),
            DatabaseTarget::Memory => Connection::open_in_memory(),
        }
        .map_err(|err| {
            error!(database = %config.target, error = %err, "database open failed");
            StoreError::Unavailable(err)
        })?;

        conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))?;
        conn.pragma_update(None, "foreign_keys", config.enforce_foreign_keys)?;

        Ok(conn)
    }
}

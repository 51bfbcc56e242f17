use crate::{
    db::db::Db,
    libs::{
        app::{APP_VERSION, SERVICE_NAME},
        config::Config,
        messages::Message,
    },
    msg_bail_anyhow, msg_error,
};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

impl HealthStatus {
    /// Opens the database and runs `SELECT 1` against it.
    pub fn check(config: &Config) -> Self {
        let database = match Db::open(&config.database).and_then(|db| db.ping()) {
            Ok(()) => "ok",
            Err(err) => {
                msg_error!(Message::DatabaseUnavailable(err.to_string()));
                "unavailable"
            }
        };

        Self {
            status: if database == "ok" { "ok" } else { "degraded" },
            service: SERVICE_NAME,
            version: APP_VERSION,
            database,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

pub fn cmd(config: &Config) -> Result<()> {
    let health = HealthStatus::check(config);
    println!("{}", serde_json::to_string(&health)?);

    if !health.is_ok() {
        msg_bail_anyhow!(Message::HealthCheckFailed);
    }
    Ok(())
}

use crate::{
    db::{db::Db, migrations::get_db_version},
    libs::{config::Config, messages::Message},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;

pub fn cmd(config: &Config) -> Result<()> {
    let db = match Db::open(&config.database) {
        Ok(db) => db,
        Err(err) if err.is_unavailable() => {
            msg_bail_anyhow!(Message::DatabaseUnavailable(format!("{} ({})", config.database.target, err)))
        }
        Err(err) => return Err(err.into()),
    };

    msg_success!(Message::DatabaseInitialized(config.database.target.to_string()));
    msg_info!(Message::DatabaseVersion(get_db_version(&db.conn)?));
    Ok(())
}

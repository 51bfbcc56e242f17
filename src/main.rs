use hrms::commands::Cli;
use hrms::libs::{config::Config, logging::init_tracing, messages::Message};
use hrms::{msg_debug, msg_error_anyhow};

fn main() -> anyhow::Result<()> {
    let config = Config::load().map_err(|err| msg_error_anyhow!(Message::ConfigInvalid(err.to_string())))?;
    init_tracing(&config.log_level);
    msg_debug!(Message::UsingDatabase(config.database.target.to_string()));

    Cli::menu(&config)
}

use crate::{
    db::db::Db,
    libs::{
        config::Config,
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Records to export
    #[arg(value_enum, default_value = "all")]
    data: ExportData,
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output file, generated from the data type and current time when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(config: &Config, args: ExportArgs) -> Result<()> {
    let db = Db::open(&config.database)?;
    let exporter = Exporter::new(args.format, args.output);

    for path in exporter.export(&db, args.data)? {
        msg_success!(Message::ExportCompleted(path.display().to_string()));
    }

    Ok(())
}

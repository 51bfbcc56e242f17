pub mod attendance;
pub mod employee;
pub mod export;
pub mod health;
pub mod init;
pub mod migrations;

use crate::libs::{config::Config, messages::Message};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create the database and apply migrations")]
    Init,
    #[command(about = "Manage employees")]
    Employee(employee::EmployeeArgs),
    #[command(about = "Mark and list attendance")]
    Attendance(attendance::AttendanceArgs),
    #[command(about = "Export records to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Check that the database is reachable")]
    Health,
    #[command(about = "Inspect schema migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(name = "hrms", author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu(config: &Config) -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(config),
            Commands::Employee(args) => employee::cmd(config, args),
            Commands::Attendance(args) => attendance::cmd(config, args),
            Commands::Export(args) => export::cmd(config, args),
            Commands::Health => health::cmd(config),
            Commands::Migrations(args) => migrations::cmd(config, args),
        }
    }
}

/// Returns `value` when given on the command line, otherwise asks for it.
fn value_or_prompt(value: Option<String>, prompt: Message) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .interact_text()?),
    }
}

use super::value_or_prompt;
use crate::{
    db::{attendance::AttendanceLog, db::Db, employees::Employees},
    libs::{
        attendance::ATTENDANCE_STATUSES,
        config::Config,
        error::StoreError,
        messages::Message,
        validation::{validate_attendance, DATE_FORMAT},
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};
use std::collections::HashMap;

#[derive(Debug, Args)]
pub struct AttendanceArgs {
    #[command(subcommand)]
    command: AttendanceCommand,
}

#[derive(Debug, Subcommand)]
enum AttendanceCommand {
    /// List attendance records
    List {
        /// Only records of this employee
        #[arg(long)]
        employee_id: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Mark attendance for an employee
    Mark {
        #[arg(long)]
        employee_id: Option<String>,
        /// Date as YYYY-MM-DD, today when omitted
        #[arg(long)]
        date: Option<String>,
        /// Free-form status such as present or absent
        #[arg(long)]
        status: Option<String>,
    },
}

pub fn cmd(config: &Config, args: AttendanceArgs) -> Result<()> {
    let db = Db::open(&config.database)?;

    match args.command {
        AttendanceCommand::List { employee_id, json } => handle_list(&db, employee_id, json),
        AttendanceCommand::Mark {
            employee_id,
            date,
            status,
        } => handle_mark(&db, employee_id, date, status),
    }
}

fn handle_list(db: &Db, employee_id: Option<String>, json: bool) -> Result<()> {
    let employee_id = employee_id.as_deref().map(str::trim);
    let log = AttendanceLog::new(db);
    let records = match employee_id {
        Some(employee_id) => log.list_for_employee(employee_id)?,
        None => log.list()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        msg_info!(Message::NoAttendanceFound);
        return Ok(());
    }

    let employees = Employees::new(db);
    let known: Vec<_> = match employee_id {
        Some(employee_id) => employees.find_by_employee_id(employee_id)?.into_iter().collect(),
        None => employees.list()?,
    };
    let names: HashMap<String, String> = known
        .into_iter()
        .map(|employee| (employee.employee_id, employee.full_name))
        .collect();

    msg_print!(Message::AttendanceListHeader, true);
    View::attendance(&records, &names)?;
    Ok(())
}

fn handle_mark(db: &Db, employee_id: Option<String>, date: Option<String>, status: Option<String>) -> Result<()> {
    let employees = Employees::new(db);

    let employee_id = match employee_id {
        Some(employee_id) => employee_id,
        None => select_employee(&employees)?,
    };
    let date = date.unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string());
    let status = match status {
        Some(status) => status,
        None => select_status()?,
    };

    let attendance = validate_attendance(&employee_id, &date, &status)
        .map_err(|err| msg_error_anyhow!(Message::ValidationFailed(err.to_string())))?;

    if !employees.exists(attendance.employee_id())? {
        msg_warning!(Message::UnknownEmployeeReference(attendance.employee_id().to_string()));
    }

    let record = match AttendanceLog::new(db).add(&attendance) {
        Ok(record) => record,
        Err(StoreError::Constraint(reason)) => return Err(msg_error_anyhow!(Message::AttendanceRejected(reason))),
        Err(err) => return Err(err.into()),
    };

    msg_success!(Message::AttendanceMarked(record.employee_id, record.date.to_string(), record.status));
    Ok(())
}

/// Offers the known employees as a list, or a free text prompt when there are none.
fn select_employee(employees: &Employees) -> Result<String> {
    let known = employees.list()?;
    if known.is_empty() {
        msg_info!(Message::NoEmployeesFound);
        return value_or_prompt(None, Message::PromptEmployeeId);
    }

    let items: Vec<String> = known
        .iter()
        .map(|employee| format!("{} - {}", employee.employee_id, employee.full_name))
        .collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectEmployee.to_string())
        .items(&items)
        .default(0)
        .interact()?;

    Ok(known[selection].employee_id.clone())
}

fn select_status() -> Result<String> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectAttendanceStatus.to_string())
        .items(&ATTENDANCE_STATUSES)
        .default(0)
        .interact()?;

    Ok(ATTENDANCE_STATUSES[selection].to_string())
}

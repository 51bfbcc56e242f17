use super::value_or_prompt;
use crate::{
    db::{attendance::AttendanceLog, db::Db, employees::Employees},
    libs::{config::Config, error::StoreError, messages::Message, validation::validate_employee, view::View},
    msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    command: EmployeeCommand,
}

#[derive(Debug, Subcommand)]
enum EmployeeCommand {
    /// List all employees
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add an employee, prompting for any field not given
    Add {
        #[arg(long)]
        employee_id: Option<String>,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        department: Option<String>,
    },
    /// Show a single employee
    Show {
        /// Database id of the employee
        id: i64,
    },
    /// Delete an employee by database id
    Delete {
        /// Database id of the employee
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(config: &Config, args: EmployeeArgs) -> Result<()> {
    let db = Db::open(&config.database)?;

    match args.command {
        EmployeeCommand::List { json } => handle_list(&db, json),
        EmployeeCommand::Add {
            employee_id,
            full_name,
            email,
            department,
        } => handle_add(&db, employee_id, full_name, email, department),
        EmployeeCommand::Show { id } => handle_show(&db, id),
        EmployeeCommand::Delete { id, yes } => handle_delete(&db, id, yes),
    }
}

fn handle_list(db: &Db, json: bool) -> Result<()> {
    let employees = Employees::new(db).list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&employees)?);
        return Ok(());
    }

    if employees.is_empty() {
        msg_info!(Message::NoEmployeesFound);
        return Ok(());
    }

    msg_print!(Message::EmployeeListHeader, true);
    View::employees(&employees)?;
    Ok(())
}

fn handle_add(
    db: &Db,
    employee_id: Option<String>,
    full_name: Option<String>,
    email: Option<String>,
    department: Option<String>,
) -> Result<()> {
    let employee_id = value_or_prompt(employee_id, Message::PromptEmployeeId)?;
    let full_name = value_or_prompt(full_name, Message::PromptFullName)?;
    let email = value_or_prompt(email, Message::PromptEmail)?;
    let department = value_or_prompt(department, Message::PromptDepartment)?;

    let employee = validate_employee(&employee_id, &full_name, &email, &department)
        .map_err(|err| msg_error_anyhow!(Message::ValidationFailed(err.to_string())))?;

    match Employees::new(db).add(&employee) {
        Ok(created) => {
            msg_success!(Message::EmployeeCreated(created.employee_id));
            Ok(())
        }
        Err(StoreError::Duplicate { field, value }) => {
            Err(msg_error_anyhow!(Message::EmployeeAlreadyExists(field.to_string(), value)))
        }
        Err(err) => Err(err.into()),
    }
}

fn handle_show(db: &Db, id: i64) -> Result<()> {
    let employee = Employees::new(db).fetch(id)?;

    msg_print!(Message::EmployeeDetailsHeader(id), true);
    View::employee(&employee)?;
    Ok(())
}

fn handle_delete(db: &Db, id: i64, yes: bool) -> Result<()> {
    let employees = Employees::new(db);

    let Some(employee) = employees.get(id)? else {
        msg_warning!(Message::EmployeeNotFound(id));
        return Ok(());
    };

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteEmployee(employee.full_name.clone(), id).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::EmployeeDeleteCancelled);
            return Ok(());
        }
    }

    if !employees.delete(id)? {
        msg_warning!(Message::EmployeeNotFound(id));
        return Ok(());
    }
    msg_success!(Message::EmployeeDeleted(id));

    let orphaned = AttendanceLog::new(db).count_for_employee(&employee.employee_id)?;
    if orphaned > 0 {
        msg_info!(Message::OrphanedAttendance(orphaned));
    }

    Ok(())
}

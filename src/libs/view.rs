use super::attendance::AttendanceRecord;
use super::employee::EmployeeRecord;
use anyhow::Result;
use prettytable::{row, Table};
use std::collections::HashMap;

pub struct View {}

impl View {
    pub fn employees(employees: &[EmployeeRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "EMPLOYEE ID", "FULL NAME", "EMAIL", "DEPARTMENT"]);
        for employee in employees {
            table.add_row(row![
                employee.id,
                employee.employee_id,
                employee.full_name,
                employee.email,
                employee.department
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn employee(employee: &EmployeeRecord) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", employee.id]);
        table.add_row(row!["EMPLOYEE ID", employee.employee_id]);
        table.add_row(row!["FULL NAME", employee.full_name]);
        table.add_row(row!["EMAIL", employee.email]);
        table.add_row(row!["DEPARTMENT", employee.department]);
        table.printstd();

        Ok(())
    }

    /// Prints attendance rows, resolving names through `names`
    /// (`employee_id` to full name). Unknown references show as `-`.
    pub fn attendance(records: &[AttendanceRecord], names: &HashMap<String, String>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "EMPLOYEE ID", "NAME", "DATE", "STATUS"]);
        for record in records {
            let name = names.get(&record.employee_id).map(String::as_str).unwrap_or("-");
            table.add_row(row![record.id, record.employee_id, name, record.date, record.status]);
        }
        table.printstd();

        Ok(())
    }
}

//! Employee directory storage.
//!
//! ## Duplicate detection
//!
//! `add` first looks for an existing `employee_id` and reports a duplicate
//! without writing. The check and the insert run in an IMMEDIATE transaction, so
//! a second writer waits on the busy timeout until the first one commits and then
//! sees its row. The UNIQUE constraints on `employee_id` and `email` back this up
//! and a violation is reported as [`StoreError::Duplicate`] as well.
//!
//! ## Usage
//!
//! ```rust
//! use hrms::db::{db::Db, employees::Employees};
//! use hrms::libs::config::DatabaseConfig;
//! use hrms::libs::validation::validate_employee;
//!
//! let db = Db::open(&DatabaseConfig::memory())?;
//! let employees = Employees::new(&db);
//! let created = employees.add(&validate_employee("E001", "Ada Lovelace", "ada@example.com", "Engineering")?)?;
//! assert!(employees.delete(created.id)?);
//! assert!(!employees.delete(created.id)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::db::Db;
use crate::libs::employee::{EmployeeRecord, NewEmployee};
use crate::libs::error::{DuplicateField, StoreError, StoreResult};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use tracing::{debug, info, warn};

const SELECT_EMPLOYEES: &str = "SELECT id, employee_id, full_name, email, department FROM employees";
const ORDER_BY_ID: &str = "ORDER BY id";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_EMPLOYEE_ID: &str = "WHERE employee_id = ?1";
const EXISTS_EMPLOYEE_ID: &str = "SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = ?1)";
const INSERT_EMPLOYEE: &str = "INSERT INTO employees (employee_id, full_name, email, department) VALUES (?1, ?2, ?3, ?4)";
const DELETE_EMPLOYEE: &str = "DELETE FROM employees WHERE id = ?1";
const COUNT_EMPLOYEES: &str = "SELECT COUNT(*) FROM employees";

pub struct Employees<'db> {
    conn: &'db Connection,
}

impl<'db> Employees<'db> {
    pub fn new(db: &'db Db) -> Self {
        Self { conn: &db.conn }
    }

    /// All employees in insertion order.
    pub fn list(&self) -> StoreResult<Vec<EmployeeRecord>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_EMPLOYEES, ORDER_BY_ID))?;
        let employees = stmt.query_map([], map_employee)?.collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(employees)
    }

    pub fn get(&self, id: i64) -> StoreResult<Option<EmployeeRecord>> {
        let employee = self
            .conn
            .query_row(&format!("{} {}", SELECT_EMPLOYEES, WHERE_ID), params![id], map_employee)
            .optional()?;

        Ok(employee)
    }

    /// Like [`get`](Self::get) but a missing row is an error.
    pub fn fetch(&self, id: i64) -> StoreResult<EmployeeRecord> {
        self.get(id)?.ok_or(StoreError::NotFound(id))
    }

    pub fn find_by_employee_id(&self, employee_id: &str) -> StoreResult<Option<EmployeeRecord>> {
        let employee = self
            .conn
            .query_row(&format!("{} {}", SELECT_EMPLOYEES, WHERE_EMPLOYEE_ID), params![employee_id], map_employee)
            .optional()?;

        Ok(employee)
    }

    pub fn exists(&self, employee_id: &str) -> StoreResult<bool> {
        let exists: bool = self.conn.query_row(EXISTS_EMPLOYEE_ID, params![employee_id], |row| row.get(0))?;

        Ok(exists)
    }

    /// Inserts a new employee and returns it with its generated id.
    pub fn add(&self, employee: &NewEmployee) -> StoreResult<EmployeeRecord> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let exists: bool = tx.query_row(EXISTS_EMPLOYEE_ID, params![employee.employee_id()], |row| row.get(0))?;
        if exists {
            debug!(employee_id = employee.employee_id(), "employee_id already taken");
            return Err(StoreError::Duplicate {
                field: DuplicateField::EmployeeId,
                value: employee.employee_id().to_string(),
            });
        }

        tx.execute(
            INSERT_EMPLOYEE,
            params![employee.employee_id(), employee.full_name(), employee.email(), employee.department()],
        )
        .map_err(|err| insert_error(err, employee))?;

        let id = tx.last_insert_rowid();
        tx.commit()?;

        info!(id, employee_id = employee.employee_id(), "employee added");
        Ok(EmployeeRecord::from_new(id, employee))
    }

    /// Removes the employee with `id`.
    ///
    /// Returns `false` when no such row exists. Attendance rows that reference
    /// the employee are left in place.
    pub fn delete(&self, id: i64) -> StoreResult<bool> {
        let affected = self.conn.execute(DELETE_EMPLOYEE, params![id])?;

        if affected == 0 {
            debug!(id, "no employee to delete");
            return Ok(false);
        }

        info!(id, "employee deleted");
        Ok(true)
    }

    pub fn count(&self) -> StoreResult<usize> {
        let count: i64 = self.conn.query_row(COUNT_EMPLOYEES, [], |row| row.get(0))?;

        Ok(count as usize)
    }
}

fn map_employee(row: &Row) -> rusqlite::Result<EmployeeRecord> {
    Ok(EmployeeRecord {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        full_name: row.get(2)?,
        email: row.get(3)?,
        department: row.get(4)?,
    })
}

fn insert_error(err: rusqlite::Error, employee: &NewEmployee) -> StoreError {
    match StoreError::unique_violation(&err) {
        Some(field) => {
            warn!(%field, "employee insert rejected by unique constraint");
            let value = match field {
                DuplicateField::EmployeeId => employee.employee_id(),
                DuplicateField::Email => employee.email(),
            };
            StoreError::Duplicate {
                field,
                value: value.to_string(),
            }
        }
        None => err.into(),
    }
}

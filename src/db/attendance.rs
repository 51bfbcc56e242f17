//! Append-only attendance log.
//!
//! Rows are never updated or removed here. Whether `employee_id` must name an
//! existing employee is left to the connection: with `foreign_keys` off (the
//! default) any id is accepted, with it on the insert fails as
//! [`StoreError::Constraint`](crate::libs::error::StoreError::Constraint).

use super::db::Db;
use crate::libs::attendance::{AttendanceRecord, NewAttendance};
use crate::libs::error::StoreResult;
use rusqlite::{params, Connection, Row};
use tracing::info;

const SELECT_ATTENDANCE: &str = "SELECT id, employee_id, date, status FROM attendance";
const ORDER_BY_ID: &str = "ORDER BY id";
const WHERE_EMPLOYEE_ID: &str = "WHERE employee_id = ?1";
const INSERT_ATTENDANCE: &str = "INSERT INTO attendance (employee_id, date, status) VALUES (?1, ?2, ?3)";
const COUNT_FOR_EMPLOYEE: &str = "SELECT COUNT(*) FROM attendance WHERE employee_id = ?1";

pub struct AttendanceLog<'db> {
    conn: &'db Connection,
}

impl<'db> AttendanceLog<'db> {
    pub fn new(db: &'db Db) -> Self {
        Self { conn: &db.conn }
    }

    /// All attendance rows in insertion order.
    pub fn list(&self) -> StoreResult<Vec<AttendanceRecord>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_ATTENDANCE, ORDER_BY_ID))?;
        let records = stmt.query_map([], map_attendance)?.collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    pub fn list_for_employee(&self, employee_id: &str) -> StoreResult<Vec<AttendanceRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} {} {}", SELECT_ATTENDANCE, WHERE_EMPLOYEE_ID, ORDER_BY_ID))?;
        let records = stmt
            .query_map(params![employee_id], map_attendance)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }

    pub fn count_for_employee(&self, employee_id: &str) -> StoreResult<usize> {
        let count: i64 = self.conn.query_row(COUNT_FOR_EMPLOYEE, params![employee_id], |row| row.get(0))?;

        Ok(count as usize)
    }

    /// Appends an attendance row and returns it with its generated id.
    pub fn add(&self, attendance: &NewAttendance) -> StoreResult<AttendanceRecord> {
        self.conn.execute(
            INSERT_ATTENDANCE,
            params![attendance.employee_id(), attendance.date(), attendance.status()],
        )?;
        let id = self.conn.last_insert_rowid();

        info!(id, employee_id = attendance.employee_id(), date = %attendance.date(), "attendance marked");
        Ok(AttendanceRecord::from_new(id, attendance))
    }
}

fn map_attendance(row: &Row) -> rusqlite::Result<AttendanceRecord> {
    Ok(AttendanceRecord {
        id: row.get(0)?,
        employee_id: row.get(1)?,
        date: row.get(2)?,
        status: row.get(3)?,
    })
}

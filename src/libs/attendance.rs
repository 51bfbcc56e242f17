use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Statuses offered when marking attendance interactively.
///
/// The stored status is free-form; these are only suggestions.
pub const ATTENDANCE_STATUSES: [&str; 2] = ["present", "absent"];

/// Validated attendance input ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAttendance {
    employee_id: String,
    date: NaiveDate,
    status: String,
}

impl NewAttendance {
    pub(crate) fn new(employee_id: String, date: NaiveDate, status: String) -> Self {
        Self { employee_id, date, status }
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

/// Attendance row as persisted in the `attendance` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: String,
}

impl AttendanceRecord {
    pub fn from_new(id: i64, attendance: &NewAttendance) -> Self {
        Self {
            id,
            employee_id: attendance.employee_id.clone(),
            date: attendance.date,
            status: attendance.status.clone(),
        }
    }
}

use serde::{Deserialize, Serialize};

/// Validated employee input ready to be stored.
///
/// Only [`validate_employee`](crate::libs::validation::validate_employee)
/// builds this value, so every instance has non-empty fields and a
/// syntactically valid email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEmployee {
    employee_id: String,
    full_name: String,
    email: String,
    department: String,
}

impl NewEmployee {
    pub(crate) fn new(employee_id: String, full_name: String, email: String, department: String) -> Self {
        Self {
            employee_id,
            full_name,
            email,
            department,
        }
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn department(&self) -> &str {
        &self.department
    }
}

/// Employee row as persisted in the `employees` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: i64,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeRecord {
    pub fn from_new(id: i64, employee: &NewEmployee) -> Self {
        Self {
            id,
            employee_id: employee.employee_id.clone(),
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
        }
    }
}

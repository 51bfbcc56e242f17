/// Every user-facing message printed by the `hrms` commands.
///
/// Text lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === EMPLOYEE MESSAGES ===
    EmployeeCreated(String),               // employee_id
    EmployeeDeleted(i64),                  // id
    EmployeeNotFound(i64),                 // id
    EmployeeAlreadyExists(String, String), // field, value
    NoEmployeesFound,
    EmployeeListHeader,
    EmployeeDetailsHeader(i64),
    ConfirmDeleteEmployee(String, i64), // full_name, id
    EmployeeDeleteCancelled,
    OrphanedAttendance(usize),
    PromptEmployeeId,
    PromptFullName,
    PromptEmail,
    PromptDepartment,

    // === ATTENDANCE MESSAGES ===
    AttendanceMarked(String, String, String), // employee_id, date, status
    NoAttendanceFound,
    AttendanceListHeader,
    SelectEmployee,
    SelectAttendanceStatus,
    UnknownEmployeeReference(String),
    AttendanceRejected(String),

    // === VALIDATION MESSAGES ===
    ValidationFailed(String),

    // === DATABASE MESSAGES ===
    DatabaseInitialized(String),
    UsingDatabase(String),
    DatabaseUnavailable(String),
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    NoMigrationsApplied,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportingAllData,

    // === HEALTH MESSAGES ===
    HealthCheckFailed,

    // === CONFIGURATION MESSAGES ===
    ConfigInvalid(String),
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hrms::db::attendance::AttendanceLog;
    use hrms::db::db::Db;
    use hrms::db::employees::Employees;
    use hrms::libs::config::DatabaseConfig;
    use hrms::libs::error::StoreError;
    use hrms::libs::validation::{validate_attendance, validate_employee};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct AttendanceTestContext {
        temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for AttendanceTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&DatabaseConfig::file(temp_dir.path().join("hrms.db"))).unwrap();
            AttendanceTestContext { temp_dir, db }
        }
    }

    impl AttendanceTestContext {
        fn open_enforcing_foreign_keys(&self) -> Db {
            let config = DatabaseConfig::file(self.temp_dir.path().join("hrms.db")).with_foreign_keys(true);
            Db::open(&config).unwrap()
        }
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_mark_attendance_for_unknown_employee(ctx: &mut AttendanceTestContext) {
        let log = AttendanceLog::new(&ctx.db);

        let record = log.add(&validate_attendance("E001", "2024-01-15", "present").unwrap()).unwrap();

        assert!(record.id > 0);
        assert_eq!(record.employee_id, "E001");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(record.status, "present");
        assert!(!Employees::new(&ctx.db).exists("E001").unwrap());
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_list_returns_every_added_record(ctx: &mut AttendanceTestContext) {
        let log = AttendanceLog::new(&ctx.db);
        let inputs = [
            ("E001", "2024-01-15", "present"),
            ("E002", "2024-01-15", "absent"),
            ("E001", "2024-01-16", "present"),
            ("E003", "2024-02-29", "on leave"),
        ];

        let created: Vec<_> = inputs
            .iter()
            .map(|(employee_id, date, status)| log.add(&validate_attendance(employee_id, date, status).unwrap()).unwrap())
            .collect();

        let listed = log.list().unwrap();
        assert_eq!(listed.len(), inputs.len());
        assert_eq!(listed, created);
        for (record, (employee_id, date, status)) in listed.iter().zip(inputs.iter()) {
            assert_eq!(record.employee_id, *employee_id);
            assert_eq!(record.date.to_string(), *date);
            assert_eq!(record.status, *status);
        }
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_same_day_can_be_marked_twice(ctx: &mut AttendanceTestContext) {
        let log = AttendanceLog::new(&ctx.db);
        let input = validate_attendance("E001", "2024-01-15", "present").unwrap();

        let first = log.add(&input).unwrap();
        let second = log.add(&input).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(log.list_for_employee("E001").unwrap().len(), 2);
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_list_for_employee_filters(ctx: &mut AttendanceTestContext) {
        let log = AttendanceLog::new(&ctx.db);
        log.add(&validate_attendance("E001", "2024-01-15", "present").unwrap()).unwrap();
        log.add(&validate_attendance("E002", "2024-01-15", "absent").unwrap()).unwrap();

        let records = log.list_for_employee("E002").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, "absent");
        assert_eq!(log.count_for_employee("E404").unwrap(), 0);
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_foreign_key_enforcement_rejects_unknown_employee(ctx: &mut AttendanceTestContext) {
        let db = ctx.open_enforcing_foreign_keys();
        let log = AttendanceLog::new(&db);

        let err = log.add(&validate_attendance("E404", "2024-01-15", "present").unwrap()).unwrap_err();

        assert!(matches!(err, StoreError::Constraint(_)));
        assert!(log.list().unwrap().is_empty());
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_foreign_key_enforcement_accepts_known_employee(ctx: &mut AttendanceTestContext) {
        let db = ctx.open_enforcing_foreign_keys();
        Employees::new(&db)
            .add(&validate_employee("E001", "Ada Lovelace", "ada@example.com", "Engineering").unwrap())
            .unwrap();

        let record = AttendanceLog::new(&db)
            .add(&validate_attendance("E001", "2024-01-15", "present").unwrap())
            .unwrap();
        assert_eq!(record.employee_id, "E001");
    }

    #[test_context(AttendanceTestContext)]
    #[test]
    fn test_foreign_key_enforcement_blocks_deleting_referenced_employee(ctx: &mut AttendanceTestContext) {
        let db = ctx.open_enforcing_foreign_keys();
        let employees = Employees::new(&db);
        let created = employees
            .add(&validate_employee("E001", "Ada Lovelace", "ada@example.com", "Engineering").unwrap())
            .unwrap();
        AttendanceLog::new(&db)
            .add(&validate_attendance("E001", "2024-01-15", "present").unwrap())
            .unwrap();

        let err = employees.delete(created.id).unwrap_err();

        assert!(matches!(err, StoreError::Constraint(_)));
        assert_eq!(employees.count().unwrap(), 1);
    }
}

#[cfg(test)]
mod tests {
    use hrms::db::attendance::AttendanceLog;
    use hrms::db::db::Db;
    use hrms::db::employees::Employees;
    use hrms::libs::config::DatabaseConfig;
    use hrms::libs::export::{ExportData, ExportFormat, Exporter};
    use hrms::libs::validation::{validate_attendance, validate_employee};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&DatabaseConfig::file(temp_dir.path().join("hrms.db"))).unwrap();

            Employees::new(&db)
                .add(&validate_employee("E001", "Ada Lovelace", "ada@example.com", "Engineering").unwrap())
                .unwrap();
            let log = AttendanceLog::new(&db);
            log.add(&validate_attendance("E001", "2024-01-15", "present").unwrap()).unwrap();
            log.add(&validate_attendance("E002", "2024-01-15", "absent").unwrap()).unwrap();

            ExportTestContext { temp_dir, db }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_employees_csv(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("employees.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(path.clone()));

        let written = exporter.export(&ctx.db, ExportData::Employees).unwrap();
        assert_eq!(written, vec![path.clone()]);

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("id,employee_id,full_name,email,department"));
        assert_eq!(lines.next(), Some("1,E001,Ada Lovelace,ada@example.com,Engineering"));
        assert_eq!(lines.next(), None);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_attendance_json(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("attendance.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(path.clone()));

        exporter.export(&ctx.db, ExportData::Attendance).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["employee_id"], "E001");
        assert_eq!(records[0]["date"], "2024-01-15");
        assert_eq!(records[1]["status"], "absent");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_all_csv_writes_one_file_per_table(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("backup.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(path));

        let written = exporter.export(&ctx.db, ExportData::All).unwrap();

        assert_eq!(
            written,
            vec![
                ctx.temp_dir.path().join("backup_employees.csv"),
                ctx.temp_dir.path().join("backup_attendance.csv"),
            ]
        );
        let attendance = fs::read_to_string(&written[1]).unwrap();
        assert_eq!(attendance.lines().count(), 3);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_all_json_combines_tables(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("backup.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(path.clone()));

        exporter.export(&ctx.db, ExportData::All).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["employees"].as_array().unwrap().len(), 1);
        assert_eq!(value["attendance"].as_array().unwrap().len(), 2);
    }
}

#[cfg(test)]
mod tests {
    use hrms::db::db::Db;
    use hrms::db::employees::Employees;
    use hrms::libs::config::DatabaseConfig;
    use hrms::libs::error::StoreError;
    use hrms::libs::validation::validate_employee;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct DbTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for DbTestContext {
        fn setup() -> Self {
            DbTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_open_and_ping(ctx: &mut DbTestContext) {
        let db = Db::open(&DatabaseConfig::file(ctx.temp_dir.path().join("hrms.db"))).unwrap();
        db.ping().unwrap();
        assert!(ctx.temp_dir.path().join("hrms.db").exists());
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_unreachable_location_is_unavailable(ctx: &mut DbTestContext) {
        let path = ctx.temp_dir.path().join("missing").join("nested").join("hrms.db");

        let err = Db::open(&DatabaseConfig::file(path)).err().unwrap();

        assert!(err.is_unavailable(), "unexpected error: {err:?}");
        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[test_context(DbTestContext)]
    #[test]
    fn test_handles_are_released_on_drop(ctx: &mut DbTestContext) {
        let config = DatabaseConfig::file(ctx.temp_dir.path().join("hrms.db"));

        {
            let db = Db::open(&config).unwrap();
            Employees::new(&db)
                .add(&validate_employee("E001", "Ada Lovelace", "ada@example.com", "Engineering").unwrap())
                .unwrap();
        }

        let db = Db::open(&config).unwrap();
        assert_eq!(Employees::new(&db).count().unwrap(), 1);
    }

    #[test]
    fn test_memory_databases_are_independent() {
        let first = Db::open(&DatabaseConfig::memory()).unwrap();
        let second = Db::open(&DatabaseConfig::memory()).unwrap();

        Employees::new(&first)
            .add(&validate_employee("E001", "Ada Lovelace", "ada@example.com", "Engineering").unwrap())
            .unwrap();

        assert_eq!(Employees::new(&first).count().unwrap(), 1);
        assert_eq!(Employees::new(&second).count().unwrap(), 0);
    }
}

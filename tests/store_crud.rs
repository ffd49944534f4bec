#[cfg(test)]
mod tests {
    use plando::db::error::StoreError;
    use plando::db::query::Query;
    use plando::db::store::{record_field, Record, Store};
    use rusqlite::types::Value;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests in this binary share process environment; serialize them so
    // each one sees its own HOME redirection.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct StoreTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StoreTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn task_record(title: &str, started_at: i64) -> Record {
        vec![
            ("title".to_string(), Value::Text(title.to_string())),
            ("created_at".to_string(), Value::Integer(1_000)),
            ("started_at".to_string(), Value::Integer(started_at)),
            ("ended_at".to_string(), Value::Integer(started_at + 3_600_000)),
            ("category_id".to_string(), Value::Integer(1)),
            ("activity_id".to_string(), Value::Integer(1)),
        ]
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_insert_then_select_by_id_round_trips(_ctx: &mut StoreTestContext) {
        let mut store = Store::new().unwrap();

        let record = task_record("Morning run", 2_000);
        let id = store.insert("task", &record).unwrap();

        let rows = store.select("task", &Query::new().filter("id", "=", id)).unwrap();
        assert_eq!(rows.len(), 1);
        for (field, value) in &record {
            assert_eq!(record_field(&rows[0], field), Some(value), "field '{}' differs", field);
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_touches_only_supplied_fields(_ctx: &mut StoreTestContext) {
        let mut store = Store::new().unwrap();
        let id = store.insert("task", &task_record("Original", 2_000)).unwrap();

        let partial: Record = vec![
            ("id".to_string(), Value::Integer(id)),
            ("title".to_string(), Value::Text("Renamed".to_string())),
        ];
        store.update("task", &partial).unwrap();

        let rows = store.select("task", &Query::new().filter("id", "=", id)).unwrap();
        assert_eq!(record_field(&rows[0], "title"), Some(&Value::Text("Renamed".to_string())));
        // Unsupplied fields retain their prior values
        assert_eq!(record_field(&rows[0], "started_at"), Some(&Value::Integer(2_000)));
        assert_eq!(record_field(&rows[0], "category_id"), Some(&Value::Integer(1)));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_without_id_is_rejected(_ctx: &mut StoreTestContext) {
        let mut store = Store::new().unwrap();
        let partial: Record = vec![("title".to_string(), Value::Text("Nameless".to_string()))];

        let err = store.update("task", &partial).unwrap_err();
        assert!(matches!(err, StoreError::MissingId { .. }));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_update_with_only_an_id_is_rejected(_ctx: &mut StoreTestContext) {
        let mut store = Store::new().unwrap();
        let id = store.insert("task", &task_record("Untouched", 2_000)).unwrap();

        let only_id: Record = vec![("id".to_string(), Value::Integer(id))];
        let err = store.update("task", &only_id).unwrap_err();
        assert!(matches!(err, StoreError::NoFieldsToSet { .. }));

        let rows = store.select("task", &Query::new().filter("id", "=", id)).unwrap();
        assert_eq!(record_field(&rows[0], "title"), Some(&Value::Text("Untouched".to_string())));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_by_ids_removes_exactly_the_named_rows(_ctx: &mut StoreTestContext) {
        let mut store = Store::new().unwrap();
        let a = store.insert("task", &task_record("A", 1_000)).unwrap();
        let b = store.insert("task", &task_record("B", 2_000)).unwrap();
        let c = store.insert("task", &task_record("C", 3_000)).unwrap();

        store.delete_by_ids("task", &[a, b]).unwrap();

        let rows = store.select("task", &Query::new()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(record_field(&rows[0], "id"), Some(&Value::Integer(c)));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_select_on_missing_table_is_a_distinct_error(_ctx: &mut StoreTestContext) {
        let mut store = Store::new().unwrap();

        let err = store.select("no_such_table", &Query::new()).unwrap_err();
        match err {
            StoreError::MissingTable { table } => assert_eq!(table, "no_such_table"),
            other => panic!("expected MissingTable, got {:?}", other),
        }
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_explicit_zero_limit_returns_zero_rows(_ctx: &mut StoreTestContext) {
        let mut store = Store::new().unwrap();
        store.insert("task", &task_record("A", 1_000)).unwrap();

        let rows = store.select("task", &Query::new().page(Some(0), 0)).unwrap();
        assert!(rows.is_empty());

        let rows = store.select("task", &Query::new().page(None, 0)).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_list_table_names_reports_bootstrapped_tables(_ctx: &mut StoreTestContext) {
        let mut store = Store::new().unwrap();

        let names = store.list_table_names().unwrap();
        assert!(names.contains(&"category".to_string()));
        assert!(names.contains(&"activity".to_string()));
        assert!(names.contains(&"task".to_string()));

        assert!(store.table_exists("task").unwrap());
        assert!(!store.table_exists("ghost").unwrap());
    }
}

#[cfg(test)]
mod tests {
    use plando::libs::data_storage::DataStorage;
    use plando::libs::prefs::{
        Prefs, AVATAR_KEY, END_NOTIFICATIONS_KEY, PREFS_FILE_NAME, START_NOTIFICATIONS_KEY,
        USERNAME_KEY,
    };
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct PrefsTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for PrefsTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            PrefsTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(PrefsTestContext)]
    #[test]
    fn test_set_get_remove_round_trip(_ctx: &mut PrefsTestContext) {
        let mut prefs = Prefs::new().unwrap();
        assert_eq!(prefs.get("theme"), None);

        prefs.set("theme", "dark").unwrap();
        assert_eq!(prefs.get("theme"), Some("dark"));

        prefs.remove("theme").unwrap();
        assert_eq!(prefs.get("theme"), None);
    }

    #[test_context(PrefsTestContext)]
    #[test]
    fn test_values_survive_a_reload(_ctx: &mut PrefsTestContext) {
        let mut prefs = Prefs::new().unwrap();
        prefs.set("theme", "dark").unwrap();
        drop(prefs);

        let reloaded = Prefs::new().unwrap();
        assert_eq!(reloaded.get("theme"), Some("dark"));
    }

    #[test_context(PrefsTestContext)]
    #[test]
    fn test_set_if_absent_never_clobbers(_ctx: &mut PrefsTestContext) {
        let mut prefs = Prefs::new().unwrap();

        assert!(prefs.set_if_absent("theme", "dark").unwrap());
        assert!(!prefs.set_if_absent("theme", "light").unwrap());
        assert_eq!(prefs.get("theme"), Some("dark"));
    }

    #[test_context(PrefsTestContext)]
    #[test]
    fn test_defaults_seed_once_and_existing_values_win(_ctx: &mut PrefsTestContext) {
        let mut prefs = Prefs::new().unwrap();
        prefs.set(START_NOTIFICATIONS_KEY, "false").unwrap();
        prefs.ensure_defaults().unwrap();

        // Explicit user choice survives seeding
        assert_eq!(prefs.get(START_NOTIFICATIONS_KEY), Some("false"));
        assert_eq!(prefs.get(END_NOTIFICATIONS_KEY), Some("true"));
        assert_eq!(prefs.get(USERNAME_KEY), Some("planner"));
        assert_eq!(prefs.get(AVATAR_KEY), Some("smile"));

        prefs.set(USERNAME_KEY, "ada").unwrap();
        prefs.ensure_defaults().unwrap();
        assert_eq!(prefs.get(USERNAME_KEY), Some("ada"));
    }

    #[test_context(PrefsTestContext)]
    #[test]
    fn test_is_enabled_requires_the_literal_true(_ctx: &mut PrefsTestContext) {
        let mut prefs = Prefs::new().unwrap();

        assert!(!prefs.is_enabled(START_NOTIFICATIONS_KEY));
        prefs.set(START_NOTIFICATIONS_KEY, "yes").unwrap();
        assert!(!prefs.is_enabled(START_NOTIFICATIONS_KEY));
        prefs.set(START_NOTIFICATIONS_KEY, "true").unwrap();
        assert!(prefs.is_enabled(START_NOTIFICATIONS_KEY));
    }

    #[test_context(PrefsTestContext)]
    #[test]
    fn test_file_is_written_as_json(_ctx: &mut PrefsTestContext) {
        let mut prefs = Prefs::new().unwrap();
        prefs.set("theme", "dark").unwrap();

        let path = DataStorage::new().get_path(PREFS_FILE_NAME).unwrap();
        let raw = std::fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["theme"], "dark");
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Result};
    use plando::libs::notifier::{NotificationProvider, ScheduledNotification};
    use plando::libs::prefs::{Prefs, END_NOTIFICATIONS_KEY, START_NOTIFICATIONS_KEY};
    use plando::libs::reminders::{end_reminder_id, start_reminder_id, ReminderKind, ReminderScheduler};
    use plando::libs::task::Task;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ReminderTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ReminderTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ReminderTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    /// Records every provider call in order; optionally fails everything.
    #[derive(Default)]
    struct MockProvider {
        entries: Vec<ScheduledNotification>,
        log: Vec<String>,
        fail: bool,
    }

    impl NotificationProvider for MockProvider {
        fn schedule(&mut self, id: &str, title: &str, body: &str, fire_at: i64) -> Result<()> {
            if self.fail {
                return Err(anyhow!("provider down"));
            }
            self.log.push(format!("schedule {}", id));
            self.entries.retain(|entry| entry.id != id);
            self.entries.push(ScheduledNotification {
                id: id.to_string(),
                title: title.to_string(),
                body: body.to_string(),
                fire_at,
            });
            Ok(())
        }

        fn cancel(&mut self, id: &str) -> Result<()> {
            if self.fail {
                return Err(anyhow!("provider down"));
            }
            self.log.push(format!("cancel {}", id));
            self.entries.retain(|entry| entry.id != id);
            Ok(())
        }

        fn list_scheduled(&self) -> Result<Vec<ScheduledNotification>> {
            if self.fail {
                return Err(anyhow!("provider down"));
            }
            Ok(self.entries.clone())
        }
    }

    fn enabled_prefs() -> Prefs {
        let mut prefs = Prefs::new().unwrap();
        prefs.ensure_defaults().unwrap();
        prefs
    }

    fn persisted_task(id: i64, started_at: i64, ended_at: i64) -> Task {
        let mut task = Task::new("Evening run", started_at, ended_at, 1, 1);
        task.id = Some(id);
        task
    }

    #[test_context(ReminderTestContext)]
    #[test]
    fn test_register_arms_deterministic_ids_at_exact_instants(_ctx: &mut ReminderTestContext) {
        let prefs = enabled_prefs();
        let mut scheduler = ReminderScheduler::new(MockProvider::default());

        let task = persisted_task(42, 60_000, 3_600_000);
        scheduler.register(&task, &prefs);

        let entries = scheduler.provider().list_scheduled().unwrap();
        assert_eq!(entries.len(), 2);
        let start = entries.iter().find(|e| e.id == start_reminder_id(42)).unwrap();
        assert_eq!(start.fire_at, 60_000);
        let end = entries.iter().find(|e| e.id == end_reminder_id(42)).unwrap();
        assert_eq!(end.fire_at, 3_600_000);
    }

    #[test_context(ReminderTestContext)]
    #[test]
    fn test_disabled_preference_gates_registration(_ctx: &mut ReminderTestContext) {
        let mut prefs = enabled_prefs();
        prefs.set(START_NOTIFICATIONS_KEY, "false").unwrap();

        let mut scheduler = ReminderScheduler::new(MockProvider::default());
        scheduler.register(&persisted_task(7, 1_000, 2_000), &prefs);

        let entries = scheduler.provider().list_scheduled().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, end_reminder_id(7));
    }

    #[test_context(ReminderTestContext)]
    #[test]
    fn test_unpersisted_task_gets_no_reminders(_ctx: &mut ReminderTestContext) {
        let prefs = enabled_prefs();
        let mut scheduler = ReminderScheduler::new(MockProvider::default());

        let task = Task::new("Draft", 1_000, 2_000, 1, 1);
        scheduler.register(&task, &prefs);

        assert!(scheduler.provider().list_scheduled().unwrap().is_empty());
    }

    #[test_context(ReminderTestContext)]
    #[test]
    fn test_reschedule_cancels_before_re_registering(_ctx: &mut ReminderTestContext) {
        let prefs = enabled_prefs();
        let mut scheduler = ReminderScheduler::new(MockProvider::default());

        let task = persisted_task(5, 1_000, 2_000);
        scheduler.register(&task, &prefs);

        let mut edited = task.clone();
        edited.started_at = 5_000;
        edited.ended_at = 6_000;
        scheduler.reschedule(&edited, &prefs);

        let log = &scheduler.provider().log;
        let first_cancel = log.iter().position(|op| op == &format!("cancel {}", start_reminder_id(5))).unwrap();
        let re_register = log
            .iter()
            .rposition(|op| op == &format!("schedule {}", start_reminder_id(5)))
            .unwrap();
        assert!(first_cancel < re_register, "cancellation must precede re-registration: {:?}", log);

        // No duplicate armed reminders after the edit
        let entries = scheduler.provider().list_scheduled().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.iter().find(|e| e.id == start_reminder_id(5)).unwrap().fire_at, 5_000);
    }

    #[test_context(ReminderTestContext)]
    #[test]
    fn test_sweep_cancels_every_id_with_matching_prefix(_ctx: &mut ReminderTestContext) {
        let prefs = enabled_prefs();
        let mut scheduler = ReminderScheduler::new(MockProvider::default());

        for id in 1..=3 {
            scheduler.register(&persisted_task(id, 1_000 * id, 2_000 * id), &prefs);
        }
        assert_eq!(scheduler.provider().list_scheduled().unwrap().len(), 6);

        scheduler.sweep(ReminderKind::Start);

        let remaining = scheduler.provider().list_scheduled().unwrap();
        assert_eq!(remaining.len(), 3);
        assert!(remaining.iter().all(|e| e.id.starts_with("end_")));
    }

    #[test_context(ReminderTestContext)]
    #[test]
    fn test_provider_failures_are_swallowed(_ctx: &mut ReminderTestContext) {
        let prefs = enabled_prefs();
        let mut scheduler = ReminderScheduler::new(MockProvider {
            fail: true,
            ..Default::default()
        });

        // None of these may panic or propagate
        scheduler.register(&persisted_task(1, 1_000, 2_000), &prefs);
        scheduler.cancel_for_task(1);
        scheduler.sweep(ReminderKind::End);
    }

    #[test_context(ReminderTestContext)]
    #[test]
    fn test_preference_keys_keep_wire_spelling(_ctx: &mut ReminderTestContext) {
        assert_eq!(ReminderKind::Start.pref_key(), START_NOTIFICATIONS_KEY);
        assert_eq!(ReminderKind::End.pref_key(), END_NOTIFICATIONS_KEY);
        assert_eq!(START_NOTIFICATIONS_KEY, "isTaskStartNotificationsEnabled");
        assert_eq!(END_NOTIFICATIONS_KEY, "isTaskEndNotificationsEnabled");
    }
}

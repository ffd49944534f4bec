//! Task lifecycle orchestration.
//!
//! `Planner` ties the pieces together in the one order that matters:
//! validate the draft, persist through the storage layer, then drive the
//! reminder scheduler. Storage failures propagate to the caller;
//! validation problems come back as data; reminder failures are already
//! swallowed inside the scheduler and can never fail a persistence
//! operation.

use crate::db::error::StoreError;
use crate::db::query::Query;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::notifier::{NotificationLedger, NotificationProvider};
use crate::libs::prefs::Prefs;
use crate::libs::reminders::{ReminderKind, ReminderScheduler};
use crate::libs::task::Task;
use crate::libs::validate::{validate_task, ErrorMap};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::Utc;

/// Outcome of a create/edit attempt: either the persisted task or the
/// validation error map that blocked the write.
#[derive(Debug)]
pub enum PlanOutcome {
    Saved(Task),
    Invalid(ErrorMap),
}

pub struct Planner<P: NotificationProvider> {
    tasks: Tasks,
    prefs: Prefs,
    scheduler: ReminderScheduler<P>,
}

impl Planner<NotificationLedger> {
    pub fn new() -> Result<Self> {
        Self::with_provider(NotificationLedger::new()?)
    }
}

impl<P: NotificationProvider> Planner<P> {
    pub fn with_provider(provider: P) -> Result<Self> {
        let mut prefs = Prefs::new()?;
        prefs.ensure_defaults()?;
        Ok(Self {
            tasks: Tasks::new()?,
            prefs,
            scheduler: ReminderScheduler::new(provider),
        })
    }

    pub fn prefs(&self) -> &Prefs {
        &self.prefs
    }

    pub fn scheduler(&self) -> &ReminderScheduler<P> {
        &self.scheduler
    }

    /// Validates and persists a new task, then registers its reminders.
    pub fn create_task(&mut self, mut task: Task) -> Result<PlanOutcome> {
        let errors = validate_task(&task, now_ms());
        if !errors.is_empty() {
            return Ok(PlanOutcome::Invalid(errors));
        }

        let id = self.tasks.insert(&task)?;
        task.id = Some(id);
        self.scheduler.register(&task, &self.prefs);
        Ok(PlanOutcome::Saved(task))
    }

    /// Edits a task in place and re-arms its reminders.
    ///
    /// A task whose `started_at` is already in the past is rejected
    /// outright, before any write or reminder mutation.
    pub fn edit_task(&mut self, task: Task) -> Result<PlanOutcome> {
        let id = task
            .id
            .ok_or_else(|| msg_error_anyhow!(Message::NoTaskIdsProvided))?;
        let current = self
            .tasks
            .get_by_id(id)?
            .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(id)))?;

        if current.started_at <= now_ms() {
            return Err(msg_error_anyhow!(Message::EditStartedInPast(id)));
        }

        let errors = validate_task(&task, now_ms());
        if !errors.is_empty() {
            return Ok(PlanOutcome::Invalid(errors));
        }

        self.tasks.update(&task)?;
        self.scheduler.reschedule(&task, &self.prefs);
        Ok(PlanOutcome::Saved(task))
    }

    /// Finishes a task early: rewrites `ended_at` to now and cancels both
    /// reminders, since the end reminder would fire at the stale instant.
    pub fn finish_early(&mut self, id: i64) -> Result<Task> {
        let mut task = self
            .tasks
            .get_by_id(id)?
            .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(id)))?;
        task.ended_at = now_ms();
        self.tasks.update(&task)?;
        self.scheduler.cancel_for_task(id);
        Ok(task)
    }

    /// Deletes tasks by id: reminders are cancelled unconditionally, then
    /// the rows are removed in one statement.
    pub fn delete_tasks(&mut self, ids: &[i64]) -> Result<usize> {
        for id in ids {
            self.scheduler.cancel_for_task(*id);
        }
        self.tasks.delete_many(ids)?;
        Ok(ids.len())
    }

    pub fn list_tasks(&mut self, query: &Query) -> Result<Vec<Task>, StoreError> {
        self.tasks.fetch(query)
    }

    pub fn get_task(&mut self, id: i64) -> Result<Option<Task>, StoreError> {
        self.tasks.get_by_id(id)
    }

    /// Flips a global notification preference. Turning a kind off sweeps
    /// every armed reminder carrying that kind's prefix.
    pub fn set_notifications(&mut self, kind: ReminderKind, enabled: bool) -> Result<()> {
        self.prefs.set(kind.pref_key(), if enabled { "true" } else { "false" })?;
        if !enabled {
            self.scheduler.sweep(kind);
        }
        Ok(())
    }
}

fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

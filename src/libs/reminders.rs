//! Lifecycle-bound reminder scheduling.
//!
//! Each task owns up to two reminders, one at `started_at` and one at
//! `ended_at`, with deterministic ids (`start_<taskId>` / `end_<taskId>`)
//! so they can always be reconstructed and cancelled without a secondary
//! index. Registration is gated by the global notification preferences.
//!
//! Everything here is best-effort: reminders are a convenience layered on
//! durable data, so provider failures are logged and swallowed and never
//! block a persistence operation. The data layer's loud failure policy
//! deliberately does not apply on this side of the boundary.
//!
//! The one ordering rule that does hold: cancellation always precedes
//! re-registration for the same task id, so an edit can never leave a
//! duplicate armed reminder behind.

use crate::libs::messages::Message;
use crate::libs::notifier::NotificationProvider;
use crate::libs::prefs::{Prefs, END_NOTIFICATIONS_KEY, START_NOTIFICATIONS_KEY};
use crate::libs::task::Task;
use crate::{msg_debug, msg_warning};
use chrono::{Local, TimeZone};

pub const START_REMINDER_PREFIX: &str = "start_";
pub const END_REMINDER_PREFIX: &str = "end_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderKind {
    Start,
    End,
}

impl ReminderKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ReminderKind::Start => START_REMINDER_PREFIX,
            ReminderKind::End => END_REMINDER_PREFIX,
        }
    }

    pub fn pref_key(&self) -> &'static str {
        match self {
            ReminderKind::Start => START_NOTIFICATIONS_KEY,
            ReminderKind::End => END_NOTIFICATIONS_KEY,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReminderKind::Start => "Task start",
            ReminderKind::End => "Task end",
        }
    }
}

pub fn start_reminder_id(task_id: i64) -> String {
    format!("{}{}", START_REMINDER_PREFIX, task_id)
}

pub fn end_reminder_id(task_id: i64) -> String {
    format!("{}{}", END_REMINDER_PREFIX, task_id)
}

pub struct ReminderScheduler<P: NotificationProvider> {
    provider: P,
}

impl<P: NotificationProvider> ReminderScheduler<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Registers the start/end reminders for a persisted task, each gated
    /// by its global preference. A task without an id has not been
    /// persisted and gets nothing.
    pub fn register(&mut self, task: &Task, prefs: &Prefs) {
        let Some(task_id) = task.id else { return };

        if prefs.is_enabled(START_NOTIFICATIONS_KEY) {
            self.schedule_one(
                &start_reminder_id(task_id),
                &task.title,
                &format!("Starts at {}", format_instant(task.started_at)),
                task.started_at,
            );
        }
        if prefs.is_enabled(END_NOTIFICATIONS_KEY) {
            self.schedule_one(
                &end_reminder_id(task_id),
                &task.title,
                &format!("Ends at {}", format_instant(task.ended_at)),
                task.ended_at,
            );
        }
    }

    /// Cancels both reminders for a task id, armed or not.
    pub fn cancel_for_task(&mut self, task_id: i64) {
        self.cancel_one(&start_reminder_id(task_id));
        self.cancel_one(&end_reminder_id(task_id));
    }

    /// Edit path: cancel the stale pair, then register against the
    /// updated instants.
    pub fn reschedule(&mut self, task: &Task, prefs: &Prefs) {
        if let Some(task_id) = task.id {
            self.cancel_for_task(task_id);
        }
        self.register(task, prefs);
    }

    /// Global preference sweep: cancels every armed reminder whose id
    /// carries the kind's prefix. This walks the provider's full
    /// scheduled list by design; the scheduler keeps no index of what is
    /// armed.
    pub fn sweep(&mut self, kind: ReminderKind) {
        let scheduled = match self.provider.list_scheduled() {
            Ok(scheduled) => scheduled,
            Err(e) => {
                msg_warning!(Message::ReminderListFailed(e.to_string()));
                return;
            }
        };

        let mut swept = 0;
        for entry in scheduled {
            if entry.id.starts_with(kind.prefix()) {
                self.cancel_one(&entry.id);
                swept += 1;
            }
        }
        msg_debug!(Message::RemindersSwept(swept, kind.prefix().to_string()));
    }

    fn schedule_one(&mut self, id: &str, title: &str, body: &str, fire_at: i64) {
        match self.provider.schedule(id, title, body, fire_at) {
            Ok(()) => msg_debug!(Message::ReminderScheduled(id.to_string())),
            Err(e) => msg_warning!(Message::ReminderScheduleFailed(id.to_string(), e.to_string())),
        }
    }

    fn cancel_one(&mut self, id: &str) {
        if let Err(e) = self.provider.cancel(id) {
            msg_warning!(Message::ReminderCancelFailed(id.to_string(), e.to_string()));
        }
    }
}

fn format_instant(epoch_ms: i64) -> String {
    match Local.timestamp_millis_opt(epoch_ms).single() {
        Some(instant) => instant.format("%Y-%m-%d %H:%M").to_string(),
        None => format!("{}", epoch_ms),
    }
}

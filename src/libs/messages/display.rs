//! Display implementation for plando application messages.
//!
//! Converts structured `Message` values into the human-readable text shown
//! on the terminal. All user-facing wording lives here, in one place.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === SCHEMA MESSAGES ===
            Message::SchemaUpToDate => "Database schema is up to date".to_string(),
            Message::SchemaTableCreated(table) => format!("Created table '{}'", table),
            Message::TaxonomySeeded(count) => format!("Seeded {} taxonomy rows", count),

            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskFinished(title) => format!("Task '{}' finished early", title),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s)", count),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NoTaskIdsProvided => "No task IDs provided".to_string(),
            Message::ConfirmDeleteTasks(count) => format!("Delete {} task(s)?", count),
            Message::TaskRejected => "Task was rejected by validation".to_string(),
            Message::CategoryNotFound(title) => format!("Category '{}' not found", title),
            Message::ActivityNotFound(title) => format!("Activity '{}' not found", title),
            Message::ValidationIssue(field, problem) => format!("  {}: {}", field, problem),
            Message::EditStartedInPast(id) => {
                format!("Task {} has already started and can no longer be edited", id)
            }

            // === REMINDER MESSAGES ===
            Message::ReminderScheduled(id) => format!("Reminder '{}' scheduled", id),
            Message::ReminderScheduleFailed(id, cause) => {
                format!("Failed to schedule reminder '{}': {}", id, cause)
            }
            Message::ReminderCancelFailed(id, cause) => {
                format!("Failed to cancel reminder '{}': {}", id, cause)
            }
            Message::ReminderListFailed(cause) => {
                format!("Failed to list scheduled reminders: {}", cause)
            }
            Message::RemindersSwept(count, prefix) => {
                format!("Cancelled {} reminder(s) with prefix '{}'", count, prefix)
            }

            // === PREFERENCE MESSAGES ===
            Message::PrefDefaultsSeeded => "Default preferences seeded".to_string(),
            Message::NotificationsEnabled(kind) => format!("{} notifications enabled", kind),
            Message::NotificationsDisabled(kind) => format!("{} notifications disabled", kind),

            // === INIT MESSAGES ===
            Message::StorageInitialized => "Storage initialized".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}

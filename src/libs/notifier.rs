//! The external notification provider boundary.
//!
//! The scheduler talks to whatever delivers OS notifications through the
//! [`NotificationProvider`] trait. The default implementation is a JSON
//! ledger in the application data directory: it records what is armed,
//! replaces entries on re-registration and answers the full scheduled
//! list for preference sweeps. Actual delivery is owned by the platform
//! layer outside this crate.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const NOTIFICATIONS_FILE_NAME: &str = "notifications.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledNotification {
    pub id: String,
    pub title: String,
    pub body: String,
    /// Fire instant, epoch milliseconds.
    pub fire_at: i64,
}

pub trait NotificationProvider {
    fn schedule(&mut self, id: &str, title: &str, body: &str, fire_at: i64) -> Result<()>;

    /// Cancels by id. Cancelling an id that is not armed is not an error.
    fn cancel(&mut self, id: &str) -> Result<()>;

    fn list_scheduled(&self) -> Result<Vec<ScheduledNotification>>;
}

pub struct NotificationLedger {
    path: PathBuf,
    entries: Vec<ScheduledNotification>,
}

impl NotificationLedger {
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(NOTIFICATIONS_FILE_NAME)?;
        let entries = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            Vec::new()
        };
        Ok(Self { path, entries })
    }

    fn save(&self) -> Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

impl NotificationProvider for NotificationLedger {
    fn schedule(&mut self, id: &str, title: &str, body: &str, fire_at: i64) -> Result<()> {
        // Re-registering an id replaces the armed entry
        self.entries.retain(|entry| entry.id != id);
        self.entries.push(ScheduledNotification {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            fire_at,
        });
        self.save()
    }

    fn cancel(&mut self, id: &str) -> Result<()> {
        self.entries.retain(|entry| entry.id != id);
        self.save()
    }

    fn list_scheduled(&self) -> Result<Vec<ScheduledNotification>> {
        Ok(self.entries.clone())
    }
}

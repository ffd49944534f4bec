//! Key-value preference store.
//!
//! A small JSON-backed string map in the application data directory.
//! Values are stored as strings; the notification gates hold the literal
//! `"true"` / `"false"`. Key names keep the original camelCase wire
//! spelling so an existing preference file keeps working.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

pub const PREFS_FILE_NAME: &str = "prefs.json";

pub const START_NOTIFICATIONS_KEY: &str = "isTaskStartNotificationsEnabled";
pub const END_NOTIFICATIONS_KEY: &str = "isTaskEndNotificationsEnabled";
pub const USERNAME_KEY: &str = "username";
pub const AVATAR_KEY: &str = "avatar";

const DEFAULT_USERNAME: &str = "planner";
const DEFAULT_AVATAR: &str = "smile";

pub struct Prefs {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl Prefs {
    pub fn new() -> Result<Self> {
        let path = DataStorage::new().get_path(PREFS_FILE_NAME)?;
        let values = if path.exists() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        self.save()
    }

    /// Sets the key only when absent. Returns whether a write happened.
    pub fn set_if_absent(&mut self, key: &str, value: &str) -> Result<bool> {
        if self.values.contains_key(key) {
            return Ok(false);
        }
        self.set(key, value)?;
        Ok(true)
    }

    /// Seeds default preference values at startup. Existing values win.
    pub fn ensure_defaults(&mut self) -> Result<()> {
        self.set_if_absent(START_NOTIFICATIONS_KEY, "true")?;
        self.set_if_absent(END_NOTIFICATIONS_KEY, "true")?;
        self.set_if_absent(USERNAME_KEY, DEFAULT_USERNAME)?;
        self.set_if_absent(AVATAR_KEY, DEFAULT_AVATAR)?;
        Ok(())
    }

    /// True when a notification gate holds the literal `"true"`.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    fn save(&self) -> Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(&self.values)?)?;
        Ok(())
    }
}

//! Storage initialization command.
//!
//! Opening the database bootstraps the schema and seeds the taxonomy on
//! first run; seeding the preference defaults makes the notification
//! gates explicit. Both steps are idempotent, so `init` is safe to run
//! at any time.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::prefs::Prefs;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    Db::new()?;
    Prefs::new()?.ensure_defaults()?;

    msg_success!(Message::StorageInitialized);
    Ok(())
}

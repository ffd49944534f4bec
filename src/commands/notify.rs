//! Notification preference commands.
//!
//! The gates are global, not per-task. Disabling a kind sweeps every
//! currently armed reminder with the matching id prefix.

use crate::libs::messages::Message;
use crate::libs::planner::Planner;
use crate::libs::prefs::Prefs;
use crate::libs::reminders::ReminderKind;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

#[derive(Debug, Args)]
pub struct NotifyArgs {
    #[command(subcommand)]
    command: NotifyCommands,
}

#[derive(Debug, Subcommand)]
enum NotifyCommands {
    #[command(about = "Show current notification preferences")]
    Status,
    #[command(about = "Enable start or end reminders")]
    Enable { kind: KindArg },
    #[command(about = "Disable start or end reminders and sweep armed ones")]
    Disable { kind: KindArg },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Start,
    End,
}

impl From<KindArg> for ReminderKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Start => ReminderKind::Start,
            KindArg::End => ReminderKind::End,
        }
    }
}

pub fn cmd(notify_args: NotifyArgs) -> Result<()> {
    match notify_args.command {
        NotifyCommands::Status => status(),
        NotifyCommands::Enable { kind } => toggle(kind.into(), true),
        NotifyCommands::Disable { kind } => toggle(kind.into(), false),
    }
}

fn status() -> Result<()> {
    let prefs = Prefs::new()?;
    for kind in [ReminderKind::Start, ReminderKind::End] {
        if prefs.is_enabled(kind.pref_key()) {
            msg_info!(Message::NotificationsEnabled(kind.label().to_string()));
        } else {
            msg_info!(Message::NotificationsDisabled(kind.label().to_string()));
        }
    }
    Ok(())
}

fn toggle(kind: ReminderKind, enabled: bool) -> Result<()> {
    Planner::new()?.set_notifications(kind, enabled)?;
    if enabled {
        msg_success!(Message::NotificationsEnabled(kind.label().to_string()));
    } else {
        msg_success!(Message::NotificationsDisabled(kind.label().to_string()));
    }
    Ok(())
}

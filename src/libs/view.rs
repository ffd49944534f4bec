use crate::libs::task::Task;
use crate::libs::taxonomy::{Activity, Category};
use anyhow::Result;
use chrono::{Local, TimeZone};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STARTS", "ENDS", "BUDGET", "CATEGORY", "ACTIVITY"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.title,
                fmt_instant(task.started_at),
                fmt_instant(task.ended_at),
                task.budget.map(|b| b.to_string()).unwrap_or_default(),
                task.category_id.unwrap_or(0),
                task.activity_id.unwrap_or(0)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn categories(categories: &[Category]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "AVATAR"]);
        for category in categories {
            table.add_row(row![category.id.unwrap_or(0), category.title, category.avatar]);
        }
        table.printstd();

        Ok(())
    }

    pub fn activities(activities: &[Activity]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "CATEGORY ID"]);
        for activity in activities {
            table.add_row(row![activity.id.unwrap_or(0), activity.title, activity.category_id]);
        }
        table.printstd();

        Ok(())
    }
}

fn fmt_instant(epoch_ms: i64) -> String {
    match Local.timestamp_millis_opt(epoch_ms).single() {
        Some(instant) => instant.format("%Y-%m-%d %H:%M").to_string(),
        None => epoch_ms.to_string(),
    }
}

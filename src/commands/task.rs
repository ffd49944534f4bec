//! Task lifecycle commands: create, edit, finish early, delete, list.
//!
//! This is presentation glue over [`Planner`]; validation error maps come
//! back as data and are rendered per field, storage errors propagate.

use crate::db::query::{Direction, Query};
use crate::db::taxonomy::Taxonomy;
use crate::libs::messages::Message;
use crate::libs::planner::{PlanOutcome, Planner};
use crate::libs::task::Task;
use crate::libs::view::View;
use crate::{msg_error, msg_error_anyhow, msg_info, msg_success, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDateTime, TimeZone};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommands,
}

#[derive(Debug, Subcommand)]
enum TaskCommands {
    #[command(about = "Create a new task")]
    Create(CreateArgs),
    #[command(about = "Edit an upcoming task")]
    Edit(EditArgs),
    #[command(about = "Finish a task early, rewriting its end to now")]
    Finish { id: i64 },
    #[command(about = "Delete tasks by id")]
    Delete { ids: Vec<i64> },
    #[command(about = "List tasks")]
    List(ListArgs),
}

#[derive(Debug, Args)]
struct CreateArgs {
    title: String,
    /// Start instant, local time, "YYYY-MM-DD HH:MM"
    #[arg(long)]
    starts: String,
    /// End instant, local time, "YYYY-MM-DD HH:MM"
    #[arg(long)]
    ends: String,
    /// Category title from the seeded taxonomy
    #[arg(long)]
    category: String,
    /// Activity title within the category
    #[arg(long)]
    activity: String,
    #[arg(long)]
    description: Option<String>,
    /// Budget in whole currency units
    #[arg(long)]
    budget: Option<i64>,
}

#[derive(Debug, Args)]
struct EditArgs {
    id: i64,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    starts: Option<String>,
    #[arg(long)]
    ends: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    budget: Option<i64>,
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Only tasks in this category id
    #[arg(long)]
    category_id: Option<i64>,
    #[arg(long)]
    limit: Option<i64>,
    #[arg(long, default_value_t = 0)]
    offset: i64,
}

pub fn cmd(task_args: TaskArgs) -> Result<()> {
    match task_args.command {
        TaskCommands::Create(args) => create(args),
        TaskCommands::Edit(args) => edit(args),
        TaskCommands::Finish { id } => finish(id),
        TaskCommands::Delete { ids } => delete(ids),
        TaskCommands::List(args) => list(args),
    }
}

fn create(args: CreateArgs) -> Result<()> {
    let mut taxonomy = Taxonomy::new()?;
    let category = taxonomy
        .find_category(&args.category)?
        .ok_or_else(|| msg_error_anyhow!(Message::CategoryNotFound(args.category.clone())))?;
    let category_id = category.id.unwrap_or(0);
    let activity = taxonomy
        .find_activity(category_id, &args.activity)?
        .ok_or_else(|| msg_error_anyhow!(Message::ActivityNotFound(args.activity.clone())))?;

    let mut task = Task::new(
        &args.title,
        parse_instant(&args.starts)?,
        parse_instant(&args.ends)?,
        category_id,
        activity.id.unwrap_or(0),
    );
    task.description = args.description;
    task.budget = args.budget;

    match Planner::new()?.create_task(task)? {
        PlanOutcome::Saved(task) => msg_success!(Message::TaskCreated(task.title)),
        PlanOutcome::Invalid(errors) => report_validation(errors),
    }
    Ok(())
}

fn edit(args: EditArgs) -> Result<()> {
    let mut planner = Planner::new()?;
    let mut task = planner
        .get_task(args.id)?
        .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(args.id)))?;

    if let Some(title) = args.title {
        task.title = title;
    }
    if let Some(starts) = &args.starts {
        task.started_at = parse_instant(starts)?;
    }
    if let Some(ends) = &args.ends {
        task.ended_at = parse_instant(ends)?;
    }
    if args.description.is_some() {
        task.description = args.description;
    }
    if args.budget.is_some() {
        task.budget = args.budget;
    }

    match planner.edit_task(task)? {
        PlanOutcome::Saved(task) => msg_success!(Message::TaskUpdated(task.title)),
        PlanOutcome::Invalid(errors) => report_validation(errors),
    }
    Ok(())
}

fn finish(id: i64) -> Result<()> {
    let task = Planner::new()?.finish_early(id)?;
    msg_success!(Message::TaskFinished(task.title));
    Ok(())
}

fn delete(ids: Vec<i64>) -> Result<()> {
    if ids.is_empty() {
        msg_warning!(Message::NoTaskIdsProvided);
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTasks(ids.len()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let deleted = Planner::new()?.delete_tasks(&ids)?;
    msg_success!(Message::TasksDeletedCount(deleted));
    Ok(())
}

fn list(args: ListArgs) -> Result<()> {
    let mut query = Query::new().order_by("started_at", Direction::Asc);
    if let Some(category_id) = args.category_id {
        query = query.filter("category_id", "=", category_id);
    }
    if args.limit.is_some() || args.offset > 0 {
        query = query.page(args.limit, args.offset);
    }

    let tasks = Planner::new()?.list_tasks(&query)?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }
    View::tasks(&tasks)
}

fn report_validation(errors: crate::libs::validate::ErrorMap) {
    msg_error!(Message::TaskRejected);
    for (field, error) in errors {
        msg_error!(Message::ValidationIssue(field.to_string(), error.to_string()));
    }
}

fn parse_instant(text: &str) -> Result<i64> {
    let naive = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M")?;
    let local = Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| anyhow::anyhow!("ambiguous local time: {}", text))?;
    Ok(local.timestamp_millis())
}

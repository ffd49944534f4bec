//! Core library modules for the plando planner.
//!
//! Everything above the database layer lives here: the task and taxonomy
//! entity types, the explicit validators, the key-value preference store,
//! the reminder scheduler with its notification provider boundary, and
//! the lifecycle orchestrator that wires them together.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use plando::libs::planner::Planner;
//! use plando::libs::task::Task;
//!
//! # fn demo() -> anyhow::Result<()> {
//! let mut planner = Planner::new()?;
//! let task = Task::new("Evening run", 1_700_000_000_000, 1_700_003_600_000, 1, 1);
//! planner.create_task(task)?;
//! # Ok(())
//! # }
//! ```

pub mod data_storage;
pub mod messages;
pub mod notifier;
pub mod planner;
pub mod prefs;
pub mod reminders;
pub mod task;
pub mod taxonomy;
pub mod validate;
pub mod view;

//! # Plando - personal task planner core
//!
//! The local persistence and reminder-scheduling subsystem of a personal
//! task/event planner: an embedded SQLite store behind one transactional
//! adapter, an idempotent schema bootstrap with a seeded category/activity
//! taxonomy, explicit entity validation, and lifecycle-bound reminder
//! notifications gated by user preferences.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, finish early and delete planner tasks
//! - **Dynamic Queries**: Structured filter/order/pagination specs rendered
//!   to parameterized SQL
//! - **Schema Bootstrap**: Idempotent table creation with first-run taxonomy
//!   seeding
//! - **Reminders**: Deterministic start/end reminders registered and
//!   cancelled alongside every task lifecycle event
//! - **Preferences**: JSON-backed key-value store gating notifications
//!
//! ## Usage
//!
//! ```rust,no_run
//! use plando::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

//! Database layer for the plando planner core.
//!
//! A complete persistence layer over embedded SQLite: connection
//! management with idempotent schema bootstrap, a typed query-fragment
//! builder, one canonical transactional storage adapter, and thin typed
//! handlers for the task table and the seeded taxonomy.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use plando::db::tasks::Tasks;
//! use plando::libs::task::Task;
//!
//! # fn demo() -> anyhow::Result<()> {
//! let mut tasks = Tasks::new()?;
//! let task = Task::new("Morning run", 1_700_000_000_000, 1_700_003_600_000, 1, 1);
//! let id = tasks.insert(&task)?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization.
pub mod db;

/// Typed storage error taxonomy.
pub mod error;

/// Condition/order/pagination spec and fragment rendering.
pub mod query;

/// Idempotent schema bootstrap and taxonomy seeding.
pub mod schema;

/// The canonical transactional storage adapter.
pub mod store;

/// Typed task table handler.
pub mod tasks;

/// Read-only taxonomy access.
pub mod taxonomy;

//! Idempotent schema bootstrap and first-run taxonomy seeding.
//!
//! `ensure_schema` runs on every connection open. It checks the three
//! tables independently against `sqlite_master`; whatever is missing is
//! created inside a single transaction, and the fixed taxonomy is seeded
//! when the `category`/`activity` pair had to be created. Existing tables
//! are never altered. A table that exists but no longer matches the
//! expected column set fails loudly with `StoreError::SchemaDrift`; there
//! is no migration path beyond the original shape.

use crate::db::error::StoreError;
use crate::libs::messages::Message;
use crate::libs::taxonomy;
use crate::msg_debug;
use rusqlite::{params, Connection, Transaction};

const SCHEMA_CATEGORY: &str = "CREATE TABLE IF NOT EXISTS category (
    id INTEGER NOT NULL PRIMARY KEY,
    title TEXT NOT NULL UNIQUE,
    avatar TEXT NOT NULL
)";
const SCHEMA_ACTIVITY: &str = "CREATE TABLE IF NOT EXISTS activity (
    id INTEGER NOT NULL PRIMARY KEY,
    title TEXT NOT NULL,
    category_id INTEGER NOT NULL,
    FOREIGN KEY (category_id) REFERENCES category(id)
)";
const SCHEMA_TASK: &str = "CREATE TABLE IF NOT EXISTS task (
    id INTEGER NOT NULL PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    budget INTEGER,
    route TEXT,
    is_route_following INTEGER NOT NULL DEFAULT 0,
    is_map_enabled INTEGER NOT NULL DEFAULT 0,
    start_latitude REAL,
    start_longitude REAL,
    end_latitude REAL,
    end_longitude REAL,
    created_at INTEGER NOT NULL,
    started_at INTEGER NOT NULL,
    ended_at INTEGER NOT NULL,
    category_id INTEGER NOT NULL,
    activity_id INTEGER NOT NULL,
    is_deleted INTEGER NOT NULL DEFAULT 0,
    FOREIGN KEY (category_id) REFERENCES category(id),
    FOREIGN KEY (activity_id) REFERENCES activity(id)
)";

const SELECT_TABLE: &str = "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1";
const INSERT_CATEGORY: &str = "INSERT OR IGNORE INTO category (title, avatar) VALUES (?1, ?2)";
const SELECT_CATEGORY_ID: &str = "SELECT id FROM category WHERE title = ?1";
const COUNT_CATEGORY_ACTIVITIES: &str = "SELECT COUNT(*) FROM activity WHERE category_id = ?1";
const INSERT_ACTIVITY: &str = "INSERT INTO activity (title, category_id) VALUES (?1, ?2)";

const CATEGORY_COLUMNS: &[&str] = &["id", "title", "avatar"];
const ACTIVITY_COLUMNS: &[&str] = &["id", "title", "category_id"];
const TASK_COLUMNS: &[&str] = &[
    "id",
    "title",
    "description",
    "budget",
    "route",
    "is_route_following",
    "is_map_enabled",
    "start_latitude",
    "start_longitude",
    "end_latitude",
    "end_longitude",
    "created_at",
    "started_at",
    "ended_at",
    "category_id",
    "activity_id",
    "is_deleted",
];

/// Checks whether a table exists, by name, in `sqlite_master`.
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool, StoreError> {
    let count: i64 = conn
        .query_row(SELECT_TABLE, params![table], |row| row.get(0))
        .map_err(|e| StoreError::query(table, "table_exists", e))?;
    Ok(count > 0)
}

/// Ensures the `category`, `activity` and `task` tables exist, seeding
/// the taxonomy on first creation. Safe to call on every process start;
/// a second call performs zero inserts.
pub fn ensure_schema(conn: &mut Connection) -> Result<(), StoreError> {
    let has_category = table_exists(conn, "category")?;
    let has_activity = table_exists(conn, "activity")?;
    let has_task = table_exists(conn, "task")?;

    if has_category {
        verify_shape(conn, "category", CATEGORY_COLUMNS)?;
    }
    if has_activity {
        verify_shape(conn, "activity", ACTIVITY_COLUMNS)?;
    }
    if has_task {
        verify_shape(conn, "task", TASK_COLUMNS)?;
    }

    if has_category && has_activity && has_task {
        msg_debug!(Message::SchemaUpToDate);
        return Ok(());
    }

    let tx = conn
        .transaction()
        .map_err(|e| StoreError::query("schema", "ensure_schema", e))?;

    if !has_category || !has_activity {
        tx.execute(SCHEMA_CATEGORY, [])
            .map_err(|e| StoreError::query("category", "create", e))?;
        tx.execute(SCHEMA_ACTIVITY, [])
            .map_err(|e| StoreError::query("activity", "create", e))?;
        let seeded = seed_taxonomy(&tx)?;
        msg_debug!(Message::TaxonomySeeded(seeded));
    }

    if !has_task {
        tx.execute(SCHEMA_TASK, [])
            .map_err(|e| StoreError::query("task", "create", e))?;
        msg_debug!(Message::SchemaTableCreated("task".to_string()));
    }

    tx.commit().map_err(|e| StoreError::query("schema", "ensure_schema", e))?;

    Ok(())
}

/// Bulk-inserts the fixed taxonomy. Categories insert with "ignore
/// duplicates" semantics keyed on the unique title; each category's
/// activities are written whenever that category currently has none, so
/// a re-created `activity` table is filled back in even though every
/// category row already exists. Re-seeding an intact taxonomy adds
/// nothing.
fn seed_taxonomy(tx: &Transaction) -> Result<usize, StoreError> {
    let mut seeded = 0;
    for (title, avatar, activities) in taxonomy::SEED {
        seeded += tx
            .execute(INSERT_CATEGORY, params![title, avatar])
            .map_err(|e| StoreError::query("category", "seed", e))?;
        let category_id: i64 = tx
            .query_row(SELECT_CATEGORY_ID, params![title], |row| row.get(0))
            .map_err(|e| StoreError::query("category", "seed", e))?;
        let existing: i64 = tx
            .query_row(COUNT_CATEGORY_ACTIVITIES, params![category_id], |row| row.get(0))
            .map_err(|e| StoreError::query("activity", "seed", e))?;
        if existing > 0 {
            continue;
        }
        for activity in *activities {
            seeded += tx
                .execute(INSERT_ACTIVITY, params![activity, category_id])
                .map_err(|e| StoreError::query("activity", "seed", e))?;
        }
    }
    Ok(seeded)
}

fn verify_shape(conn: &Connection, table: &str, expected: &[&str]) -> Result<(), StoreError> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({})", table))
        .map_err(|e| StoreError::query(table, "verify_shape", e))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(|e| StoreError::query(table, "verify_shape", e))?
        .collect::<Result<Vec<String>, _>>()
        .map_err(|e| StoreError::query(table, "verify_shape", e))?;

    if columns != expected {
        return Err(StoreError::SchemaDrift {
            table: table.to_string(),
            expected: expected.join(", "),
        });
    }
    Ok(())
}

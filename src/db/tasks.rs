//! Typed task table handler over the generic storage adapter.
//!
//! Maps [`Task`] to and from the adapter's ordered [`Record`]s. This is
//! the caller-facing data contract for task rows; the UI layer renders
//! whatever comes back from here.

use crate::db::db::Db;
use crate::db::error::StoreError;
use crate::db::query::Query;
use crate::db::store::{record_field, Record, Store};
use crate::libs::task::Task;
use anyhow::Result;
use rusqlite::types::Value;

pub const TASK_TABLE: &str = "task";

pub struct Tasks {
    store: Store,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { store: Store::open(db.conn) })
    }

    pub fn insert(&mut self, task: &Task) -> Result<i64, StoreError> {
        self.store.insert(TASK_TABLE, &to_record(task, false))
    }

    /// Rewrites the supplied fields of an existing row. The task must
    /// carry its id; rows are mutated in place, never re-inserted.
    pub fn update(&mut self, task: &Task) -> Result<(), StoreError> {
        self.store.update(TASK_TABLE, &to_record(task, true))
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>, StoreError> {
        let records = self.store.select(TASK_TABLE, &Query::new().filter("id", "=", id))?;
        Ok(records.first().map(from_record))
    }

    pub fn fetch(&mut self, query: &Query) -> Result<Vec<Task>, StoreError> {
        let records = self.store.select(TASK_TABLE, query)?;
        Ok(records.iter().map(from_record).collect())
    }

    pub fn delete_many(&mut self, ids: &[i64]) -> Result<(), StoreError> {
        self.store.delete_by_ids(TASK_TABLE, ids)
    }
}

fn to_record(task: &Task, with_id: bool) -> Record {
    let mut record = Record::new();
    if with_id {
        record.push(("id".into(), opt_i64(task.id)));
    }
    record.push(("title".into(), Value::Text(task.title.clone())));
    record.push(("description".into(), opt_text(&task.description)));
    record.push(("budget".into(), opt_i64(task.budget)));
    record.push(("route".into(), opt_text(&task.route)));
    record.push(("is_route_following".into(), Value::Integer(task.is_route_following as i64)));
    record.push(("is_map_enabled".into(), Value::Integer(task.is_map_enabled as i64)));
    record.push(("start_latitude".into(), opt_f64(task.start_latitude)));
    record.push(("start_longitude".into(), opt_f64(task.start_longitude)));
    record.push(("end_latitude".into(), opt_f64(task.end_latitude)));
    record.push(("end_longitude".into(), opt_f64(task.end_longitude)));
    record.push(("created_at".into(), Value::Integer(task.created_at)));
    record.push(("started_at".into(), Value::Integer(task.started_at)));
    record.push(("ended_at".into(), Value::Integer(task.ended_at)));
    record.push(("category_id".into(), opt_i64(task.category_id)));
    record.push(("activity_id".into(), opt_i64(task.activity_id)));
    record.push(("is_deleted".into(), Value::Integer(task.is_deleted as i64)));
    record
}

fn from_record(record: &Record) -> Task {
    Task {
        id: get_i64(record, "id"),
        title: get_text(record, "title").unwrap_or_default(),
        description: get_text(record, "description"),
        budget: get_i64(record, "budget"),
        route: get_text(record, "route"),
        is_route_following: get_i64(record, "is_route_following").unwrap_or(0) != 0,
        is_map_enabled: get_i64(record, "is_map_enabled").unwrap_or(0) != 0,
        start_latitude: get_f64(record, "start_latitude"),
        start_longitude: get_f64(record, "start_longitude"),
        end_latitude: get_f64(record, "end_latitude"),
        end_longitude: get_f64(record, "end_longitude"),
        created_at: get_i64(record, "created_at").unwrap_or(0),
        started_at: get_i64(record, "started_at").unwrap_or(0),
        ended_at: get_i64(record, "ended_at").unwrap_or(0),
        category_id: get_i64(record, "category_id"),
        activity_id: get_i64(record, "activity_id"),
        is_deleted: get_i64(record, "is_deleted").unwrap_or(0) != 0,
    }
}

fn opt_i64(value: Option<i64>) -> Value {
    value.map(Value::Integer).unwrap_or(Value::Null)
}

fn opt_f64(value: Option<f64>) -> Value {
    value.map(Value::Real).unwrap_or(Value::Null)
}

fn opt_text(value: &Option<String>) -> Value {
    value.as_ref().map(|text| Value::Text(text.clone())).unwrap_or(Value::Null)
}

pub(crate) fn get_i64(record: &Record, name: &str) -> Option<i64> {
    match record_field(record, name) {
        Some(Value::Integer(value)) => Some(*value),
        _ => None,
    }
}

pub(crate) fn get_f64(record: &Record, name: &str) -> Option<f64> {
    match record_field(record, name) {
        Some(Value::Real(value)) => Some(*value),
        Some(Value::Integer(value)) => Some(*value as f64),
        _ => None,
    }
}

pub(crate) fn get_text(record: &Record, name: &str) -> Option<String> {
    match record_field(record, name) {
        Some(Value::Text(value)) => Some(value.clone()),
        _ => None,
    }
}

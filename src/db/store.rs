//! The canonical transactional storage adapter.
//!
//! One adapter type owns the table-mutation boundary: every public
//! operation runs inside exactly one SQLite transaction, committed on
//! success and rolled back when the transaction guard drops on any error
//! path. No operation here spans two adapter calls.
//!
//! Rows cross this boundary as [`Record`]s, ordered field maps whose
//! insertion order dictates column order in generated statements. Row
//! values are always bound as positional parameters; table names come
//! from application code and are interpolated, which is the same
//! documented boundary the query builder draws for fields and
//! comparators.
//!
//! The existence precondition ("operate only on an existing table") is a
//! separate read inside the same transaction. It is not atomic against a
//! concurrent schema drop from another process; with a single application
//! instance that race is accepted and left alone.

use crate::db::db::Db;
use crate::db::error::StoreError;
use crate::db::query::Query;
use crate::db::schema;
use anyhow::Result;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};

/// An ordered field map: insertion order = column order.
pub type Record = Vec<(String, Value)>;

/// Looks up a field in a record by name.
pub fn record_field<'a>(record: &'a Record, name: &str) -> Option<&'a Value> {
    record.iter().find(|(field, _)| field == name).map(|(_, value)| value)
}

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Wraps an already-open connection; used by the typed table handlers.
    pub fn open(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn table_exists(&mut self, table: &str) -> Result<bool, StoreError> {
        schema::table_exists(&self.conn, table)
    }

    /// Runs `SELECT *` against `table` with the rendered query fragment.
    ///
    /// Fails with [`StoreError::MissingTable`] before touching the table;
    /// callers must treat that as a distinct error kind from a rejected
    /// statement.
    pub fn select(&mut self, table: &str, query: &Query) -> Result<Vec<Record>, StoreError> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| StoreError::query(table, "select", e))?;

        if !schema::table_exists(&tx, table)? {
            return Err(StoreError::MissingTable { table: table.to_string() });
        }

        let (fragment, params) = query.render();
        let sql = format!("SELECT * FROM {}{}", table, fragment);

        let records = {
            let mut stmt = tx.prepare(&sql).map_err(|e| StoreError::query(table, "select", e))?;
            let columns: Vec<String> = stmt.column_names().iter().map(|name| name.to_string()).collect();
            let mut rows = stmt
                .query(params_from_iter(params.iter()))
                .map_err(|e| StoreError::query(table, "select", e))?;

            let mut records = Vec::new();
            while let Some(row) = rows.next().map_err(|e| StoreError::query(table, "select", e))? {
                let mut record = Record::with_capacity(columns.len());
                for (i, column) in columns.iter().enumerate() {
                    let value: Value = row.get(i).map_err(|e| StoreError::query(table, "select", e))?;
                    record.push((column.clone(), value));
                }
                records.push(record);
            }
            records
        };

        tx.commit().map_err(|e| StoreError::query(table, "select", e))?;
        Ok(records)
    }

    /// Inserts one record and returns the generated row id. Column order
    /// is the record's own field order; values are bound as parameters.
    pub fn insert(&mut self, table: &str, record: &Record) -> Result<i64, StoreError> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| StoreError::query(table, "insert", e))?;

        if !schema::table_exists(&tx, table)? {
            return Err(StoreError::MissingTable { table: table.to_string() });
        }

        let columns: Vec<&str> = record.iter().map(|(field, _)| field.as_str()).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            columns.join(", "),
            vec!["?"; columns.len()].join(", ")
        );
        tx.execute(&sql, params_from_iter(record.iter().map(|(_, value)| value)))
            .map_err(|e| StoreError::query(table, "insert", e))?;
        let id = tx.last_insert_rowid();

        tx.commit().map_err(|e| StoreError::query(table, "insert", e))?;
        Ok(id)
    }

    /// Partial update: only the supplied fields are touched. The `id`
    /// field is excluded from the SET clause and used only in WHERE. A
    /// record with nothing to set is rejected before any SQL is built.
    pub fn update(&mut self, table: &str, record: &Record) -> Result<(), StoreError> {
        let id = record_field(record, "id")
            .cloned()
            .ok_or_else(|| StoreError::MissingId { table: table.to_string() })?;
        if !record.iter().any(|(field, _)| field != "id") {
            return Err(StoreError::NoFieldsToSet { table: table.to_string() });
        }

        let tx = self
            .conn
            .transaction()
            .map_err(|e| StoreError::query(table, "update", e))?;

        if !schema::table_exists(&tx, table)? {
            return Err(StoreError::MissingTable { table: table.to_string() });
        }

        let fields: Vec<&(String, Value)> = record.iter().filter(|(field, _)| field != "id").collect();
        let sets: Vec<String> = fields.iter().map(|(field, _)| format!("{} = ?", field)).collect();
        let sql = format!("UPDATE {} SET {} WHERE id = ?", table, sets.join(", "));

        let params: Vec<&Value> = fields.iter().map(|(_, value)| value).chain(std::iter::once(&id)).collect();
        tx.execute(&sql, params_from_iter(params))
            .map_err(|e| StoreError::query(table, "update", e))?;

        tx.commit().map_err(|e| StoreError::query(table, "update", e))?;
        Ok(())
    }

    /// Deletes all rows whose id appears in `ids`, in one statement.
    /// Scalar callers pass a one-element slice; an empty slice is a no-op.
    pub fn delete_by_ids(&mut self, table: &str, ids: &[i64]) -> Result<(), StoreError> {
        if ids.is_empty() {
            return Ok(());
        }

        let tx = self
            .conn
            .transaction()
            .map_err(|e| StoreError::query(table, "delete", e))?;

        if !schema::table_exists(&tx, table)? {
            return Err(StoreError::MissingTable { table: table.to_string() });
        }

        let sql = format!("DELETE FROM {} WHERE id IN ({})", table, vec!["?"; ids.len()].join(", "));
        tx.execute(&sql, params_from_iter(ids.iter()))
            .map_err(|e| StoreError::query(table, "delete", e))?;

        tx.commit().map_err(|e| StoreError::query(table, "delete", e))?;
        Ok(())
    }

    pub fn list_table_names(&mut self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
            .map_err(|e| StoreError::query("sqlite_master", "list_table_names", e))?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| StoreError::query("sqlite_master", "list_table_names", e))?
            .collect::<Result<Vec<String>, _>>()
            .map_err(|e| StoreError::query("sqlite_master", "list_table_names", e))?;
        Ok(names)
    }
}

//! Typed error taxonomy for the storage layer.
//!
//! The data layer fails loudly: every error names the table and the
//! operation so the caller can tell a missing table apart from a statement
//! the engine rejected. Validation problems are not errors at this level,
//! they are returned as data by the validators. Reminder failures never
//! reach this taxonomy at all; the scheduler logs and swallows them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The named table does not exist. Distinct from a query failure so
    /// callers can react to "schema not bootstrapped" specifically.
    #[error("table '{table}' does not exist")]
    MissingTable { table: String },

    /// An existing table does not match the expected column set. The schema
    /// is never altered in place; drift has to surface, not be papered over.
    #[error("table '{table}' has unexpected shape (expected columns: {expected})")]
    SchemaDrift { table: String, expected: String },

    /// An update record arrived without an `id` field. The id is the only
    /// way to address the row; nothing is written.
    #[error("update on table '{table}' requires an 'id' field")]
    MissingId { table: String },

    /// An update record carried nothing beyond `id`, which would render
    /// an empty SET clause. Rejected here instead of surfacing as an
    /// engine syntax error.
    #[error("update on table '{table}' has no fields to set")]
    NoFieldsToSet { table: String },

    /// The engine rejected a statement.
    #[error("{operation} on table '{table}' failed: {source}")]
    Query {
        table: String,
        operation: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

impl StoreError {
    pub fn query(table: &str, operation: &'static str, source: rusqlite::Error) -> Self {
        StoreError::Query {
            table: table.to_string(),
            operation,
            source,
        }
    }
}

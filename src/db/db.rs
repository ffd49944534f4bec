use crate::db::schema;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "plando.db";

/// Owns the SQLite connection and guarantees the schema is bootstrapped
/// before anyone can touch it.
#[derive(Debug)]
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let mut conn = Connection::open(db_file_path)?;
        schema::ensure_schema(&mut conn)?;

        Ok(Db { conn })
    }
}

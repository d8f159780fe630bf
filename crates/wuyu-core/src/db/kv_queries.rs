//! Key/value reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    persistence::Persistence,
};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv_store WHERE key = ?1";

impl super::Database {
    /// Reads the raw value stored under `key`.
    pub fn get_value(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read value")
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub fn put_value(&self, key: &str, value: &[u8]) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value, now])
            .db_context("Failed to write value")?;
        Ok(())
    }

    /// Removes `key`. Returns whether a row was deleted.
    pub fn delete_value(&self, key: &str) -> Result<bool> {
        let affected = self
            .connection
            .execute(DELETE_VALUE_SQL, params![key])
            .db_context("Failed to delete value")?;
        Ok(affected > 0)
    }
}

impl Persistence for super::Database {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.get_value(key)
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<()> {
        self.put_value(key, bytes)
    }
}

//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Files written before timestamps were tracked lack updated_at
        let has_updated_at_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('kv_store') WHERE name = 'updated_at'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_updated_at_column {
            self.connection
                .execute(
                    "ALTER TABLE kv_store ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
                    [],
                )
                .db_context("Failed to add updated_at column to kv_store table")?;
        }

        Ok(())
    }
}

use std::path::Path;

use tempfile::TempDir;
use wuyu_core::{Store, StoreBuilder};

/// Opens a seeded store backed by the SQLite file at `db_path`.
pub fn open_store(db_path: &Path) -> Store {
    StoreBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .expect("Failed to create store")
}

/// Creates a store backed by a fresh SQLite file in a temporary directory.
pub fn create_test_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir.path().join("test.db"));
    (temp_dir, store)
}

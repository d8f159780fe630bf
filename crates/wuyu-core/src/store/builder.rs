//! Builder for creating and configuring Store instances.

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{seed, Store};
use crate::{
    db::Database,
    error::{Result, WuyuError},
    persistence::{MemoryPersistence, Persistence},
};

/// Semester that receives plan writes when none is configured.
pub const DEFAULT_SEMESTER: &str = "2024-2025-2";

/// Builder for creating and configuring Store instances.
pub struct StoreBuilder {
    database_path: Option<PathBuf>,
    persistence: Option<Box<dyn Persistence>>,
    seed_data: bool,
    current_semester: Option<String>,
}

impl StoreBuilder {
    /// Creates a new builder with default settings: SQLite persistence at the
    /// XDG data path, demo data seeded, [`DEFAULT_SEMESTER`] as the current
    /// semester.
    pub fn new() -> Self {
        Self {
            database_path: None,
            persistence: None,
            seed_data: true,
            current_semester: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/wuyu/wuyu.db` or `~/.local/share/wuyu/wuyu.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given persistence instead of a database file.
    pub fn with_persistence(mut self, persistence: impl Persistence + 'static) -> Self {
        self.persistence = Some(Box::new(persistence));
        self
    }

    /// Keeps persisted data in process only.
    pub fn in_memory(self) -> Self {
        self.with_persistence(MemoryPersistence::new())
    }

    /// Whether to load the demo activities, plans and system templates.
    pub fn with_seed_data(mut self, seed_data: bool) -> Self {
        self.seed_data = seed_data;
        self
    }

    pub fn with_current_semester(mut self, semester: Option<impl Into<String>>) -> Self {
        if let Some(semester) = semester {
            self.current_semester = Some(semester.into());
        }
        self
    }

    /// Builds the configured store.
    ///
    /// # Errors
    ///
    /// Returns `WuyuError::FileSystem` if the database directory cannot be
    /// created, `WuyuError::XdgDirectory` if no default location can be
    /// determined, and `WuyuError::Database` if the database cannot be opened.
    pub fn build(self) -> Result<Store> {
        let persistence = match self.persistence {
            Some(persistence) => persistence,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };

                if let Some(parent) = db_path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| WuyuError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }

                debug!("Opening template database at {}", db_path.display());
                Box::new(Database::new(&db_path)?) as Box<dyn Persistence>
            }
        };

        let semester = self
            .current_semester
            .unwrap_or_else(|| DEFAULT_SEMESTER.to_string());
        let mut store = Store::new(persistence, semester);

        if self.seed_data {
            store.activities = seed::activities();
            store.plans = seed::plans();
            store.system_templates = seed::system_templates();
            info!(
                "Seeded {} activities, {} semesters, {} system templates",
                store.activities.len(),
                store.plans.len(),
                store.system_templates.len()
            );
        }

        Ok(store)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wuyu")
            .place_data_file("wuyu.db")
            .map_err(|e| WuyuError::XdgDirectory(e.to_string()))
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

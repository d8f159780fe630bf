//! Error types for the activity management library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type shared by the persistence layer and the authoring wizard.
///
/// The [`crate::store::Store`] surface itself keeps a falsy-return contract
/// (`false` / `None`) for expected conditions; this enum is what the layers
/// around it use to describe *why* something failed.
#[derive(Error, Debug)]
pub enum WuyuError {
    /// Activity not found for the given ID
    #[error("Activity with ID {id} not found")]
    ActivityNotFound { id: String },
    /// Template not found for the given ID
    #[error("Template with ID {id} not found")]
    TemplateNotFound { id: String },
    /// Process step not found in the owning list
    #[error("Step with ID {id} not found")]
    StepNotFound { id: String },
    /// Required field missing or malformed
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Key/value persistence failed
    #[error("Persistence error for key '{key}': {message}")]
    Persistence { key: String, message: String },
    /// SQLite errors from the persistence back-end
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// A submission is already in flight
    #[error("A submission is already in progress")]
    SubmitInProgress,
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> WuyuError {
        WuyuError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WuyuError {
        WuyuError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WuyuError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a persistence error for the given key.
    pub fn persistence(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Persistence {
            key: key.into(),
            message: message.into(),
        }
    }

    /// True for the user-facing validation class of failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WuyuError::database(message).with_source(e))
    }
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, WuyuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = WuyuError::invalid_input("title").with_reason("must not be empty");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'title': must not be empty"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to read value").unwrap_err();
        assert!(matches!(err, WuyuError::Database { .. }));
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Database error: Failed to read value");
    }
}

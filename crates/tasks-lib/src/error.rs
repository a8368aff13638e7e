//! Error types for `tasks-lib`.

use thiserror::Error;

/// Primary error type for task store operations.
#[derive(Error, Debug)]
pub enum TaskError {
    // === Storage Errors ===
    /// The persisted snapshot could not be read or parsed.
    #[error("Failed to load tasks from '{key}': {reason}")]
    StorageRead { key: String, reason: String },

    /// The snapshot could not be written back.
    #[error("Failed to save tasks to '{key}': {reason}")]
    StorageWrite { key: String, reason: String },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    // === Lifecycle Errors ===
    /// A mutation was attempted before the store finished loading.
    #[error("Task store is not loaded yet")]
    NotReady,

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaskError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn storage_read(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::StorageRead {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    #[must_use]
    pub fn storage_write(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::StorageWrite {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error came from the persistence collaborator.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::StorageRead { .. } | Self::StorageWrite { .. } | Self::Io(_) | Self::Json(_)
        )
    }
}

/// Result type using `TaskError`.
pub type Result<T> = std::result::Result<T, TaskError>;

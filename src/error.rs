//! Error types for the `tk` command-line host.

use std::path::PathBuf;
use thiserror::Error;

use tasks_lib::TaskError;

/// Errors raised by CLI commands.
#[derive(Error, Debug)]
pub enum AppError {
    // === Workspace Errors ===
    /// No workspace directory exists yet.
    #[error("Not initialized: run 'tk init' first")]
    NotInitialized,

    /// `init` found an existing workspace.
    #[error("Already initialized at {path} (use --force to overwrite)")]
    AlreadyInitialized { path: PathBuf },

    // === Configuration Errors ===
    /// Configuration file could not be parsed or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    // === Store Errors ===
    /// Error surfaced by the task store.
    #[error(transparent)]
    Task(#[from] TaskError),

    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

//! Command implementations.
//!
//! Every command that touches tasks opens a [`Session`]: the store is loaded
//! from the workspace, the command runs one operation, and
//! [`Session::finish`] flushes the pending write. Whatever the store
//! reported is printed when the session is dropped, on error paths too.

pub mod add;
pub mod delete;
pub mod init;
pub mod list;
pub mod progress;
pub mod toggle;
pub mod version;

use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

use tasks_lib::{FileBackend, RecordingReporter, TaskStore};

use crate::config::{CliOverrides, Config};
use crate::error::{AppError, Result};

/// Resolved settings shared by all commands.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub dir: PathBuf,
    pub config: Config,
    pub json: bool,
}

impl CommandContext {
    /// Resolve the workspace directory and its configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but is invalid.
    pub fn resolve(overrides: &CliOverrides, json: bool) -> Result<Self> {
        let dir = overrides.workspace_dir();
        let config = Config::load(&dir)?.with_overrides(overrides);
        Ok(Self { dir, config, json })
    }

    /// Load the store from the workspace.
    ///
    /// An unreadable snapshot is copied aside before the store continues
    /// with an empty list, so a later save cannot destroy it.
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` if the workspace directory does not exist.
    pub fn open_session(&self) -> Result<Session> {
        if !self.dir.is_dir() {
            return Err(AppError::NotInitialized);
        }

        let reporter = RecordingReporter::new();
        let backend = FileBackend::new(&self.dir);
        let snapshot_path = backend.path_for(&self.config.storage_key)?;

        let mut store = TaskStore::new(backend, reporter.clone())
            .with_options(self.config.store_options());

        if let Err(err) = store.load() {
            tracing::warn!("{err}");
            preserve_unreadable(&snapshot_path);
        }

        Ok(Session { store, reporter })
    }
}

/// A loaded store plus the messages it reports.
#[derive(Debug)]
pub struct Session {
    pub store: TaskStore,
    reporter: RecordingReporter,
}

impl Session {
    /// Persist pending changes.
    pub fn finish(mut self) {
        self.store.flush();
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        for message in self.reporter.drain() {
            eprintln!("warning: {message}");
        }
    }
}

fn preserve_unreadable(path: &Path) {
    let Ok(contents) = fs::read(path) else {
        return;
    };
    if has_identical_backup(path, &contents) {
        tracing::debug!("Unreadable snapshot {} already backed up", path.display());
        return;
    }
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    let backup = path.with_extension(format!("json.unreadable.{timestamp}"));
    match fs::copy(path, &backup) {
        Ok(_) => tracing::info!("Saved unreadable snapshot to {}", backup.display()),
        Err(e) => tracing::warn!("Could not back up {}: {e}", path.display()),
    }
}

fn has_identical_backup(path: &Path, contents: &[u8]) -> bool {
    let (Some(dir), Some(name)) = (path.parent(), path.file_name()) else {
        return false;
    };
    let prefix = format!("{}.unreadable.", name.to_string_lossy());
    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };
    entries
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_name().to_string_lossy().starts_with(&prefix))
        .any(|e| fs::read(e.path()).is_ok_and(|backup| backup == contents))
}

//! Key-value persistence backends.
//!
//! The store only needs two operations: read the whole value under a key,
//! and overwrite it wholesale. [`MemoryBackend`] keeps values in a shared map
//! and [`FileBackend`] keeps one file per key on disk.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{Result, TaskError};

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if nothing was ever stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// ============================================================================
// In-memory
// ============================================================================

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    fail_writes: bool,
    fail_reads: bool,
    writes: usize,
}

/// Shared in-memory backend. Clones observe the same values.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with one value.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let backend = Self::new();
        backend
            .inner
            .borrow_mut()
            .values
            .insert(key.to_string(), value.to_string());
        backend
    }

    /// Make every subsequent `set` fail, as a full quota would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Make every subsequent `get` fail, as disabled storage would.
    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.inner.borrow().writes
    }

    /// Current raw value, bypassing failure injection.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.borrow().values.get(key).cloned()
    }
}

impl KeyValueStore for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let inner = self.inner.borrow();
        if inner.fail_reads {
            return Err(TaskError::storage_read(key, "storage is unavailable"));
        }
        Ok(inner.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(TaskError::storage_write(key, "storage quota exceeded"));
        }
        inner.values.insert(key.to_string(), value.to_string());
        inner.writes += 1;
        Ok(())
    }
}

// ============================================================================
// File system
// ============================================================================

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the key is empty or not a plain file stem.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key == "."
            || key == ".."
            || key.contains(['/', '\\', '\0'])
        {
            return Err(TaskError::validation(
                "key",
                format!("'{key}' is not a valid storage key"),
            ));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TaskError::Io(e)),
        }
    }

    /// Writes to a temp file and renames it into place.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(value.as_bytes())?;
        file.flush()?;
        drop(file);

        fs::rename(&tmp_path, &path)?;
        tracing::debug!("Wrote {} bytes to {}", value.len(), path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_shared_between_clones() {
        let backend = MemoryBackend::new();
        let mut writer = backend.clone();
        writer.set("tasks", "[]").unwrap();
        assert_eq!(backend.get("tasks").unwrap().as_deref(), Some("[]"));
        assert_eq!(backend.write_count(), 1);
    }

    #[test]
    fn test_memory_failure_injection() {
        let mut backend = MemoryBackend::with_value("tasks", "[]");
        backend.set_fail_writes(true);
        assert!(matches!(
            backend.set("tasks", "x"),
            Err(TaskError::StorageWrite { .. })
        ));
        assert_eq!(backend.peek("tasks").as_deref(), Some("[]"));

        backend.set_fail_reads(true);
        assert!(backend.get("tasks").is_err());
    }

    #[test]
    fn test_file_missing_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        assert!(backend.get("tasks").unwrap().is_none());
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path());
        backend.set("tasks", r#"[{"id":1}]"#).unwrap();
        backend.set("tasks", "[]").unwrap();

        assert_eq!(backend.get("tasks").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("tasks.json").exists());
        assert!(!dir.path().join("tasks.json.tmp").exists());
    }

    #[test]
    fn test_file_write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("nope"));
        assert!(matches!(backend.set("tasks", "[]"), Err(TaskError::Io(_))));
    }

    #[test]
    fn test_file_rejects_path_keys() {
        let backend = FileBackend::new("/tmp");
        for key in ["", "..", "a/b", "a\\b"] {
            assert!(backend.path_for(key).is_err(), "key {key:?} accepted");
        }
        assert!(backend.path_for("tasks").is_ok());
    }
}

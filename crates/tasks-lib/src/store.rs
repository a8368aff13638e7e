//! In-memory task store with debounced snapshot persistence.
//!
//! The store owns the ordered task list and is the only writer of the
//! persisted snapshot. Mutations apply immediately in memory and arm a
//! single pending write; the host calls [`TaskStore::poll_write`] from its
//! event loop (or [`TaskStore::flush`] on shutdown) to let it fire.

use std::time::Duration;

use crate::backend::KeyValueStore;
use crate::clock::{Clock, SystemClock};
use crate::error::{Result, TaskError};
use crate::model::{StoreState, Task, TaskId};
use crate::query::{FilterKind, Progress};
use crate::report::{ErrorReporter, STORAGE_MESSAGE};
use crate::schedule::{DEFAULT_DEBOUNCE, WriteScheduler};
use crate::snapshot;
use crate::util::{IdAllocator, normalize_text};

/// Default storage key for the snapshot.
pub const DEFAULT_KEY: &str = "tasks";

/// Tunables for a [`TaskStore`].
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Storage key the snapshot lives under.
    pub key: String,
    /// Quiet period before a pending write fires.
    pub debounce: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// Task list store.
pub struct TaskStore {
    tasks: Vec<Task>,
    state: StoreState,
    ids: IdAllocator,
    writes: WriteScheduler,
    key: String,
    backend: Box<dyn KeyValueStore>,
    reporter: Box<dyn ErrorReporter>,
    clock: Box<dyn Clock>,
}

impl TaskStore {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Create an unloaded store over `backend` with default options and the
    /// system clock. Call [`load`](Self::load) before mutating.
    #[must_use]
    pub fn new(
        backend: impl KeyValueStore + 'static,
        reporter: impl ErrorReporter + 'static,
    ) -> Self {
        let options = StoreOptions::default();
        Self {
            tasks: Vec::new(),
            state: StoreState::Uninitialized,
            ids: IdAllocator::new(),
            writes: WriteScheduler::new(options.debounce),
            key: options.key,
            backend: Box::new(backend),
            reporter: Box::new(reporter),
            clock: Box::new(SystemClock),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.key = options.key;
        self.writes = WriteScheduler::new(options.debounce);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Rehydrate from the persisted snapshot.
    ///
    /// A missing snapshot loads as an empty list. Loading again replaces the
    /// in-memory list and drops any pending write.
    ///
    /// # Errors
    ///
    /// Returns `StorageRead` if the snapshot cannot be read or parsed. The
    /// store is still usable afterwards: it is reset to an empty list, the
    /// failure has been reported, and the state is `Recovered`.
    pub fn load(&mut self) -> Result<Vec<Task>> {
        self.state = StoreState::Loading;
        self.writes.cancel();

        match self.read_snapshot() {
            Ok(tasks) => {
                let seeded = IdAllocator::after(&tasks);
                if seeded.last() > self.ids.last() {
                    self.ids = seeded;
                }
                self.tasks = tasks;
                self.state = StoreState::Ready;
                tracing::debug!("Loaded {} task(s) from '{}'", self.tasks.len(), self.key);
                Ok(self.tasks.clone())
            }
            Err(err) => {
                tracing::warn!("Resetting to an empty task list: {err}");
                self.tasks.clear();
                self.state = StoreState::Recovered;
                self.reporter.report(STORAGE_MESSAGE);
                Err(err)
            }
        }
    }

    #[must_use]
    pub const fn state(&self) -> StoreState {
        self.state
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Append a new task.
    ///
    /// The text is trimmed before it is stored.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the text is blank or too long or no id is
    /// left to allocate, or `NotReady` if the store has not been loaded. Either way the failure is reported
    /// and nothing changes.
    pub fn add(&mut self, text: &str) -> Result<Task> {
        self.ensure_ready("Failed to add task. Please try again.")?;

        let text = normalize_text(text).inspect_err(|err| {
            self.reporter.report(&err.to_string());
        })?;

        let id = self
            .ids
            .allocate(self.clock.now_millis())
            .inspect_err(|err| self.reporter.report(&err.to_string()))?;
        let task = Task::new(id, text);
        self.tasks.push(task.clone());
        tracing::debug!("Added task {id}");

        self.mark_dirty();
        Ok(task)
    }

    /// Remove the task with `id`.
    ///
    /// Returns `Ok(false)` without scheduling a write if no task matches.
    ///
    /// # Errors
    ///
    /// Returns `NotReady` if the store has not been loaded.
    pub fn delete(&mut self, id: TaskId) -> Result<bool> {
        self.ensure_ready("Failed to delete task. Please try again.")?;

        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            tracing::debug!("Delete ignored, no task {id}");
            return Ok(false);
        }

        tracing::debug!("Deleted task {id}");
        self.mark_dirty();
        Ok(true)
    }

    /// Flip completion of the task with `id`.
    ///
    /// Returns `Ok(false)` without scheduling a write if no task matches.
    ///
    /// # Errors
    ///
    /// Returns `NotReady` if the store has not been loaded.
    pub fn toggle(&mut self, id: TaskId) -> Result<bool> {
        self.ensure_ready("Failed to update task. Please try again.")?;

        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            tracing::debug!("Toggle ignored, no task {id}");
            return Ok(false);
        };
        task.completed = !task.completed;
        tracing::debug!("Task {id} is now {}", task.status_str());

        self.mark_dirty();
        Ok(true)
    }

    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Copy of the tasks selected by `kind`, in insertion order.
    #[must_use]
    pub fn filter(&self, kind: FilterKind) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| kind.matches(t))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::from_tasks(&self.tasks)
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    #[must_use]
    pub const fn has_pending_write(&self) -> bool {
        self.writes.is_pending()
    }

    /// Clock time (ms) at which the pending write becomes due.
    #[must_use]
    pub const fn next_write_due(&self) -> Option<u64> {
        self.writes.due_at()
    }

    /// Fire the pending write if its quiet period has elapsed.
    ///
    /// Returns `true` if a write was attempted. Write failures are reported,
    /// not returned.
    pub fn poll_write(&mut self) -> bool {
        if self.writes.take_if_due(self.clock.now_millis()) {
            self.write_snapshot();
            true
        } else {
            false
        }
    }

    /// Fire the pending write now, ignoring the debounce deadline.
    ///
    /// Returns `true` if a write was attempted.
    pub fn flush(&mut self) -> bool {
        if self.writes.take() {
            self.write_snapshot();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn ensure_ready(&self, message: &str) -> Result<()> {
        if self.state.is_ready() {
            Ok(())
        } else {
            tracing::warn!("Rejected mutation in state {:?}", self.state);
            self.reporter.report(message);
            Err(TaskError::NotReady)
        }
    }

    fn mark_dirty(&mut self) {
        self.writes.schedule(self.clock.now_millis());
    }

    fn read_snapshot(&self) -> Result<Vec<Task>> {
        let raw = self
            .backend
            .get(&self.key)
            .map_err(|e| self.read_error(e))?;

        match raw {
            Some(text) => snapshot::decode(&text).map_err(|e| self.read_error(e)),
            None => Ok(Vec::new()),
        }
    }

    fn write_snapshot(&mut self) {
        let result = snapshot::encode(&self.tasks)
            .and_then(|text| self.backend.set(&self.key, &text));

        match result {
            Ok(()) => {
                tracing::debug!("Saved {} task(s) to '{}'", self.tasks.len(), self.key);
            }
            Err(err) => {
                let err = match err {
                    e @ TaskError::StorageWrite { .. } => e,
                    other => TaskError::storage_write(&self.key, other),
                };
                tracing::warn!("{err}");
                self.reporter.report(STORAGE_MESSAGE);
            }
        }
    }

    fn read_error(&self, err: TaskError) -> TaskError {
        match err {
            e @ TaskError::StorageRead { .. } => e,
            other => TaskError::storage_read(&self.key, other),
        }
    }
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("key", &self.key)
            .field("state", &self.state)
            .field("tasks", &self.tasks)
            .field("writes", &self.writes)
            .finish_non_exhaustive()
    }
}

//! `tasks-lib` — In-process task list store.
//!
//! Keeps an ordered list of short text tasks in memory and persists it as a
//! single JSON snapshot in a key-value backend. Writes are debounced: a burst
//! of mutations results in one write of the final state.
//!
//! # Quick Start
//!
//! ```no_run
//! use tasks_lib::{FileBackend, FilterKind, TaskStore, TracingReporter};
//!
//! let mut store = TaskStore::new(FileBackend::new(".tasks"), TracingReporter);
//! let _ = store.load();
//!
//! let task = store.add("Buy milk").unwrap();
//! store.toggle(task.id).unwrap();
//!
//! for task in store.filter(FilterKind::Active) {
//!     println!("{task}");
//! }
//! println!("{}", store.progress());
//!
//! // Persist before exiting
//! store.flush();
//! ```

pub mod backend;
pub mod clock;
pub mod error;
pub mod model;
pub mod query;
pub mod report;
pub mod schedule;
pub mod snapshot;
pub mod store;
pub mod util;

pub use backend::{FileBackend, KeyValueStore, MemoryBackend};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, TaskError};
pub use model::{StoreState, Task, TaskId};
pub use query::{FilterKind, Progress};
pub use report::{ErrorReporter, RecordingReporter, TracingReporter};
pub use schedule::WriteScheduler;
pub use store::{StoreOptions, TaskStore};

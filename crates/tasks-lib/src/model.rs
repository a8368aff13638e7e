//! Core data types for tasks-lib.
//!
//! The serde shape of [`Task`] is the persisted wire format:
//! `{"id": number, "text": string, "completed": boolean}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque task identifier. Unique and never reused within a store.
pub type TaskId = u64;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task.
    #[must_use]
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Completion status as the word used in listings.
    #[must_use]
    pub const fn status_str(&self) -> &'static str {
        if self.completed { "completed" } else { "active" }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.text)
    }
}

/// Store lifecycle.
///
/// `Uninitialized -> Loading -> Ready` on the happy path, or
/// `Uninitialized -> Loading -> Recovered` when the snapshot was unreadable
/// and the store fell back to an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreState {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    Recovered,
}

impl StoreState {
    /// Whether CRUD operations are accepted.
    #[must_use]
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready | Self::Recovered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let task = Task::new(7, "Buy milk");
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":7,"text":"Buy milk","completed":false}"#);
    }

    #[test]
    fn test_missing_completed_defaults_false() {
        let task: Task = serde_json::from_str(r#"{"id":1,"text":"x"}"#).unwrap();
        assert!(!task.completed);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let task: Task =
            serde_json::from_str(r#"{"id":1,"text":"x","completed":true,"color":"red"}"#).unwrap();
        assert!(task.completed);
    }

    #[test]
    fn test_store_state_readiness() {
        assert!(!StoreState::Uninitialized.is_ready());
        assert!(!StoreState::Loading.is_ready());
        assert!(StoreState::Ready.is_ready());
        assert!(StoreState::Recovered.is_ready());
    }
}

//! Snapshot encoding for the persisted task list.
//!
//! A snapshot is one JSON array of tasks in insertion order, written
//! wholesale under a single storage key.

use std::collections::HashSet;

use crate::error::{Result, TaskError};
use crate::model::Task;

/// Serialize tasks into the snapshot text.
///
/// # Errors
///
/// Returns `Json` if serialization fails.
pub fn encode(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string(tasks)?)
}

/// Parse snapshot text back into tasks.
///
/// Blank text is treated as an empty list.
///
/// # Errors
///
/// Returns `Json` if the text is not an array of tasks, or `Validation`
/// if two tasks share an id.
pub fn decode(text: &str) -> Result<Vec<Task>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let tasks: Vec<Task> = serde_json::from_str(trimmed)?;

    let mut seen = HashSet::with_capacity(tasks.len());
    for task in &tasks {
        if !seen.insert(task.id) {
            return Err(TaskError::validation(
                "id",
                format!("duplicate task id {}", task.id),
            ));
        }
    }

    Ok(tasks)
}

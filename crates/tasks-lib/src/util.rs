//! ID allocation and input validation utilities.

use crate::error::{Result, TaskError};
use crate::model::{Task, TaskId};

/// Maximum task text length, in characters.
pub const MAX_TEXT_LEN: usize = 500;

// ============================================================================
// ID Allocation
// ============================================================================

/// Allocates strictly increasing task ids seeded from the wall clock.
///
/// An id is the creation time in milliseconds unless that would not be
/// greater than the previously issued id, in which case it is `last + 1`.
/// Two tasks created in the same millisecond therefore never collide.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: Option<TaskId>,
}

impl IdAllocator {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Seed past every id already present in `tasks`.
    #[must_use]
    pub fn after(tasks: &[Task]) -> Self {
        Self {
            last: tasks.iter().map(|t| t.id).max(),
        }
    }

    /// Issue the next id for a task created at `now_millis`.
    ///
    /// # Errors
    ///
    /// Returns `Validation` once `u64::MAX` has been issued; the allocator
    /// is left unchanged.
    pub fn allocate(&mut self, now_millis: u64) -> Result<TaskId> {
        let id = match self.last {
            Some(last) if now_millis <= last => last
                .checked_add(1)
                .ok_or_else(|| TaskError::validation("id", "no ids left to allocate"))?,
            _ => now_millis,
        };
        self.last = Some(id);
        Ok(id)
    }

    #[must_use]
    pub const fn last(&self) -> Option<TaskId> {
        self.last
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Trim and validate user-supplied task text.
///
/// # Errors
///
/// Returns `Validation` if the trimmed text is empty or too long.
pub fn normalize_text(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TaskError::validation("text", "cannot be empty"));
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(TaskError::validation(
            "text",
            format!("exceeds {MAX_TEXT_LEN} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

use serde::{Deserialize, Serialize};
use tasks_lib::{FilterKind, Progress, Task, TaskId};

/// Filtered tasks with progress for the list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListing {
    pub filter: FilterKind,
    pub tasks: Vec<Task>,
    pub progress: Progress,
}

/// Result of a toggle or delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResult {
    pub id: TaskId,
    /// Whether a task with this id existed.
    pub matched: bool,
    /// The task after the change; absent for deletes and misses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
}

//! Toggle command implementation.

use tasks_lib::TaskId;

use crate::cli::commands::CommandContext;
use crate::error::Result;
use crate::format::MutationResult;

/// Execute the toggle command.
///
/// An unknown id is not an error; nothing changes and the output says so.
///
/// # Errors
///
/// Returns an error if the workspace is missing.
pub fn execute(id: TaskId, ctx: &CommandContext) -> Result<()> {
    let mut session = ctx.open_session()?;
    let matched = session.store.toggle(id)?;
    let task = session.store.get(id).cloned();

    if ctx.json {
        let result = MutationResult { id, matched, task };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(task) = task {
        let state = if task.completed {
            "completed"
        } else {
            "active again"
        };
        println!("Task {id} is {state}: {}", task.text);
    } else {
        println!("No task with id {id}");
    }

    session.finish();
    Ok(())
}

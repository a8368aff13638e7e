//! Delete command implementation.

use tasks_lib::TaskId;

use crate::cli::commands::CommandContext;
use crate::error::Result;
use crate::format::MutationResult;

/// Execute the delete command.
///
/// # Errors
///
/// Returns an error if the workspace is missing.
pub fn execute(id: TaskId, ctx: &CommandContext) -> Result<()> {
    let mut session = ctx.open_session()?;
    let text = session.store.get(id).map(|t| t.text.clone());
    let matched = session.store.delete(id)?;

    if ctx.json {
        let result = MutationResult {
            id,
            matched,
            task: None,
        };
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(text) = text {
        println!("Deleted {id}: {text}");
    } else {
        println!("No task with id {id}");
    }

    session.finish();
    Ok(())
}

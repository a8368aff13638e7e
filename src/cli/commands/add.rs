//! Add command implementation.

use crate::cli::commands::CommandContext;
use crate::error::Result;

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if the workspace is missing or the text is rejected.
pub fn execute(words: &[String], ctx: &CommandContext) -> Result<()> {
    let text = words.join(" ");

    let mut session = ctx.open_session()?;
    let task = session.store.add(&text)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&task)?);
    } else {
        println!("Added {}: {}", task.id, task.text);
    }

    session.finish();
    Ok(())
}

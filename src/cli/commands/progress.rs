//! Progress command implementation.

use crate::cli::commands::CommandContext;
use crate::error::Result;
use crate::format::format_progress_bar;

/// Execute the progress command.
///
/// # Errors
///
/// Returns an error if the workspace is missing.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let session = ctx.open_session()?;
    let progress = session.store.progress();

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&progress)?);
    } else {
        println!("{}", format_progress_bar(&progress));
    }

    session.finish();
    Ok(())
}

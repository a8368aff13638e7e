//! List command implementation.
//!
//! Primary view: the filtered tasks in insertion order followed by a
//! progress bar over the whole list.

use crate::cli::ListArgs;
use crate::cli::commands::CommandContext;
use crate::error::Result;
use crate::format::{TaskListing, format_progress_bar, format_task_line};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if the workspace is missing or output fails.
pub fn execute(args: &ListArgs, ctx: &CommandContext) -> Result<()> {
    let session = ctx.open_session()?;

    let listing = TaskListing {
        filter: args.filter,
        tasks: session.store.filter(args.filter),
        progress: session.store.progress(),
    };

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else if listing.tasks.is_empty() {
        println!("No {} tasks.", listing.filter);
        println!("{}", format_progress_bar(&listing.progress));
    } else {
        for task in &listing.tasks {
            println!("{}", format_task_line(task, args.width));
        }
        println!();
        println!("{}", format_progress_bar(&listing.progress));
    }

    session.finish();
    Ok(())
}

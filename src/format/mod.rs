//! Output formatting for `tk`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//!
//! # JSON Output Types
//!
//! - [`TaskListing`] - Filtered tasks plus overall progress (list)
//! - [`MutationResult`] - Outcome of toggle/delete

mod output;
mod text;

pub use output::{MutationResult, TaskListing};
pub use text::{format_progress_bar, format_status_icon, format_task_line, truncate_to_width};

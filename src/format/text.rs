//! Text formatting functions for `tk`.
//!
//! Plain (non-ANSI) terminal output:
//! - Status icons (○ ✓)
//! - Task lines
//! - Progress bar

use tasks_lib::{Progress, Task};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Status icon characters.
pub mod icons {
    /// Active task (hollow circle).
    pub const ACTIVE: &str = "○";
    /// Completed task (checkmark).
    pub const COMPLETED: &str = "✓";
}

/// Width of the progress bar, in cells.
const BAR_WIDTH: usize = 20;

#[must_use]
pub const fn format_status_icon(task: &Task) -> &'static str {
    if task.completed {
        icons::COMPLETED
    } else {
        icons::ACTIVE
    }
}

/// Cut `text` to at most `max_width` display cells, marking the cut with `…`.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Format a single-line task summary.
///
/// Format: `{icon} {id} {text}`, text cut to `max_width` cells if given.
#[must_use]
pub fn format_task_line(task: &Task, max_width: Option<usize>) -> String {
    let text = max_width.map_or_else(|| task.text.clone(), |w| truncate_to_width(&task.text, w));
    format!("{} {} {}", format_status_icon(task), task.id, text)
}

/// Format progress as `[#####---------------] 25% complete (1/4)`.
#[must_use]
pub fn format_progress_bar(progress: &Progress) -> String {
    let filled = usize::from(progress.percentage) * BAR_WIDTH / 100;
    format!(
        "[{}{}] {progress}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_line() {
        let mut task = Task::new(17, "Buy milk");
        assert_eq!(format_task_line(&task, None), "○ 17 Buy milk");
        task.completed = true;
        assert_eq!(format_task_line(&task, None), "✓ 17 Buy milk");
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // each CJK char is two cells wide
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn test_progress_bar() {
        let p = Progress {
            percentage: 25,
            completed_count: 1,
            total: 4,
        };
        assert_eq!(
            format_progress_bar(&p),
            "[#####---------------] 25% complete (1/4)"
        );
        assert_eq!(
            format_progress_bar(&Progress::default()),
            "[--------------------] 0% complete (0/0)"
        );
    }
}

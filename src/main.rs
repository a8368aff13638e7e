//! `tk` - Task list manager
//!
//! Keeps a list of short text tasks in `.tasks/tasks.json`.

use tasks_rust::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! Init command implementation.

use std::fs;

use crate::cli::commands::CommandContext;
use crate::config::{CONFIG_FILE, CONFIG_TEMPLATE};
use crate::error::{AppError, Result};

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the workspace exists (without `force`) or the
/// directory cannot be created.
pub fn execute(force: bool, ctx: &CommandContext) -> Result<()> {
    let dir = &ctx.dir;
    let config_path = dir.join(CONFIG_FILE);

    if dir.exists() {
        if config_path.exists() && !force {
            return Err(AppError::AlreadyInitialized { path: dir.clone() });
        }
    } else {
        fs::create_dir_all(dir)?;
    }

    fs::write(&config_path, CONFIG_TEMPLATE)?;

    // Write .gitignore
    let gitignore_path = dir.join(".gitignore");
    if !gitignore_path.exists() {
        let gitignore = r"# Temporary
*.tmp
*.unreadable.*
";
        fs::write(gitignore_path, gitignore)?;
    }

    tracing::info!("Initialized workspace at {}", dir.display());
    if ctx.json {
        println!(
            "{}",
            serde_json::json!({ "initialized": dir.display().to_string() })
        );
    } else {
        println!("Initialized task list in {}/", dir.display());
    }
    Ok(())
}

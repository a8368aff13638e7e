//! Command-line interface for `tk`.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use tasks_lib::{FilterKind, TaskId};

use crate::cli::commands::CommandContext;
use crate::config::{CliOverrides, Config};
use crate::logging;

/// `tk` - Task list manager.
#[derive(Parser, Debug)]
#[command(name = "tk")]
#[command(
    author,
    version,
    about = "Task list manager with JSON persistence",
    long_about = None
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Workspace directory
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Storage key (overrides config)
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a task workspace
    Init {
        /// Rewrite the config template if the workspace exists
        #[arg(long)]
        force: bool,
    },

    /// Add a new task
    Add {
        /// Task text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Flip a task between active and completed (alias: done)
    #[command(alias = "done")]
    Toggle {
        /// Task id
        id: TaskId,
    },

    /// Delete a task (alias: rm)
    #[command(alias = "rm")]
    Delete {
        /// Task id
        id: TaskId,
    },

    /// List tasks (alias: ls)
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show completion progress (alias: stats)
    #[command(alias = "stats")]
    Progress,

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Which tasks to show: all, active, completed (anything else means all)
    #[arg(short, long, default_value = "all")]
    pub filter: FilterKind,

    /// Truncate task text to this many columns
    #[arg(long)]
    pub width: Option<usize>,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            dir: self.dir.clone(),
            storage_key: self.key.clone(),
        }
    }
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let overrides = cli.overrides();

    let log_filter = Config::load(&overrides.workspace_dir())
        .ok()
        .and_then(|c| c.log_filter);
    logging::init_logging(cli.verbose, cli.quiet, log_filter.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let ctx = CommandContext::resolve(&overrides, cli.json)?;

    match cli.command {
        Some(Commands::Init { force }) => commands::init::execute(force, &ctx)?,
        Some(Commands::Add { text }) => commands::add::execute(&text, &ctx)?,
        Some(Commands::Toggle { id }) => commands::toggle::execute(id, &ctx)?,
        Some(Commands::Delete { id }) => commands::delete::execute(id, &ctx)?,
        Some(Commands::List(args)) => commands::list::execute(&args, &ctx)?,
        Some(Commands::Progress) => commands::progress::execute(&ctx)?,
        Some(Commands::Version) => commands::version::execute(&ctx)?,
        None => println!("tk - Task list manager. Use --help for usage."),
    }

    Ok(())
}

impl Commands {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::Add { .. } => "add",
            Self::Toggle { .. } => "toggle",
            Self::Delete { .. } => "delete",
            Self::List(_) => "list",
            Self::Progress => "progress",
            Self::Version => "version",
        }
    }
}

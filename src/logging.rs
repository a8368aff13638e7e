//! Logging setup for `tk`.
//!
//! Diagnostics go to stderr so that `--json` output on stdout stays clean.
//! `RUST_LOG` takes precedence, then the configured filter, then the level
//! implied by `-v`/`-q`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_logging(
    verbose: u8,
    quiet: bool,
    log_filter: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(raw) if !raw.trim().is_empty() => EnvFilter::try_new(raw.trim())?,
        _ => match log_filter {
            Some(configured) => EnvFilter::try_new(configured)?,
            None => EnvFilter::new(default_level(verbose, quiet)),
        },
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init()?;

    Ok(())
}

/// Level directive for the given verbosity flags.
#[must_use]
pub const fn default_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

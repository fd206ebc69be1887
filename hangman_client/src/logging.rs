//! Logging setup.
//!
//! The engine logs through the `log` facade. The client routes those
//! records with `env_logger`, honoring `RUST_LOG`.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::{fs::OpenOptions, path::Path};

/// Initialize logging.
///
/// With a log file, records at `info` and above (or whatever `RUST_LOG`
/// selects) are appended to it. Without one, the TUI installs no logger
/// since stderr output would corrupt the screen, and plain mode logs
/// warnings to stderr.
pub fn init(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let mut builder = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None if tui => return Ok(()),
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };

    builder.try_init().context("Logger already initialized")?;
    log::info!("logging initialized");
    Ok(())
}

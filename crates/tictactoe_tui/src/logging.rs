//! File-backed tracing setup.
//!
//! The terminal belongs to the game view while it runs, so logs go to a file.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs a global subscriber writing to `log_file`.
///
/// `RUST_LOG` selects the filter; the default is `info`. A subscriber that
/// is already installed is left in place.
pub fn init(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

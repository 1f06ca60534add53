//! Logging setup.
//!
//! Console logging through `env_logger`. Defaults to `info`; set `RUST_LOG`
//! to change it:
//!
//! ```text
//! RUST_LOG=debug vgsales-insights
//! ```
//!
//! Use the `log` macros everywhere else:
//!
//! ```no_run
//! vgsales_insights::logging::init().expect("Failed to initialise logging");
//! log::info!("Pipeline started");
//! ```

use anyhow::{Context as _, Result};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Initialises the global logger. Call once at startup.
///
/// # Errors
///
/// Returns error if a logger has already been installed.
pub fn init() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_millis()
        .try_init()
        .context("Failed to initialise logger")?;

    log::debug!("Logging initialised (default filter: {DEFAULT_FILTER})");
    Ok(())
}

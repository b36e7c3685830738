//! Diagnostic logging setup.
//!
//! Log records go to stderr so that stdout only ever carries the exploration itself.

use std::io;

use color_eyre::eyre::{eyre, Result};
use tracing_subscriber::EnvFilter;

/// Returns the default filter directive for a verbosity count.
pub(crate) const fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global log subscriber.
///
/// The `RUST_LOG` environment variable takes precedence over the verbosity count when it holds a
/// valid filter.
///
/// # Errors
///
/// This function may return errors if a global subscriber was already installed.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level(verbosity)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}

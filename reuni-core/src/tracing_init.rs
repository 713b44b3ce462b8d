//! Tracing initialization for the reuni CLI
//!
//! Uses the standard RUST_LOG environment variable for filtering:
//! - `RUST_LOG=debug` - Set global level
//! - `RUST_LOG=reuni_client=debug` - Set per-crate levels
//!
//! Uses RUST_LOG_FORMAT for output format (optional):
//! - `json` - JSON formatted output
//! - `pretty` - Pretty formatted output
//! - `compact` - Compact single-line output (default)
//!
//! All log output is written to stderr; stdout is reserved for command output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{ReuniError, Result};

/// Environment variable that disables subscriber installation entirely.
pub const TEST_MODE_ENV: &str = "REUNI_TEST_MODE";

/// Initialize with a default filter used when RUST_LOG is not set
pub fn init_with_defaults(default_filter: &str) -> Result<()> {
    if std::env::var_os(TEST_MODE_ENV).is_some() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match format.as_str() {
        "json" => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false).json())
            .try_init(),
        "pretty" => registry
            .with(fmt::layer().with_writer(std::io::stderr).pretty())
            .try_init(),
        _ => registry
            .with(fmt::layer().with_writer(std::io::stderr).compact())
            .try_init(),
    };

    installed.map_err(|e| ReuniError::Internal(format!("Failed to initialize tracing: {e}")))
}

// crates/algokit-cli/src/telemetry.rs
// ============================================================================
// Module: CLI Telemetry
// Description: Installs the tracing subscriber for the algokit binary.
// Purpose: Route library and CLI events to stderr in text or JSON form.
// Dependencies: algokit-config, tracing-subscriber
// ============================================================================

//! ## Overview
//! The filter comes from `RUST_LOG` when set and otherwise from the resolved
//! `logging.level` (which the `--log-level` flag overrides before this runs).
//! Events always go to stderr so stdout carries only command output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use algokit_config::LogFormat;
use algokit_config::LoggingConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Subscriber installation failures.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// A global subscriber was already installed.
    #[error("subscriber already installed: {0}")]
    Install(String),
}

// ============================================================================
// SECTION: Setup
// ============================================================================

/// Installs the global subscriber described by `logging`.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init(logging: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = create_env_filter(logging.level.as_str())?;
    let text_layer = (logging.format == LogFormat::Text)
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(true).with_ansi(false));
    let json_layer = (logging.format == LogFormat::Json)
        .then(|| fmt::layer().json().with_writer(std::io::stderr).with_target(true));

    tracing_subscriber::registry()
        .with(filter)
        .with(text_layer)
        .with(json_layer)
        .try_init()
        .map_err(|err| TelemetryError::Install(err.to_string()))
}

/// Builds the filter from `RUST_LOG`, falling back to `default_directive`.
fn create_env_filter(default_directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|err| TelemetryError::Filter(err.to_string()))
}

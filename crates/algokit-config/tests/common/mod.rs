// crates/algokit-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for algokit-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use algokit_config::AlgokitConfig;
use algokit_config::ConfigError;

/// Result type shared by the config suites.
pub type TestResult = Result<(), String>;

/// Parses and validates a TOML string for tests.
pub fn config_from_toml(toml_str: &str) -> Result<AlgokitConfig, ConfigError> {
    AlgokitConfig::from_toml_str(toml_str)
}

/// Asserts that `result` failed with a message containing `needle`.
pub fn assert_invalid(result: Result<AlgokitConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}

// crates/algokit-core/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers and fixture data for integration tests.
// ============================================================================
//! ## Overview
//! Result-based assertions plus the small textbook data sets the graph,
//! string and search tests run against.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    dead_code,
    reason = "Test-only helpers; not every test binary uses every fixture."
)]

pub mod fixtures;

use std::error::Error;
use std::fmt;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl TestError {
    /// Creates a new test error with the provided message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(Box::new(TestError::new(message))) }
}

/// Returns an error unless `actual` is within `1e-9` of `expected`.
///
/// # Errors
/// Returns a `TestError` naming both values on mismatch.
pub fn ensure_close(actual: f64, expected: f64, what: &str) -> TestResult {
    ensure(
        (actual - expected).abs() < 1e-9,
        format!("{what}: expected {expected}, got {actual}"),
    )
}

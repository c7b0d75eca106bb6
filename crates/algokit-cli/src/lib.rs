// crates/algokit-cli/src/lib.rs
// ============================================================================
// Module: algokit CLI Library
// Description: Shared helpers for the algokit command-line interface.
// Purpose: Provide the message catalog, bounded input and logging setup.
// Dependencies: algokit-config, tracing-subscriber
// ============================================================================

//! ## Overview
//! This library houses the CLI utilities that the `algokit` binary and its
//! tests share: the message catalog behind [`t!`], bounded input readers and
//! the tracing subscriber setup.

#![cfg_attr(
    test,
    allow(
        clippy::panic_in_result_fn,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions run inside Result-returning tests."
    )
)]

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Message catalog and translation helpers.
pub mod i18n;
/// Size-capped readers for files and stdin.
pub mod input;
/// Tracing subscriber installation.
pub mod telemetry;

// crates/algokit-config/src/lib.rs
// ============================================================================
// Module: algokit Config Library
// Description: Configuration model and loader for the algokit CLI.
// Purpose: Single source of truth for algokit.toml semantics.
// Dependencies: algokit-core, serde, toml
// ============================================================================

//! ## Overview
//! `algokit-config` parses `algokit.toml` into [`AlgokitConfig`] with strict,
//! fail-closed validation. Config inputs are untrusted: file size, path
//! length and every numeric limit are bounded.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;

// crates/algokit-core/src/strings/mod.rs
// ============================================================================
// Module: Strings
// Description: Alphabets and radix sorts.
// Purpose: String processing primitives that exploit small digit ranges.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! [`key_indexed`] sorts small integer keys stably in linear time, [`lsd`]
//! applies it digit by digit to fixed-width strings, and [`msd`] handles
//! variable-length strings by partitioning on leading bytes.

pub mod alphabet;
pub mod key_indexed;
pub mod lsd;
pub mod msd;

pub use alphabet::Alphabet;

// crates/algokit-core/src/searching/hashing.rs
// ============================================================================
// Module: Bucket Hashing
// Description: Maps hashable keys onto table slots.
// Purpose: Shared, deterministic hash-to-index step for both hash tables.
// Dependencies: Standard library.
// ============================================================================

//! Slot selection for the hash tables.

use std::hash::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

/// Returns the slot for `key` in a table of `slots` entries.
///
/// `DefaultHasher::new` is seeded identically on every call, so the slot for a
/// key is stable across tables and runs.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Only the low bits of the hash select a slot."
)]
pub(crate) fn bucket<K: Hash + ?Sized>(key: &K, slots: usize) -> usize {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    (hasher.finish() as usize) % slots.max(1)
}

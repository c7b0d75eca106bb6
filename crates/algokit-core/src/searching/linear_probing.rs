// crates/algokit-core/src/searching/linear_probing.rs
// ============================================================================
// Module: Linear-Probing Hash Table
// Description: Open-addressing hash table with linear probing.
// Purpose: Cache-friendly constant expected-time symbol table.
// Dependencies: tracing, crate::searching::{hashing, table}
// ============================================================================

//! ## Overview
//! Entries live directly in a slot array. A lookup probes forward from the
//! key's hash slot until it finds the key or an empty slot.
//!
//! ## Invariants
//! - The table is at most half full, so every probe sequence terminates.
//! - No entry is separated from its hash slot by an empty slot; deletion
//!   re-inserts the remainder of the cluster to keep this true.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::hash::Hash;

use tracing::debug;

use crate::searching::hashing::bucket;
use crate::searching::table::SymbolTable;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Initial and minimum slot count.
pub const MIN_SLOTS: usize = 4;

// ============================================================================
// SECTION: Table
// ============================================================================

/// Symbol table using linear probing.
#[derive(Debug, Clone)]
pub struct LinearProbingHashSt<K, V> {
    /// Slot array.
    slots: Vec<Option<(K, V)>>,
    /// Number of occupied slots.
    len: usize,
}

impl<K: Hash + Eq, V> Default for LinearProbingHashSt<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> LinearProbingHashSt<K, V> {
    /// Creates an empty table with [`MIN_SLOTS`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_slots(MIN_SLOTS)
    }

    /// Creates an empty table with `slots` slots (at least [`MIN_SLOTS`]).
    #[must_use]
    pub fn with_slots(slots: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(slots.max(MIN_SLOTS)).collect(),
            len: 0,
        }
    }

    /// Returns the current slot count.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the slot holding `key`, if any.
    fn find(&self, key: &K) -> Option<usize> {
        let m = self.slots.len();
        let mut i = bucket(key, m);
        while let Some((candidate, _)) = &self.slots[i] {
            if candidate == key {
                return Some(i);
            }
            i = (i + 1) % m;
        }
        None
    }

    /// Rehashes every entry into `slots` slots.
    fn resize(&mut self, slots: usize) {
        let slots = slots.max(MIN_SLOTS);
        debug!(from = self.slots.len(), to = slots, len = self.len, "rehashing probe table");
        let mut resized = Self::with_slots(slots);
        for (key, value) in self.slots.drain(..).flatten() {
            resized.insert_new(key, value);
        }
        *self = resized;
    }

    /// Places a key known to be absent; the caller guarantees a free slot.
    fn insert_new(&mut self, key: K, value: V) {
        let m = self.slots.len();
        let mut i = bucket(&key, m);
        while self.slots[i].is_some() {
            i = (i + 1) % m;
        }
        self.slots[i] = Some((key, value));
        self.len += 1;
    }
}

impl<K: Hash + Eq, V> SymbolTable<K, V> for LinearProbingHashSt<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        if self.len >= self.slots.len() / 2 {
            self.resize(2 * self.slots.len());
        }
        self.insert_new(key, value);
        None
    }

    fn get(&self, key: &K) -> Option<&V> {
        let i = self.find(key)?;
        self.slots[i].as_ref().map(|(_, value)| value)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let i = self.find(key)?;
        self.slots[i].as_mut().map(|(_, value)| value)
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        let m = self.slots.len();
        let mut i = self.find(key)?;
        let (_, removed) = self.slots[i].take()?;
        self.len -= 1;
        i = (i + 1) % m;
        while let Some((moved_key, moved_value)) = self.slots[i].take() {
            self.len -= 1;
            self.insert_new(moved_key, moved_value);
            i = (i + 1) % m;
        }
        if self.len > 0 && self.len <= self.slots.len() / 8 {
            self.resize(self.slots.len() / 2);
        }
        Some(removed)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn keys(&self) -> Vec<&K> {
        self.slots.iter().flatten().map(|(key, _)| key).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LinearProbingHashSt;
    use crate::searching::table::SymbolTable;

    #[test]
    fn stays_at_most_half_full() {
        let mut table = LinearProbingHashSt::new();
        for key in 0 .. 100 {
            table.put(key, key * 2);
            assert!(2 * table.len() <= table.capacity());
        }
        for key in 0 .. 90 {
            assert_eq!(table.delete(&key), Some(key * 2));
        }
        for key in 90 .. 100 {
            assert_eq!(table.get(&key), Some(&(key * 2)));
        }
        assert!(table.capacity() < 256);
    }
}

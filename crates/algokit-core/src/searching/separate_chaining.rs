// crates/algokit-core/src/searching/separate_chaining.rs
// ============================================================================
// Module: Separate-Chaining Hash Table
// Description: Hash table of sequential-search chains.
// Purpose: Constant expected-time symbol table for hashable keys.
// Dependencies: tracing, crate::searching::{hashing, sequential, table}
// ============================================================================

//! ## Overview
//! Each key hashes to one of `m` chains, each a [`SequentialSearchSt`]. The
//! chain count doubles when the average chain length reaches 10 and halves
//! when it falls to 2, never dropping below [`MIN_CHAINS`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::hash::Hash;

use tracing::debug;

use crate::searching::hashing::bucket;
use crate::searching::sequential::SequentialSearchSt;
use crate::searching::table::SymbolTable;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Initial and minimum number of chains.
pub const MIN_CHAINS: usize = 4;

/// Average chain length that triggers doubling.
const GROW_AT: usize = 10;

/// Average chain length that triggers halving.
const SHRINK_AT: usize = 2;

// ============================================================================
// SECTION: Table
// ============================================================================

/// Symbol table using separate chaining.
#[derive(Debug)]
pub struct SeparateChainingHashSt<K, V> {
    /// One chain per bucket.
    chains: Vec<SequentialSearchSt<K, V>>,
    /// Number of entries across all chains.
    len: usize,
}

impl<K: Hash + Eq, V> Default for SeparateChainingHashSt<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> SeparateChainingHashSt<K, V> {
    /// Creates an empty table with [`MIN_CHAINS`] chains.
    #[must_use]
    pub fn new() -> Self {
        Self::with_chains(MIN_CHAINS)
    }

    /// Creates an empty table with `chains` chains (at least [`MIN_CHAINS`]).
    #[must_use]
    pub fn with_chains(chains: usize) -> Self {
        Self {
            chains: (0 .. chains.max(MIN_CHAINS)).map(|_| SequentialSearchSt::new()).collect(),
            len: 0,
        }
    }

    /// Returns the current number of chains.
    #[must_use]
    pub const fn chain_count(&self) -> usize {
        self.chains.len()
    }

    /// Rehashes every entry into `chains` chains.
    fn resize(&mut self, chains: usize) {
        let chains = chains.max(MIN_CHAINS);
        debug!(from = self.chains.len(), to = chains, len = self.len, "rehashing chains");
        let mut resized = Self::with_chains(chains);
        for chain in &mut self.chains {
            for (key, value) in chain.drain() {
                resized.put(key, value);
            }
        }
        *self = resized;
    }

    /// Returns the chain responsible for `key`.
    fn chain(&self, key: &K) -> &SequentialSearchSt<K, V> {
        &self.chains[bucket(key, self.chains.len())]
    }
}

impl<K: Hash + Eq, V> SymbolTable<K, V> for SeparateChainingHashSt<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.len >= GROW_AT * self.chains.len() {
            self.resize(2 * self.chains.len());
        }
        let index = bucket(&key, self.chains.len());
        let replaced = self.chains[index].put(key, value);
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.chain(key).get(key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = bucket(key, self.chains.len());
        self.chains[index].get_mut(key)
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        let index = bucket(key, self.chains.len());
        let removed = self.chains[index].delete(key)?;
        self.len -= 1;
        if self.chains.len() > MIN_CHAINS && self.len <= SHRINK_AT * self.chains.len() {
            self.resize(self.chains.len() / 2);
        }
        Some(removed)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn keys(&self) -> Vec<&K> {
        self.chains.iter().flat_map(|chain| chain.keys()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::SeparateChainingHashSt;
    use crate::searching::table::SymbolTable;

    #[test]
    fn grows_and_shrinks_with_load() {
        let mut table = SeparateChainingHashSt::new();
        for key in 0 .. 41 {
            table.put(key, key);
        }
        assert_eq!(table.chain_count(), 8);
        for key in 0 .. 30 {
            assert_eq!(table.delete(&key), Some(key));
        }
        assert_eq!(table.chain_count(), 4);
        assert_eq!(table.len(), 11);
        assert_eq!(table.get(&35), Some(&35));
    }
}

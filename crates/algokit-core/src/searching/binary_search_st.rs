// crates/algokit-core/src/searching/binary_search_st.rs
// ============================================================================
// Module: Binary Search Symbol Table
// Description: Ordered symbol table over parallel sorted arrays.
// Purpose: Logarithmic search with linear-time insertion.
// Dependencies: crate::searching::table
// ============================================================================

//! ## Overview
//! `keys` is kept sorted and `values[i]` belongs to `keys[i]`. Every query is
//! answered through [`BinarySearchSt::rank`].

use crate::searching::table::OrderedSymbolTable;
use crate::searching::table::SymbolTable;

/// Ordered symbol table backed by two sorted vectors.
///
/// # Invariants
/// - `keys` is strictly increasing and `keys.len() == values.len()`.
#[derive(Debug, Clone)]
pub struct BinarySearchSt<K, V> {
    /// Sorted keys.
    keys: Vec<K>,
    /// Values aligned with `keys`.
    values: Vec<V>,
}

impl<K, V> Default for BinarySearchSt<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> BinarySearchSt<K, V> {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<K: Ord, V> BinarySearchSt<K, V> {
    /// Returns the position of `key` when present.
    fn position(&self, key: &K) -> Option<usize> {
        let i = self.rank(key);
        (i < self.keys.len() && self.keys[i] == *key).then_some(i)
    }
}

impl<K: Ord, V> SymbolTable<K, V> for BinarySearchSt<K, V> {
    fn put(&mut self, key: K, value: V) -> Option<V> {
        let i = self.rank(&key);
        if i < self.keys.len() && self.keys[i] == key {
            return Some(std::mem::replace(&mut self.values[i], value));
        }
        self.keys.insert(i, key);
        self.values.insert(i, value);
        None
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.position(key).map(|i| &self.values[i])
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.position(key).map(|i| &mut self.values[i])
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        let i = self.position(key)?;
        self.keys.remove(i);
        Some(self.values.remove(i))
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn keys(&self) -> Vec<&K> {
        self.keys.iter().collect()
    }
}

impl<K: Ord, V> OrderedSymbolTable<K, V> for BinarySearchSt<K, V> {
    fn min(&self) -> Option<&K> {
        self.keys.first()
    }

    fn max(&self) -> Option<&K> {
        self.keys.last()
    }

    fn floor(&self, key: &K) -> Option<&K> {
        let end = self.position(key).map_or_else(|| self.rank(key), |i| i + 1);
        end.checked_sub(1).map(|i| &self.keys[i])
    }

    fn ceiling(&self, key: &K) -> Option<&K> {
        self.keys.get(self.rank(key))
    }

    fn rank(&self, key: &K) -> usize {
        self.keys.partition_point(|candidate| candidate < key)
    }

    fn select(&self, rank: usize) -> Option<&K> {
        self.keys.get(rank)
    }

    fn delete_min(&mut self) -> Option<(K, V)> {
        if self.keys.is_empty() {
            return None;
        }
        Some((self.keys.remove(0), self.values.remove(0)))
    }

    fn delete_max(&mut self) -> Option<(K, V)> {
        Some((self.keys.pop()?, self.values.pop()?))
    }

    fn range_keys(&self, lo: &K, hi: &K) -> Vec<&K> {
        if hi < lo {
            return Vec::new();
        }
        let start = self.rank(lo);
        let end = self.keys.partition_point(|candidate| candidate <= hi);
        self.keys[start .. end].iter().collect()
    }
}

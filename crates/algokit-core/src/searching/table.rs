// crates/algokit-core/src/searching/table.rs
// ============================================================================
// Module: Symbol Table Contracts
// Description: Traits shared by every key-value table implementation.
// Purpose: Let clients swap table implementations without code changes.
// Dependencies: Standard library.
// ============================================================================

//! ## Overview
//! [`SymbolTable`] is the unordered key-value contract. Tables over `Ord`
//! keys additionally implement [`OrderedSymbolTable`], which adds rank-based
//! queries.
//!
//! ## Invariants
//! - Keys are unique: `put` on an existing key replaces its value.
//! - `len()` equals the number of keys returned by `keys()`.

// ============================================================================
// SECTION: Traits
// ============================================================================

/// Key-value table with unique keys.
pub trait SymbolTable<K, V> {
    /// Inserts or replaces the value for `key`; returns the previous value.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the value for `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns a mutable reference to the value for `key`.
    fn get_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Returns true when `key` is present.
    fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`; returns its value when it was present.
    fn delete(&mut self, key: &K) -> Option<V>;

    /// Returns the number of keys.
    fn len(&self) -> usize;

    /// Returns true when the table holds no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns every key. Ordered tables return keys in ascending order.
    fn keys(&self) -> Vec<&K>;
}

/// Symbol table over ordered keys.
pub trait OrderedSymbolTable<K: Ord, V>: SymbolTable<K, V> {
    /// Returns the smallest key.
    fn min(&self) -> Option<&K>;

    /// Returns the largest key.
    fn max(&self) -> Option<&K>;

    /// Returns the largest key less than or equal to `key`.
    fn floor(&self, key: &K) -> Option<&K>;

    /// Returns the smallest key greater than or equal to `key`.
    fn ceiling(&self, key: &K) -> Option<&K>;

    /// Returns the number of keys strictly less than `key`.
    fn rank(&self, key: &K) -> usize;

    /// Returns the key of the given rank (zero-based).
    fn select(&self, rank: usize) -> Option<&K>;

    /// Removes and returns the smallest entry.
    fn delete_min(&mut self) -> Option<(K, V)>;

    /// Removes and returns the largest entry.
    fn delete_max(&mut self) -> Option<(K, V)>;

    /// Returns the number of keys in `lo ..= hi`.
    fn range_len(&self, lo: &K, hi: &K) -> usize {
        if hi < lo {
            return 0;
        }
        self.rank(hi) - self.rank(lo) + usize::from(self.contains(hi))
    }

    /// Returns the keys in `lo ..= hi` in ascending order.
    fn range_keys(&self, lo: &K, hi: &K) -> Vec<&K> {
        self.keys().into_iter().filter(|key| lo <= *key && *key <= hi).collect()
    }
}

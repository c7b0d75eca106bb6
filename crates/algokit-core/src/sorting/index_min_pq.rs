// crates/algokit-core/src/sorting/index_min_pq.rs
// ============================================================================
// Module: Indexed Min Priority Queue
// Description: Min-heap of integer indices keyed by caller-supplied values.
// Purpose: Key changes by index for Dijkstra and eager Prim style clients.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! Each index `i` in `0 .. max_n` may carry one key. The heap stores indices;
//! `position[i]` records where index `i` sits in the heap so its key can be
//! changed in logarithmic time.
//!
//! ## Invariants
//! - `heap[position[i]] == i` for every queued `i`.
//! - `keys[i].is_some()` exactly when `i` is queued.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::AlgoError;
use crate::error::AlgoResult;
use crate::error::check_index;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Indexed min priority queue over indices `0 .. max_n`.
#[derive(Debug, Clone)]
pub struct IndexMinPq<K> {
    /// Zero-indexed heap of queue indices.
    heap: Vec<usize>,
    /// Heap position of each queued index.
    position: Vec<Option<usize>>,
    /// Key of each queued index.
    keys: Vec<Option<K>>,
}

impl<K: PartialOrd> IndexMinPq<K> {
    /// Creates an empty queue accepting indices `0 .. max_n`.
    #[must_use]
    pub fn new(max_n: usize) -> Self {
        Self {
            heap: Vec::with_capacity(max_n),
            position: vec![None; max_n],
            keys: std::iter::repeat_with(|| None).take(max_n).collect(),
        }
    }

    /// Returns the exclusive upper bound on indices.
    #[must_use]
    pub const fn max_n(&self) -> usize {
        self.position.len()
    }

    /// Returns the number of queued indices.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true when no index is queued.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns true when `i` is queued; out-of-range indices are never queued.
    #[must_use]
    pub fn contains(&self, i: usize) -> bool {
        self.position.get(i).is_some_and(Option::is_some)
    }

    /// Associates `key` with index `i`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::IndexOutOfBounds`] for `i >= max_n` and
    /// [`AlgoError::DuplicateIndex`] when `i` is already queued.
    pub fn insert(&mut self, i: usize, key: K) -> AlgoResult<()> {
        check_index(i, self.max_n())?;
        if self.contains(i) {
            return Err(AlgoError::DuplicateIndex {
                index: i,
            });
        }
        let slot = self.heap.len();
        self.heap.push(i);
        self.position[i] = Some(slot);
        self.keys[i] = Some(key);
        self.swim(slot);
        Ok(())
    }

    /// Returns the index with the smallest key.
    #[must_use]
    pub fn min_index(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Returns the smallest key.
    #[must_use]
    pub fn min_key(&self) -> Option<&K> {
        self.heap.first().and_then(|&i| self.keys[i].as_ref())
    }

    /// Returns the key of index `i`, if queued.
    #[must_use]
    pub fn key_of(&self, i: usize) -> Option<&K> {
        self.keys.get(i).and_then(Option::as_ref)
    }

    /// Removes the smallest key and returns its index.
    pub fn del_min(&mut self) -> Option<usize> {
        let min = self.min_index()?;
        self.remove_at(0);
        Some(min)
    }

    /// Removes index `i` and returns its key.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::IndexOutOfBounds`] or [`AlgoError::MissingIndex`].
    pub fn delete(&mut self, i: usize) -> AlgoResult<K> {
        let slot = self.slot_of(i)?;
        self.remove_at(slot).ok_or(AlgoError::MissingIndex {
            index: i,
        })
    }

    /// Replaces the key of index `i` with `key`, moving it either direction.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::IndexOutOfBounds`] or [`AlgoError::MissingIndex`].
    pub fn change_key(&mut self, i: usize, key: K) -> AlgoResult<()> {
        let slot = self.slot_of(i)?;
        self.keys[i] = Some(key);
        let slot = self.swim(slot);
        self.sink(slot);
        Ok(())
    }

    /// Lowers the key of index `i`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::KeyNotDecreased`] unless `key` is strictly smaller
    /// than the current key, plus the errors of [`IndexMinPq::change_key`].
    pub fn decrease_key(&mut self, i: usize, key: K) -> AlgoResult<()> {
        let slot = self.slot_of(i)?;
        if !self.keys[i].as_ref().is_some_and(|current| key < *current) {
            return Err(AlgoError::KeyNotDecreased {
                index: i,
            });
        }
        self.keys[i] = Some(key);
        self.swim(slot);
        Ok(())
    }

    /// Raises the key of index `i`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::KeyNotIncreased`] unless `key` is strictly larger
    /// than the current key, plus the errors of [`IndexMinPq::change_key`].
    pub fn increase_key(&mut self, i: usize, key: K) -> AlgoResult<()> {
        let slot = self.slot_of(i)?;
        if !self.keys[i].as_ref().is_some_and(|current| key > *current) {
            return Err(AlgoError::KeyNotIncreased {
                index: i,
            });
        }
        self.keys[i] = Some(key);
        self.sink(slot);
        Ok(())
    }

    // ============================================================================
    // SECTION: Heap Helpers
    // ============================================================================

    /// Returns the heap slot of queued index `i`.
    fn slot_of(&self, i: usize) -> AlgoResult<usize> {
        check_index(i, self.max_n())?;
        self.position[i].ok_or(AlgoError::MissingIndex {
            index: i,
        })
    }

    /// Removes the heap entry at `slot`, restoring heap order, and returns its key.
    fn remove_at(&mut self, slot: usize) -> Option<K> {
        let last = self.heap.len().checked_sub(1)?;
        self.exchange(slot, last);
        let index = self.heap.pop()?;
        self.position[index] = None;
        if slot < self.heap.len() {
            let slot = self.swim(slot);
            self.sink(slot);
        }
        self.keys[index].take()
    }

    /// Returns true when the key at heap slot `a` is greater than at slot `b`.
    fn greater(&self, a: usize, b: usize) -> bool {
        match (&self.keys[self.heap[a]], &self.keys[self.heap[b]]) {
            (Some(left), Some(right)) => left > right,
            _ => false,
        }
    }

    /// Swaps two heap slots and updates their positions.
    fn exchange(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    /// Moves slot `k` toward the root; returns its final slot.
    fn swim(&mut self, mut k: usize) -> usize {
        while k > 0 && self.greater((k - 1) / 2, k) {
            self.exchange(k, (k - 1) / 2);
            k = (k - 1) / 2;
        }
        k
    }

    /// Moves slot `k` toward the leaves.
    fn sink(&mut self, mut k: usize) {
        let n = self.heap.len();
        loop {
            let mut child = 2 * k + 1;
            if child >= n {
                break;
            }
            if child + 1 < n && self.greater(child, child + 1) {
                child += 1;
            }
            if !self.greater(k, child) {
                break;
            }
            self.exchange(k, child);
            k = child;
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

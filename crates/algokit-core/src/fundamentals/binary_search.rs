// crates/algokit-core/src/fundamentals/binary_search.rs
// ============================================================================
// Module: Binary Search
// Description: Index lookup in a sorted slice.
// Purpose: Shared primitive for whitelist filtering and fast k-sum counting.
// Dependencies: Standard library.
// ============================================================================

//! ## Overview
//! Classic iterative binary search over `lo ..= hi` expressed with a
//! half-open window so no index ever underflows.

use std::cmp::Ordering;

/// Returns the index of `key` in `sorted`, or `None` when absent.
///
/// `sorted` must be in ascending order; with duplicates any matching index
/// may be returned.
#[must_use]
pub fn index_of<T: Ord>(key: &T, sorted: &[T]) -> Option<usize> {
    let mut lo = 0;
    let mut hi = sorted.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match key.cmp(&sorted[mid]) {
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}

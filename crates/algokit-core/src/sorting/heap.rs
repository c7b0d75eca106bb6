// crates/algokit-core/src/sorting/heap.rs
// ============================================================================
// Module: Heapsort
// Description: In-place heapsort over a zero-indexed max-heap.
// Purpose: Guaranteed N log N sorting with no auxiliary memory.
// Dependencies: crate::sorting::elementary
// ============================================================================

//! ## Overview
//! Children of node `k` live at `2k + 1` and `2k + 2`. Heap construction sinks
//! every internal node bottom-up, then the sortdown repeatedly moves the
//! maximum behind the shrinking heap.

use crate::sorting::elementary::less;

/// Sorts `a` in place with heapsort.
pub fn sort<T: PartialOrd>(a: &mut [T]) {
    let n = a.len();
    for k in (0 .. n / 2).rev() {
        sink(a, k, n);
    }
    for end in (1 .. n).rev() {
        a.swap(0, end);
        sink(a, 0, end);
    }
}

/// Restores heap order below `k` within `a[.. n]`.
fn sink<T: PartialOrd>(a: &mut [T], mut k: usize, n: usize) {
    loop {
        let mut child = 2 * k + 1;
        if child >= n {
            return;
        }
        if child + 1 < n && less(&a[child], &a[child + 1]) {
            child += 1;
        }
        if !less(&a[k], &a[child]) {
            return;
        }
        a.swap(k, child);
        k = child;
    }
}

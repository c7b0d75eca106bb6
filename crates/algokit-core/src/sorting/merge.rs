// crates/algokit-core/src/sorting/merge.rs
// ============================================================================
// Module: Mergesort
// Description: Top-down, bottom-up and slice-splitting mergesorts.
// Purpose: Stable N log N sorting with an auxiliary buffer.
// Dependencies: crate::sorting::elementary
// ============================================================================

//! ## Overview
//! Every variant is stable: when two keys compare equal the element from the
//! left run is taken first.
//!
//! ## Invariants
//! - [`top_down`] and [`bottom_up`] allocate one auxiliary buffer per call.
//! - Subarrays of at most [`CUTOFF`] elements are finished by insertion sort in
//!   [`top_down`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::sorting::elementary::insertion;
use crate::sorting::elementary::less;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Subarray length at or below which top-down mergesort uses insertion sort.
pub const CUTOFF: usize = 7;

// ============================================================================
// SECTION: Public Sorts
// ============================================================================

/// Recursive mergesort over a single auxiliary buffer.
pub fn top_down<T: PartialOrd + Clone>(a: &mut [T]) {
    if a.len() < 2 {
        return;
    }
    let mut aux = a.to_vec();
    sort_range(a, &mut aux, 0, a.len());
}

/// Iterative mergesort doubling the run width each pass.
pub fn bottom_up<T: PartialOrd + Clone>(a: &mut [T]) {
    let n = a.len();
    if n < 2 {
        return;
    }
    let mut aux = a.to_vec();
    let mut width = 1;
    while width < n {
        let mut lo = 0;
        while lo < n - width {
            let hi = (lo + 2 * width).min(n);
            merge(a, &mut aux, lo, lo + width, hi);
            lo += 2 * width;
        }
        width *= 2;
    }
}

/// Splits the slice in two, sorts each half, and merges through scratch space.
pub fn by_halves<T: PartialOrd + Clone>(a: &mut [T]) {
    let n = a.len();
    if n < 2 {
        return;
    }
    let mid = n / 2;
    by_halves(&mut a[.. mid]);
    by_halves(&mut a[mid ..]);

    let (left, right) = a.split_at(mid);
    let mut merged = Vec::with_capacity(n);
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if less(&right[j], &left[i]) {
            merged.push(right[j].clone());
            j += 1;
        } else {
            merged.push(left[i].clone());
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i ..]);
    merged.extend_from_slice(&right[j ..]);
    a.clone_from_slice(&merged);
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Sorts `a[lo .. hi]` using `aux` as scratch.
fn sort_range<T: PartialOrd + Clone>(a: &mut [T], aux: &mut [T], lo: usize, hi: usize) {
    if hi - lo <= CUTOFF {
        insertion(&mut a[lo .. hi]);
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(a, aux, lo, mid);
    sort_range(a, aux, mid, hi);
    if !less(&a[mid], &a[mid - 1]) {
        return;
    }
    merge(a, aux, lo, mid, hi);
}

/// Merges the sorted runs `a[lo .. mid]` and `a[mid .. hi]`.
fn merge<T: PartialOrd + Clone>(a: &mut [T], aux: &mut [T], lo: usize, mid: usize, hi: usize) {
    aux[lo .. hi].clone_from_slice(&a[lo .. hi]);
    let (mut i, mut j) = (lo, mid);
    for slot in &mut a[lo .. hi] {
        if i >= mid {
            *slot = aux[j].clone();
            j += 1;
        } else if j >= hi || !less(&aux[j], &aux[i]) {
            *slot = aux[i].clone();
            i += 1;
        } else {
            *slot = aux[j].clone();
            j += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::bottom_up;
    use super::by_halves;
    use super::top_down;

    /// Pair ordered by its first field only.
    #[derive(Clone, Debug, PartialEq)]
    struct ByKey(i32, char);

    impl PartialOrd for ByKey {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    #[test]
    fn merges_are_stable() {
        let pairs = [
            (2, 'a'),
            (1, 'b'),
            (2, 'c'),
            (1, 'd'),
            (0, 'e'),
            (2, 'f'),
            (1, 'g'),
            (0, 'h'),
            (2, 'i'),
        ];
        let expected = vec![
            (0, 'e'),
            (0, 'h'),
            (1, 'b'),
            (1, 'd'),
            (1, 'g'),
            (2, 'a'),
            (2, 'c'),
            (2, 'f'),
            (2, 'i'),
        ];

        for sort in [top_down::<ByKey>, bottom_up::<ByKey>, by_halves::<ByKey>] {
            let mut items: Vec<ByKey> = pairs.iter().map(|&(k, c)| ByKey(k, c)).collect();
            sort(&mut items);
            let got: Vec<(i32, char)> = items.iter().map(|item| (item.0, item.1)).collect();
            assert_eq!(got, expected);
        }
    }
}

// crates/algokit-core/src/sorting/quick.rs
// ============================================================================
// Module: Quicksort
// Description: Hoare, Lomuto, middle-pivot and three-way partition quicksorts.
// Purpose: In-place N log N expected-time sorting.
// Dependencies: rand, crate::sorting::elementary
// ============================================================================

//! ## Overview
//! Each variant differs only in its partition step. Partitions work on a
//! whole subslice and return the pivot's final position, so recursion splits
//! slices rather than juggling `lo`/`hi` indices that could underflow.
//!
//! ## Invariants
//! - Recursion only descends into the smaller side; the larger side is handled
//!   by the loop, keeping stack depth logarithmic.
//! - [`hoare`] shuffles first, so its running time does not depend on input
//!   order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::sorting::elementary::less;

// ============================================================================
// SECTION: Public Sorts
// ============================================================================

/// Shuffles, then sorts with Hoare's two-pointer partition around `a[0]`.
pub fn hoare<T: PartialOrd>(a: &mut [T]) {
    hoare_with_rng(a, &mut rand::thread_rng());
}

/// [`hoare`] with a caller-supplied random source.
pub fn hoare_with_rng<T: PartialOrd, R: Rng + ?Sized>(a: &mut [T], rng: &mut R) {
    a.shuffle(rng);
    sort_by_partition(a, hoare_partition);
}

/// Sorts with Lomuto's single-scan partition around the last element.
pub fn lomuto<T: PartialOrd>(a: &mut [T]) {
    sort_by_partition(a, lomuto_partition);
}

/// Sorts with the middle element as pivot, swapped to the front first.
pub fn midpoint<T: PartialOrd>(a: &mut [T]) {
    sort_by_partition(a, midpoint_partition);
}

/// Sorts with Dijkstra's three-way partition; fast on many duplicate keys.
pub fn three_way<T: PartialOrd>(mut a: &mut [T]) {
    while a.len() > 1 {
        let (lt, gt) = three_way_partition(a);
        let (left, rest) = std::mem::take(&mut a).split_at_mut(lt);
        let right = &mut rest[gt + 1 - lt ..];
        if left.len() < right.len() {
            three_way(left);
            a = right;
        } else {
            three_way(right);
            a = left;
        }
    }
}

// ============================================================================
// SECTION: Driver
// ============================================================================

/// Sorts `a` by repeatedly partitioning it with `partition`.
fn sort_by_partition<T: PartialOrd>(mut a: &mut [T], partition: fn(&mut [T]) -> usize) {
    while a.len() > 1 {
        let pivot = partition(a);
        let (left, rest) = std::mem::take(&mut a).split_at_mut(pivot);
        let right = &mut rest[1 ..];
        if left.len() < right.len() {
            sort_by_partition(left, partition);
            a = right;
        } else {
            sort_by_partition(right, partition);
            a = left;
        }
    }
}

// ============================================================================
// SECTION: Partitions
// ============================================================================

/// Hoare partition around `a[0]`; requires `a.len() >= 2`.
fn hoare_partition<T: PartialOrd>(a: &mut [T]) -> usize {
    let hi = a.len() - 1;
    let (mut i, mut j) = (0, hi + 1);
    loop {
        i += 1;
        while less(&a[i], &a[0]) && i < hi {
            i += 1;
        }
        j -= 1;
        while less(&a[0], &a[j]) {
            j -= 1;
        }
        if i >= j {
            break;
        }
        a.swap(i, j);
    }
    a.swap(0, j);
    j
}

/// Lomuto partition around the last element; requires `a.len() >= 2`.
fn lomuto_partition<T: PartialOrd>(a: &mut [T]) -> usize {
    let hi = a.len() - 1;
    let mut store = 0;
    for j in 0 .. hi {
        if less(&a[j], &a[hi]) {
            a.swap(store, j);
            store += 1;
        }
    }
    a.swap(store, hi);
    store
}

/// Partition around the middle element moved to the front; requires `a.len() >= 2`.
fn midpoint_partition<T: PartialOrd>(a: &mut [T]) -> usize {
    a.swap(0, a.len() / 2);
    let mut last = 0;
    for i in 1 .. a.len() {
        if less(&a[i], &a[0]) {
            last += 1;
            a.swap(last, i);
        }
    }
    a.swap(0, last);
    last
}

/// Three-way partition around `a[0]`.
///
/// Returns `(lt, gt)` such that `a[.. lt] < pivot`, `a[lt ..= gt] == pivot`
/// and `a[gt + 1 ..] > pivot`.
fn three_way_partition<T: PartialOrd>(a: &mut [T]) -> (usize, usize) {
    let (mut lt, mut i, mut gt) = (0, 1, a.len() - 1);
    while i <= gt {
        // a[lt] always holds a value equal to the pivot.
        match a[i].partial_cmp(&a[lt]) {
            Some(Ordering::Less) => {
                a.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Some(Ordering::Greater) => {
                a.swap(i, gt);
                gt -= 1;
            }
            Some(Ordering::Equal) | None => i += 1,
        }
    }
    (lt, gt)
}

// crates/algokit-core/src/fundamentals/three_sum.rs
// ============================================================================
// Module: Three-Sum Counting
// Description: Count distinct-index triples that sum to zero.
// Purpose: Brute-force and N^2 log N variants for running-time experiments.
// Dependencies: tracing, crate::fundamentals::binary_search
// ============================================================================

//! ## Overview
//! Sums are computed in `i64` so `i32` inputs never overflow.
//! [`count_fast`] requires distinct values; with duplicates it cannot count
//! each triple exactly once, so it refuses them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::debug;

use crate::error::AlgoError;
use crate::error::AlgoResult;
use crate::fundamentals::binary_search::index_of;

// ============================================================================
// SECTION: Counting
// ============================================================================

/// Counts triples `i < j < k` with `a[i] + a[j] + a[k] == 0` in cubic time.
#[must_use]
pub fn count(a: &[i32]) -> usize {
    let n = a.len();
    let mut total = 0;
    for i in 0 .. n {
        for j in i + 1 .. n {
            for k in j + 1 .. n {
                if i64::from(a[i]) + i64::from(a[j]) + i64::from(a[k]) == 0 {
                    total += 1;
                }
            }
        }
    }
    total
}

/// Counts zero-sum triples by sorting and binary searching for the third value.
///
/// # Errors
///
/// Returns [`AlgoError::DuplicateValues`] when `a` contains a repeated value.
pub fn count_fast(a: &[i32]) -> AlgoResult<usize> {
    let sorted = sorted_distinct(a)?;
    let n = sorted.len();
    let mut total = 0;
    for i in 0 .. n {
        for j in i + 1 .. n {
            let target = -(sorted[i] + sorted[j]);
            if index_of(&target, &sorted).is_some_and(|k| k > j) {
                total += 1;
            }
        }
    }
    debug!(n, total, "three-sum fast count");
    Ok(total)
}

/// Returns `a` widened to `i64` and sorted, or an error on duplicates.
pub(crate) fn sorted_distinct(a: &[i32]) -> AlgoResult<Vec<i64>> {
    let mut sorted: Vec<i64> = a.iter().copied().map(i64::from).collect();
    sorted.sort_unstable();
    if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
        return Err(AlgoError::DuplicateValues);
    }
    Ok(sorted)
}

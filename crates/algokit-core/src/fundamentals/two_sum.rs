// crates/algokit-core/src/fundamentals/two_sum.rs
// ============================================================================
// Module: Two-Sum Counting
// Description: Count value pairs that sum to zero.
// Purpose: Quadratic and N log N variants alongside three-sum.
// Dependencies: crate::fundamentals::three_sum
// ============================================================================

//! Pair counting shares the distinct-value precondition of
//! [`crate::fundamentals::three_sum::count_fast`].

use crate::error::AlgoResult;
use crate::fundamentals::binary_search::index_of;
use crate::fundamentals::three_sum::sorted_distinct;

/// Counts pairs `i < j` with `a[i] + a[j] == 0` in quadratic time.
#[must_use]
pub fn count(a: &[i32]) -> usize {
    let n = a.len();
    let mut total = 0;
    for i in 0 .. n {
        for j in i + 1 .. n {
            if i64::from(a[i]) + i64::from(a[j]) == 0 {
                total += 1;
            }
        }
    }
    total
}

/// Counts zero-sum pairs by sorting and binary searching for each negation.
///
/// # Errors
///
/// Returns [`crate::AlgoError::DuplicateValues`] when `a` contains a repeated
/// value.
pub fn count_fast(a: &[i32]) -> AlgoResult<usize> {
    let sorted = sorted_distinct(a)?;
    Ok((0 .. sorted.len())
        .filter(|&i| index_of(&-sorted[i], &sorted).is_some_and(|j| j > i))
        .count())
}

// crates/algokit-core/src/strings/key_indexed.rs
// ============================================================================
// Module: Key-Indexed Counting
// Description: Stable linear-time sort for small integer keys.
// Purpose: The digit pass underneath LSD string sort.
// Dependencies: crate::error
// ============================================================================

//! Counts key frequencies, turns them into starting positions and places
//! each item at the next free position for its key. Items with equal keys
//! keep their relative order.

use crate::error::AlgoError;
use crate::error::AlgoResult;

/// Sorts integer keys in `0 .. radix`.
///
/// # Errors
///
/// Returns [`AlgoError::KeyOutOfRadix`] for a key `>= radix`; `keys` is left
/// unchanged.
pub fn sort(keys: &mut [usize], radix: usize) -> AlgoResult<()> {
    sort_by_key(keys, radix, |&key| key)
}

/// Stably sorts `items` by `key(item)`, which must lie in `0 .. radix`.
///
/// # Errors
///
/// Returns [`AlgoError::KeyOutOfRadix`] for an out-of-range key; `items` is
/// left unchanged.
pub fn sort_by_key<T, F>(items: &mut [T], radix: usize, key: F) -> AlgoResult<()>
where
    T: Clone,
    F: Fn(&T) -> usize,
{
    let keys: Vec<usize> = items.iter().map(&key).collect();
    if let Some(&bad) = keys.iter().find(|&&k| k >= radix) {
        return Err(AlgoError::KeyOutOfRadix {
            key: bad,
            radix,
        });
    }
    let mut next = vec![0; radix + 1];
    for &k in &keys {
        next[k + 1] += 1;
    }
    for r in 0 .. radix {
        next[r + 1] += next[r];
    }
    let mut source = vec![0; items.len()];
    for (i, &k) in keys.iter().enumerate() {
        source[next[k]] = i;
        next[k] += 1;
    }
    let sorted: Vec<T> = source.iter().map(|&i| items[i].clone()).collect();
    items.clone_from_slice(&sorted);
    Ok(())
}

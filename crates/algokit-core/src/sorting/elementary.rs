// crates/algokit-core/src/sorting/elementary.rs
// ============================================================================
// Module: Elementary Sorts
// Description: Selection, insertion and shell sort.
// Purpose: Quadratic baselines and the insertion pass reused by cutoffs.
// Dependencies: Standard library.
// ============================================================================

//! ## Overview
//! All three sorts work in place on any `T: PartialOrd`. Incomparable values
//! (such as NaN) are treated as "not less", so they never move ahead of their
//! neighbours.

/// Returns true when `a < b`.
#[inline]
pub(crate) fn less<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

/// Repeatedly selects the minimum of the unsorted suffix.
pub fn selection<T: PartialOrd>(a: &mut [T]) {
    let n = a.len();
    for i in 0 .. n {
        let mut min = i;
        for j in i + 1 .. n {
            if less(&a[j], &a[min]) {
                min = j;
            }
        }
        a.swap(i, min);
    }
}

/// Inserts each element into the sorted prefix to its left.
pub fn insertion<T: PartialOrd>(a: &mut [T]) {
    for i in 1 .. a.len() {
        let mut j = i;
        while j > 0 && less(&a[j], &a[j - 1]) {
            a.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// H-sorts with the `3h + 1` gap sequence, finishing with an insertion pass.
pub fn shell<T: PartialOrd>(a: &mut [T]) {
    let n = a.len();
    let mut h = 1;
    while h < n / 3 {
        h = 3 * h + 1;
    }
    while h >= 1 {
        for i in h .. n {
            let mut j = i;
            while j >= h && less(&a[j], &a[j - h]) {
                a.swap(j, j - h);
                j -= h;
            }
        }
        h /= 3;
    }
}

#[cfg(test)]
mod tests {
    use super::insertion;
    use super::selection;
    use super::shell;

    #[test]
    fn empty_and_single_slices_are_untouched() {
        let mut empty: [u8; 0] = [];
        selection(&mut empty);
        insertion(&mut empty);
        shell(&mut empty);
        let mut one = [7];
        shell(&mut one);
        assert_eq!(one, [7]);
    }
}

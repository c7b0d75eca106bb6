// crates/algokit-core/src/strings/msd.rs
// ============================================================================
// Module: MSD String Sort
// Description: Most-significant-digit-first radix sort on variable-length keys.
// Purpose: General string sort that examines only distinguishing prefixes.
// Dependencies: Standard library.
// ============================================================================

//! ## Overview
//! Partitions strings by their byte at depth `d` (end of string sorts first),
//! then sorts each partition at depth `d + 1`. Partitions of at most
//! [`CUTOFF`] strings switch to insertion sort on the remaining suffixes.
//!
//! Pending partitions live on an explicit work list, so long shared
//! prefixes cannot exhaust the call stack. Byte order equals code point
//! order for UTF-8, so the result matches `str` ordering.

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Number of distinct byte values.
const RADIX: usize = 256;

/// Partitions at or below this size are insertion sorted.
pub const CUTOFF: usize = 15;

// ============================================================================
// SECTION: Sort
// ============================================================================

/// Sorts `a` in ascending byte order.
pub fn sort(a: &mut [&str]) {
    let mut aux: Vec<&str> = Vec::with_capacity(a.len());
    let mut pending = vec![(0, a.len(), 0)];
    while let Some((lo, hi, d)) = pending.pop() {
        let part = &mut a[lo .. hi];
        if part.len() <= CUTOFF {
            insertion(part, d);
            continue;
        }
        let mut count = [0_usize; RADIX + 2];
        for s in part.iter() {
            count[digit(s, d) + 1] += 1;
        }
        for r in 0 ..= RADIX {
            count[r + 1] += count[r];
        }
        let starts = count;
        aux.clear();
        aux.resize(part.len(), "");
        for &s in part.iter() {
            let key = digit(s, d);
            aux[count[key]] = s;
            count[key] += 1;
        }
        part.copy_from_slice(&aux);
        // Digit 0 marks strings that ended at depth d; they are already in place.
        for r in 1 ..= RADIX {
            let (start, end) = (starts[r], starts[r + 1]);
            if end - start > 1 {
                pending.push((lo + start, lo + end, d + 1));
            }
        }
    }
}

/// Returns the byte at depth `d` shifted up by one, or 0 past the end.
fn digit(s: &str, d: usize) -> usize {
    s.as_bytes().get(d).map_or(0, |&b| usize::from(b) + 1)
}

/// Insertion sorts `part` on the suffixes starting at byte `d`.
fn insertion(part: &mut [&str], d: usize) {
    for i in 1 .. part.len() {
        let mut j = i;
        while j > 0 && suffix(part[j], d) < suffix(part[j - 1], d) {
            part.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Returns the bytes of `s` from depth `d` on.
fn suffix(s: &str, d: usize) -> &[u8] {
    s.as_bytes().get(d ..).unwrap_or_default()
}

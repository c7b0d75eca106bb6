// crates/algokit-core/tests/proptest_sorts.rs
// ============================================================================
// Module: Sort Property-Based Tests
// Description: Property tests comparing every sort with the standard library.
// Purpose: Detect ordering and permutation bugs across wide input ranges.
// ============================================================================

//! Property-based tests for the comparison and radix sorts.
//!
//! What is covered: every named comparison sort, LSD on fixed-width keys,
//! MSD on arbitrary strings and key-indexed counting.
//! Out of scope: running-time behavior.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use algokit_core::SortAlgorithm;
use algokit_core::strings::key_indexed;
use algokit_core::strings::lsd;
use algokit_core::strings::msd;
use proptest::prelude::*;

/// Sort key paired with its input position; compares on the key only.
#[derive(Debug, Clone, Copy)]
struct Keyed(u8, usize);

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Exposes both fields so equality also checks input positions.
fn fields(records: &[Keyed]) -> Vec<(u8, usize)> {
    records.iter().map(|record| (record.0, record.1)).collect()
}

proptest! {
    #[test]
    fn every_algorithm_matches_std_sort(values in prop::collection::vec(any::<i32>(), 0 .. 200)) {
        let mut expected = values.clone();
        expected.sort_unstable();
        for algorithm in SortAlgorithm::ALL {
            let mut sorted = values.clone();
            algorithm.apply(&mut sorted);
            prop_assert_eq!(&sorted, &expected, "{} disagrees", algorithm);
        }
    }

    #[test]
    fn stable_algorithms_match_std_stable_sort(keys in prop::collection::vec(0_u8 .. 4, 0 .. 120)) {
        let records: Vec<Keyed> =
            keys.iter().zip(0 ..).map(|(&key, seq)| Keyed(key, seq)).collect();
        let mut expected = records.clone();
        expected.sort_by_key(|record| record.0);
        let expected = fields(&expected);
        for algorithm in SortAlgorithm::ALL.into_iter().filter(|a| a.is_stable()) {
            let mut sorted = records.clone();
            algorithm.apply(&mut sorted);
            prop_assert_eq!(fields(&sorted), expected.clone(), "{} is not stable", algorithm);
        }
    }

    #[test]
    fn msd_matches_std_sort(words in prop::collection::vec(".{0,12}", 0 .. 80)) {
        let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
        let mut expected = sorted.clone();
        expected.sort_unstable();
        msd::sort(&mut sorted);
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn lsd_matches_std_stable_sort(words in prop::collection::vec("[a-c]{4}", 0 .. 80)) {
        let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
        let mut expected = sorted.clone();
        expected.sort();
        lsd::sort(&mut sorted, 4).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn key_indexed_matches_std_sort(mut keys in prop::collection::vec(0_usize .. 16, 0 .. 100)) {
        let mut expected = keys.clone();
        expected.sort_unstable();
        key_indexed::sort(&mut keys, 16).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(keys, expected);
    }
}

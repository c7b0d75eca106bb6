// crates/algokit-core/tests/sorting.rs
// ============================================================================
// Module: Sorting Tests
// Description: Behavior of the named sorts and the priority queues.
// Purpose: Check ordering, stability claims and queue error reporting.
// Dependencies: algokit_core::sorting, rand
// ============================================================================
//! ## Overview
//! Runs every [`SortAlgorithm`] over shared inputs, checks that the
//! algorithms advertised as stable really are, and drives the heap-based
//! queues through their full interface.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod support;

use std::cmp::Ordering;

use algokit_core::AlgoError;
use algokit_core::SortAlgorithm;
use algokit_core::sorting::IndexMinPq;
use algokit_core::sorting::MaxPq;
use algokit_core::sorting::MinPq;
use algokit_core::sorting::is_sorted;
use algokit_core::sorting::quick;
use rand::SeedableRng;
use rand::rngs::StdRng;
use support::TestResult;
use support::ensure;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Record ordered by `key` only, so ties reveal reordering.
#[derive(Debug, Clone)]
struct Tagged {
    /// Sort key.
    key: u8,
    /// Input position.
    seq: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

/// Builds tagged records with many duplicate keys.
fn tagged() -> Vec<Tagged> {
    (0 .. 200)
        .map(|seq| Tagged {
            key: u8::try_from((seq * 7) % 5).unwrap_or(0),
            seq,
        })
        .collect()
}

// ============================================================================
// SECTION: Sort Algorithms
// ============================================================================

/// Every algorithm sorts the classic example.
#[test]
fn every_algorithm_sorts_letters() -> TestResult {
    let input: Vec<char> = "SORTEXAMPLE".chars().collect();
    let mut expected = input.clone();
    expected.sort_unstable();
    for algorithm in SortAlgorithm::ALL {
        let mut letters = input.clone();
        algorithm.apply(&mut letters);
        ensure(letters == expected, format!("{algorithm} sorts SORTEXAMPLE"))?;
    }
    Ok(())
}

/// Empty, single and duplicate-only inputs are handled.
#[test]
fn degenerate_inputs() -> TestResult {
    for algorithm in SortAlgorithm::ALL {
        let mut empty: Vec<i32> = Vec::new();
        algorithm.apply(&mut empty);
        let mut single = vec![42];
        algorithm.apply(&mut single);
        let mut same = vec![7; 64];
        algorithm.apply(&mut same);
        ensure(empty.is_empty() && single == [42], format!("{algorithm}: tiny inputs"))?;
        ensure(same == vec![7; 64], format!("{algorithm}: all equal keys"))?;
    }
    Ok(())
}

/// Algorithms that report stability keep equal keys in input order.
#[test]
fn stable_algorithms_keep_tie_order() -> TestResult {
    for algorithm in SortAlgorithm::ALL.into_iter().filter(|a| a.is_stable()) {
        let mut records = tagged();
        algorithm.apply(&mut records);
        ensure(is_sorted(&records), format!("{algorithm}: sorted"))?;
        let stable = records
            .windows(2)
            .all(|pair| pair[0].key < pair[1].key || pair[0].seq < pair[1].seq);
        ensure(stable, format!("{algorithm}: ties keep input order"))?;
    }
    Ok(())
}

/// Seeded Hoare quicksort is reproducible.
#[test]
fn seeded_quicksort() -> TestResult {
    let input: Vec<u32> = (0 .. 500).map(|i| (i * 7919) % 1009).collect();
    let mut first = input.clone();
    quick::hoare_with_rng(&mut first, &mut StdRng::seed_from_u64(7));
    let mut second = input;
    quick::hoare_with_rng(&mut second, &mut StdRng::seed_from_u64(99));
    ensure(is_sorted(&first) && first == second, "any seed yields the same sorted output")?;
    Ok(())
}

/// Names parse back to the same algorithm.
#[test]
fn algorithm_names() -> TestResult {
    for algorithm in SortAlgorithm::ALL {
        let parsed: SortAlgorithm = algorithm.as_str().parse()?;
        ensure(parsed == algorithm, format!("{algorithm} parses"))?;
    }
    ensure(
        matches!("bogo".parse::<SortAlgorithm>(), Err(AlgoError::UnknownName { .. })),
        "unknown name is rejected",
    )?;
    ensure(SortAlgorithm::default() == SortAlgorithm::MergeTopDown, "default is top-down merge")?;
    Ok(())
}

/// Floats containing NaN do not break the sorts.
#[test]
fn nan_does_not_panic() -> TestResult {
    for algorithm in SortAlgorithm::ALL {
        let mut values = vec![3.0, f64::NAN, 1.0, 2.0, f64::NAN, 0.5];
        algorithm.apply(&mut values);
        ensure(values.len() == 6, format!("{algorithm}: length preserved"))?;
        let nans = values.iter().filter(|v| v.is_nan()).count();
        ensure(nans == 2, format!("{algorithm}: NaNs kept"))?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Priority Queues
// ============================================================================

/// Max and min queues drain in opposite orders.
#[test]
fn heap_priority_queues() -> TestResult {
    let mut max = MaxPq::new();
    let mut min = MinPq::new();
    for letter in "PRIORITYQUEUE".chars() {
        max.insert(letter);
        min.insert(letter);
    }
    ensure(max.max() == Some(&'Y') && min.min() == Some(&'E'), "extremes")?;
    let descending: String = std::iter::from_fn(|| max.del_max()).collect();
    let ascending: String = std::iter::from_fn(|| min.del_min()).collect();
    ensure(descending == "YUUTRRQPOIIEE", "max queue drains descending")?;
    ensure(ascending == "EEIIOPQRRTUUY", "min queue drains ascending")?;
    ensure(max.is_empty() && max.del_max().is_none(), "drained max queue")?;
    Ok(())
}

/// Indexed queue supports key changes and reports misuse.
#[test]
fn index_min_pq_operations() -> TestResult {
    let mut pq = IndexMinPq::new(10);
    for (i, key) in ["it", "was", "the", "best", "of", "times"].into_iter().enumerate() {
        pq.insert(i, key)?;
    }
    ensure(pq.min_index() == Some(3) && pq.min_key() == Some(&"best"), "best is smallest")?;
    ensure(pq.insert(3, "again") == Err(AlgoError::DuplicateIndex { index: 3 }), "duplicate")?;
    ensure(
        pq.insert(10, "x")
            == Err(AlgoError::IndexOutOfBounds {
                index: 10,
                bound: 10,
            }),
        "index beyond capacity",
    )?;
    pq.decrease_key(5, "a")?;
    ensure(pq.min_index() == Some(5), "decreased key rises to the top")?;
    ensure(pq.decrease_key(5, "z") == Err(AlgoError::KeyNotDecreased { index: 5 }), "not lower")?;
    pq.increase_key(5, "zz")?;
    ensure(pq.increase_key(5, "a") == Err(AlgoError::KeyNotIncreased { index: 5 }), "not higher")?;
    pq.change_key(1, "aa")?;
    ensure(pq.delete(1)? == "aa" && !pq.contains(1), "delete returns the key")?;
    ensure(pq.delete(1) == Err(AlgoError::MissingIndex { index: 1 }), "delete twice")?;
    let order: Vec<usize> = std::iter::from_fn(|| pq.del_min()).collect();
    ensure(order == [3, 0, 4, 2, 5], "remaining indices drain by key")?;
    ensure(pq.is_empty() && pq.key_of(3).is_none(), "drained queue")?;
    Ok(())
}

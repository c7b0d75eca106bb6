// crates/algokit-core/tests/proptest_tables.rs
// ============================================================================
// Module: Symbol Table Property-Based Tests
// Description: Model-based tests of every table against a BTreeMap.
// Purpose: Detect divergence under arbitrary put and delete sequences.
// ============================================================================

//! Property-based tests for symbol table behavior.
//!
//! What is covered: every [`TableKind`] replaying random operations next to a
//! `BTreeMap` model, plus rank queries on the ordered tables.
//! Out of scope: hash distribution quality.

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

use std::collections::BTreeMap;

use algokit_core::TableKind;
use algokit_core::searching::OrderedSymbolTable;
use algokit_core::searching::RedBlackBst;
use algokit_core::searching::SymbolTable;
use proptest::prelude::*;

/// One table operation.
#[derive(Debug, Clone)]
enum Op {
    /// Insert or replace.
    Put(u8, u16),
    /// Remove if present.
    Delete(u8),
}

/// Strategy producing mixed operations over a small key space.
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<u8>(), any::<u16>()).prop_map(|(key, value)| Op::Put(key % 64, value)),
        1 => any::<u8>().prop_map(|key| Op::Delete(key % 64)),
    ]
}

proptest! {
    #[test]
    fn tables_match_btree_model(ops in prop::collection::vec(op_strategy(), 0 .. 300)) {
        for kind in TableKind::ALL {
            let mut table = kind.build::<u8, u16>();
            let mut model = BTreeMap::new();
            for op in &ops {
                match *op {
                    Op::Put(key, value) => {
                        prop_assert_eq!(table.put(key, value), model.insert(key, value));
                    }
                    Op::Delete(key) => {
                        prop_assert_eq!(table.delete(&key), model.remove(&key));
                    }
                }
                prop_assert_eq!(table.len(), model.len(), "{} size", kind);
            }
            for key in 0 .. 64 {
                prop_assert_eq!(table.get(&key), model.get(&key), "{} get {}", kind, key);
            }
            let mut keys: Vec<u8> = table.keys().into_iter().copied().collect();
            if !kind.is_ordered() {
                keys.sort_unstable();
            }
            prop_assert_eq!(keys, model.keys().copied().collect::<Vec<_>>(), "{} keys", kind);
        }
    }

    #[test]
    fn rank_and_select_agree(
        keys in prop::collection::btree_set(any::<i16>(), 1 .. 100),
        query in any::<i16>(),
    ) {
        let mut table = RedBlackBst::new();
        for &key in &keys {
            table.put(key, ());
        }
        let sorted: Vec<i16> = keys.iter().copied().collect();
        let rank = table.rank(&query);
        prop_assert_eq!(rank, sorted.iter().filter(|&&key| key < query).count());
        for (i, key) in sorted.iter().enumerate() {
            prop_assert_eq!(table.select(i), Some(key));
            prop_assert_eq!(table.rank(key), i);
        }
        prop_assert_eq!(table.floor(&query), sorted.iter().rev().find(|&&key| key <= query));
        prop_assert_eq!(table.ceiling(&query), sorted.iter().find(|&&key| key >= query));
    }
}

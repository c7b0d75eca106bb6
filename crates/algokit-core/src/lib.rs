// crates/algokit-core/src/lib.rs
// ============================================================================
// Module: algokit Core Library
// Description: Public API surface for the algokit algorithms library.
// Purpose: Expose data structures and algorithms grouped by topic.
// Dependencies: crate::{error, fundamentals, sorting, searching, graphs, strings}
// ============================================================================

//! ## Overview
//! algokit core collects the classic algorithms and data structures:
//! stacks, queues and union-find ([`fundamentals`]), comparison sorts and
//! priority queues ([`sorting`]), symbol tables ([`searching`]), graph
//! processing ([`graphs`]) and radix sorts ([`strings`]).
//!
//! Operations never panic on caller input. Mutations and constructors that
//! would otherwise index out of range return [`AlgoError`]; read-only
//! queries answer `None`, `false` or an empty collection.

#![cfg_attr(
    test,
    allow(
        clippy::panic_in_result_fn,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions run inside Result-returning tests."
    )
)]

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod fundamentals;
pub mod graphs;
pub mod searching;
pub mod sorting;
pub mod strings;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::AlgoError;
pub use error::AlgoResult;
pub use fundamentals::UnionFindAlgorithm;
pub use graphs::GraphLimits;
pub use searching::TableKind;
pub use sorting::SortAlgorithm;

// crates/algokit-core/src/fundamentals/mod.rs
// ============================================================================
// Module: Fundamentals
// Description: Bags, stacks, queues and the first client programs.
// Purpose: Building blocks reused by the sorting, searching and graph modules.
// Dependencies: crate::error
// ============================================================================

//! ## Overview
//! Collections ([`VecStack`], [`ResizingStack`], [`LinkedStack`],
//! [`FixedCapacityStack`], [`Queue`]), small clients ([`evaluate()`],
//! [`Transaction`], k-sum counting) and [`UnionFind`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod binary_search;
pub mod evaluate;
pub mod linked_stack;
pub mod queue;
pub mod resizing_stack;
pub mod stack;
pub mod three_sum;
pub mod transaction;
pub mod two_sum;
pub mod union_find;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use evaluate::EvalError;
pub use evaluate::evaluate;
pub use linked_stack::LinkedStack;
pub use queue::Queue;
pub use resizing_stack::ResizingStack;
pub use stack::FixedCapacityStack;
pub use stack::VecStack;
pub use transaction::Transaction;
pub use union_find::QuickFind;
pub use union_find::QuickUnion;
pub use union_find::UnionFind;
pub use union_find::UnionFindAlgorithm;
pub use union_find::WeightedQuickUnion;

// crates/algokit-core/src/searching/mod.rs
// ============================================================================
// Module: Searching
// Description: Symbol tables from linked lists to balanced trees and hashing.
// Purpose: Interchangeable key-value tables behind shared traits.
// Dependencies: serde, crate::error
// ============================================================================

//! ## Overview
//! Every table implements [`SymbolTable`]; the ordered ones
//! ([`BinarySearchSt`], [`Bst`], [`RedBlackBst`]) also implement
//! [`OrderedSymbolTable`]. [`TableKind`] picks an implementation at runtime.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod avl;
pub mod binary_search_st;
pub mod bst;
mod hashing;
pub mod linear_probing;
pub mod red_black;
pub mod separate_chaining;
pub mod sequential;
pub mod table;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::AlgoError;

pub use avl::AvlTree;
pub use binary_search_st::BinarySearchSt;
pub use bst::Bst;
pub use linear_probing::LinearProbingHashSt;
pub use red_black::RedBlackBst;
pub use red_black::RedBlackViolation;
pub use separate_chaining::SeparateChainingHashSt;
pub use sequential::SequentialSearchSt;
pub use table::OrderedSymbolTable;
pub use table::SymbolTable;

// ============================================================================
// SECTION: Table Selection
// ============================================================================

/// Named symbol table implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// [`SequentialSearchSt`].
    Sequential,
    /// [`BinarySearchSt`].
    BinarySearch,
    /// [`Bst`].
    Bst,
    /// [`AvlTree`].
    Avl,
    /// [`RedBlackBst`].
    #[default]
    RedBlack,
    /// [`SeparateChainingHashSt`].
    SeparateChaining,
    /// [`LinearProbingHashSt`].
    LinearProbing,
}

impl TableKind {
    /// Every table kind, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Sequential,
        Self::BinarySearch,
        Self::Bst,
        Self::Avl,
        Self::RedBlack,
        Self::SeparateChaining,
        Self::LinearProbing,
    ];

    /// Returns the stable snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::BinarySearch => "binary_search",
            Self::Bst => "bst",
            Self::Avl => "avl",
            Self::RedBlack => "red_black",
            Self::SeparateChaining => "separate_chaining",
            Self::LinearProbing => "linear_probing",
        }
    }

    /// Returns true when [`SymbolTable::keys`] yields keys in ascending order.
    #[must_use]
    pub const fn is_ordered(self) -> bool {
        !matches!(self, Self::Sequential | Self::SeparateChaining | Self::LinearProbing)
    }

    /// Builds an empty table of this kind.
    #[must_use]
    pub fn build<K, V>(self) -> Box<dyn SymbolTable<K, V>>
    where
        K: Ord + Hash + 'static,
        V: 'static,
    {
        match self {
            Self::Sequential => Box::new(SequentialSearchSt::new()),
            Self::BinarySearch => Box::new(BinarySearchSt::new()),
            Self::Bst => Box::new(Bst::new()),
            Self::Avl => Box::new(AvlTree::new()),
            Self::RedBlack => Box::new(RedBlackBst::new()),
            Self::SeparateChaining => Box::new(SeparateChainingHashSt::new()),
            Self::LinearProbing => Box::new(LinearProbingHashSt::new()),
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableKind {
    type Err = AlgoError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name).ok_or_else(|| {
            AlgoError::UnknownName {
                kind: "symbol table",
                name: name.to_string(),
            }
        })
    }
}

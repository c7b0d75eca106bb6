// crates/algokit-core/src/sorting/mod.rs
// ============================================================================
// Module: Sorting
// Description: Comparison sorts and priority queues.
// Purpose: Expose every sort by name for configuration-driven dispatch.
// Dependencies: serde, crate::error
// ============================================================================

//! ## Overview
//! Sorts are free functions over `&mut [T]`. [`SortAlgorithm`] names each one
//! so callers (and `algokit.toml`) can pick an algorithm at runtime.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod elementary;
pub mod heap;
pub mod index_min_pq;
pub mod merge;
pub mod pq;
pub mod quick;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::AlgoError;

pub use index_min_pq::IndexMinPq;
pub use pq::MaxPq;
pub use pq::MinPq;

// ============================================================================
// SECTION: Algorithm Selection
// ============================================================================

/// Named sorting algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    /// [`elementary::selection`].
    Selection,
    /// [`elementary::insertion`].
    Insertion,
    /// [`elementary::shell`].
    Shell,
    /// [`merge::top_down`].
    #[default]
    MergeTopDown,
    /// [`merge::bottom_up`].
    MergeBottomUp,
    /// [`merge::by_halves`].
    MergeByHalves,
    /// [`quick::hoare`].
    QuickHoare,
    /// [`quick::lomuto`].
    QuickLomuto,
    /// [`quick::midpoint`].
    QuickMidpoint,
    /// [`quick::three_way`].
    QuickThreeWay,
    /// [`heap::sort`].
    Heap,
}

impl SortAlgorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Selection,
        Self::Insertion,
        Self::Shell,
        Self::MergeTopDown,
        Self::MergeBottomUp,
        Self::MergeByHalves,
        Self::QuickHoare,
        Self::QuickLomuto,
        Self::QuickMidpoint,
        Self::QuickThreeWay,
        Self::Heap,
    ];

    /// Returns the stable snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Shell => "shell",
            Self::MergeTopDown => "merge_top_down",
            Self::MergeBottomUp => "merge_bottom_up",
            Self::MergeByHalves => "merge_by_halves",
            Self::QuickHoare => "quick_hoare",
            Self::QuickLomuto => "quick_lomuto",
            Self::QuickMidpoint => "quick_midpoint",
            Self::QuickThreeWay => "quick_three_way",
            Self::Heap => "heap",
        }
    }

    /// Returns true for algorithms that keep equal keys in input order.
    #[must_use]
    pub const fn is_stable(self) -> bool {
        matches!(
            self,
            Self::Insertion | Self::MergeTopDown | Self::MergeBottomUp | Self::MergeByHalves
        )
    }

    /// Sorts `a` in place with this algorithm.
    pub fn apply<T: PartialOrd + Clone>(self, a: &mut [T]) {
        match self {
            Self::Selection => elementary::selection(a),
            Self::Insertion => elementary::insertion(a),
            Self::Shell => elementary::shell(a),
            Self::MergeTopDown => merge::top_down(a),
            Self::MergeBottomUp => merge::bottom_up(a),
            Self::MergeByHalves => merge::by_halves(a),
            Self::QuickHoare => quick::hoare(a),
            Self::QuickLomuto => quick::lomuto(a),
            Self::QuickMidpoint => quick::midpoint(a),
            Self::QuickThreeWay => quick::three_way(a),
            Self::Heap => heap::sort(a),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortAlgorithm {
    type Err = AlgoError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|algorithm| algorithm.as_str() == name).ok_or_else(|| {
            AlgoError::UnknownName {
                kind: "sort algorithm",
                name: name.to_string(),
            }
        })
    }
}

/// Returns true when `a` is in ascending order.
#[must_use]
pub fn is_sorted<T: PartialOrd>(a: &[T]) -> bool {
    a.windows(2).all(|pair| !elementary::less(&pair[1], &pair[0]))
}

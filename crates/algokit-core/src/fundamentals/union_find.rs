// crates/algokit-core/src/fundamentals/union_find.rs
// ============================================================================
// Module: Union-Find
// Description: Dynamic connectivity over sites `0 .. n`.
// Purpose: Quick-find, quick-union and weighted quick-union behind one trait.
// Dependencies: serde, crate::error
// ============================================================================

//! ## Overview
//! All three implementations share the [`UnionFind`] contract: `union`
//! merges the components containing two sites and reports whether they were
//! previously separate; `count` tracks the number of components.
//!
//! ## Invariants
//! - `count()` starts at `n` and drops by one on every merging `union`.
//! - Site arguments outside `0 .. n` are rejected, never clamped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::AlgoError;
use crate::error::AlgoResult;
use crate::error::check_index;

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Dynamic connectivity contract.
pub trait UnionFind {
    /// Returns the number of sites.
    fn len(&self) -> usize;

    /// Returns true when there are no sites.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of components.
    fn count(&self) -> usize;

    /// Returns the component identifier for site `p`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::IndexOutOfBounds`] when `p` is not a site.
    fn find(&self, p: usize) -> AlgoResult<usize>;

    /// Returns true when `p` and `q` are in the same component.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::IndexOutOfBounds`] when either is not a site.
    fn connected(&self, p: usize, q: usize) -> AlgoResult<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Merges the components of `p` and `q`; returns true if they were distinct.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoError::IndexOutOfBounds`] when either is not a site.
    fn union(&mut self, p: usize, q: usize) -> AlgoResult<bool>;
}

// ============================================================================
// SECTION: Quick Find
// ============================================================================

/// Eager approach: every site stores its component id directly.
#[derive(Debug, Clone)]
pub struct QuickFind {
    /// Component id per site.
    id: Vec<usize>,
    /// Number of components.
    count: usize,
}

impl QuickFind {
    /// Creates `n` singleton components.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            id: (0 .. n).collect(),
            count: n,
        }
    }
}

impl UnionFind for QuickFind {
    fn len(&self) -> usize {
        self.id.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&self, p: usize) -> AlgoResult<usize> {
        check_index(p, self.id.len())?;
        Ok(self.id[p])
    }

    fn union(&mut self, p: usize, q: usize) -> AlgoResult<bool> {
        let p_id = self.find(p)?;
        let q_id = self.find(q)?;
        if p_id == q_id {
            return Ok(false);
        }
        for id in &mut self.id {
            if *id == p_id {
                *id = q_id;
            }
        }
        self.count -= 1;
        Ok(true)
    }
}

// ============================================================================
// SECTION: Quick Union
// ============================================================================

/// Lazy approach: sites form a forest of parent links.
#[derive(Debug, Clone)]
pub struct QuickUnion {
    /// Parent link per site; roots point to themselves.
    parent: Vec<usize>,
    /// Number of components.
    count: usize,
}

impl QuickUnion {
    /// Creates `n` singleton components.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0 .. n).collect(),
            count: n,
        }
    }
}

impl UnionFind for QuickUnion {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&self, p: usize) -> AlgoResult<usize> {
        check_index(p, self.parent.len())?;
        Ok(root(&self.parent, p))
    }

    fn union(&mut self, p: usize, q: usize) -> AlgoResult<bool> {
        let p_root = self.find(p)?;
        let q_root = self.find(q)?;
        if p_root == q_root {
            return Ok(false);
        }
        self.parent[p_root] = q_root;
        self.count -= 1;
        Ok(true)
    }
}

// ============================================================================
// SECTION: Weighted Quick Union
// ============================================================================

/// Quick union that links the smaller tree under the larger one.
///
/// # Invariants
/// - Tree height is at most `lg n`.
#[derive(Debug, Clone)]
pub struct WeightedQuickUnion {
    /// Parent link per site; roots point to themselves.
    parent: Vec<usize>,
    /// Tree size, meaningful only at roots.
    size: Vec<usize>,
    /// Number of components.
    count: usize,
}

impl WeightedQuickUnion {
    /// Creates `n` singleton components.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0 .. n).collect(),
            size: vec![1; n],
            count: n,
        }
    }
}

impl UnionFind for WeightedQuickUnion {
    fn len(&self) -> usize {
        self.parent.len()
    }

    fn count(&self) -> usize {
        self.count
    }

    fn find(&self, p: usize) -> AlgoResult<usize> {
        check_index(p, self.parent.len())?;
        Ok(root(&self.parent, p))
    }

    fn union(&mut self, p: usize, q: usize) -> AlgoResult<bool> {
        let p_root = self.find(p)?;
        let q_root = self.find(q)?;
        if p_root == q_root {
            return Ok(false);
        }
        let (small, large) =
            if self.size[p_root] < self.size[q_root] { (p_root, q_root) } else { (q_root, p_root) };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.count -= 1;
        Ok(true)
    }
}

/// Follows parent links from `p` to its root.
fn root(parent: &[usize], mut p: usize) -> usize {
    while parent[p] != p {
        p = parent[p];
    }
    p
}

// ============================================================================
// SECTION: Algorithm Selection
// ============================================================================

/// Named union-find implementation, selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnionFindAlgorithm {
    /// [`QuickFind`].
    QuickFind,
    /// [`QuickUnion`].
    QuickUnion,
    /// [`WeightedQuickUnion`].
    #[default]
    WeightedQuickUnion,
}

impl UnionFindAlgorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Self; 3] = [Self::QuickFind, Self::QuickUnion, Self::WeightedQuickUnion];

    /// Returns the stable snake-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QuickFind => "quick_find",
            Self::QuickUnion => "quick_union",
            Self::WeightedQuickUnion => "weighted_quick_union",
        }
    }

    /// Builds an implementation over `n` sites.
    #[must_use]
    pub fn build(self, n: usize) -> Box<dyn UnionFind> {
        match self {
            Self::QuickFind => Box::new(QuickFind::new(n)),
            Self::QuickUnion => Box::new(QuickUnion::new(n)),
            Self::WeightedQuickUnion => Box::new(WeightedQuickUnion::new(n)),
        }
    }
}

impl fmt::Display for UnionFindAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnionFindAlgorithm {
    type Err = AlgoError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|algorithm| algorithm.as_str() == name).ok_or_else(|| {
            AlgoError::UnknownName {
                kind: "union-find algorithm",
                name: name.to_string(),
            }
        })
    }
}

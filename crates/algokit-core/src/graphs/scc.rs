// crates/algokit-core/src/graphs/scc.rs
// ============================================================================
// Module: Strong Components
// Description: Kosaraju-Sharir and quadratic strong-component labeling.
// Purpose: Group digraph vertices that are mutually reachable.
// Dependencies: crate::graphs
// ============================================================================

//! ## Overview
//! [`KosarajuScc`] runs one depth-first sweep over the reverse digraph and a
//! second over the digraph in the first sweep's reverse postorder; each tree
//! of the second sweep is a strong component. [`NaiveScc`] intersects the
//! forward and backward reachable sets of every unlabeled vertex and serves
//! as a reference for the linear-time version.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::graphs::digraph::Digraph;
use crate::graphs::order::DepthFirstOrder;
use crate::graphs::search::DepthFirstSearch;
use crate::graphs::traverse::Visit;
use crate::graphs::traverse::depth_first;

// ============================================================================
// SECTION: Kosaraju-Sharir
// ============================================================================

/// Strong components in linear time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KosarajuScc {
    /// Component id per vertex.
    id: Vec<usize>,
    /// Number of components.
    count: usize,
}

impl KosarajuScc {
    /// Labels the strong components of `digraph`.
    #[must_use]
    pub fn new(digraph: &Digraph) -> Self {
        let n = digraph.v();
        let order = DepthFirstOrder::new(&digraph.reverse());
        let mut marked = vec![false; n];
        let mut id = vec![0; n];
        let mut count = 0;
        for s in order.reverse_post() {
            if marked[s] {
                continue;
            }
            depth_first(digraph, s, &mut marked, |step| {
                if let Visit::Enter {
                    vertex,
                    ..
                } = step
                {
                    id[vertex] = count;
                }
            });
            count += 1;
        }
        Self {
            id,
            count,
        }
    }

    /// Returns the number of strong components.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the component of `v`.
    #[must_use]
    pub fn id(&self, v: usize) -> Option<usize> {
        self.id.get(v).copied()
    }

    /// Returns true when `v` and `w` reach each other.
    #[must_use]
    pub fn strongly_connected(&self, v: usize, w: usize) -> bool {
        matches!((self.id(v), self.id(w)), (Some(a), Some(b)) if a == b)
    }
}

// ============================================================================
// SECTION: Quadratic Reference
// ============================================================================

/// Strong components by pairwise reachability, in quadratic time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaiveScc {
    /// Component id per vertex.
    id: Vec<usize>,
    /// Number of components.
    count: usize,
}

impl NaiveScc {
    /// Labels the strong components of `digraph`.
    #[must_use]
    pub fn new(digraph: &Digraph) -> Self {
        let n = digraph.v();
        let reverse = digraph.reverse();
        let mut id: Vec<Option<usize>> = vec![None; n];
        let mut count = 0;
        for s in 0 .. n {
            if id[s].is_some() {
                continue;
            }
            let (Ok(reachable), Ok(reaching)) =
                (DepthFirstSearch::new(digraph, s), DepthFirstSearch::new(&reverse, s))
            else {
                continue;
            };
            for (v, label) in id.iter_mut().enumerate() {
                if reachable.marked(v) && reaching.marked(v) {
                    *label = Some(count);
                }
            }
            count += 1;
        }
        Self {
            id: id.into_iter().map(|label| label.unwrap_or(0)).collect(),
            count,
        }
    }

    /// Returns the number of strong components.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the component of `v`.
    #[must_use]
    pub fn id(&self, v: usize) -> Option<usize> {
        self.id.get(v).copied()
    }

    /// Returns true when `v` and `w` reach each other.
    #[must_use]
    pub fn strongly_connected(&self, v: usize, w: usize) -> bool {
        matches!((self.id(v), self.id(w)), (Some(a), Some(b)) if a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::KosarajuScc;
    use super::NaiveScc;
    use crate::error::AlgoError;
    use crate::graphs::digraph::Digraph;

    #[test]
    fn both_agree_on_two_loops() -> Result<(), AlgoError> {
        let mut digraph = Digraph::new(5);
        for (v, w) in [(0, 1), (1, 0), (1, 2), (2, 3), (3, 4), (4, 2)] {
            digraph.add_edge(v, w)?;
        }
        let fast = KosarajuScc::new(&digraph);
        let slow = NaiveScc::new(&digraph);
        assert_eq!(fast.count(), 2);
        assert_eq!(slow.count(), 2);
        for v in 0 .. 5 {
            for w in 0 .. 5 {
                assert_eq!(fast.strongly_connected(v, w), slow.strongly_connected(v, w));
            }
        }
        assert!(!fast.strongly_connected(1, 2));
        Ok(())
    }
}

// crates/algokit-core/src/graphs/generator.rs
// ============================================================================
// Module: Graph Generators
// Description: Random graph construction.
// Purpose: Produce test inputs with known structural properties.
// Dependencies: rand, crate::error, crate::graphs::graph
// ============================================================================

//! Random graphs driven by a caller-supplied [`rand::Rng`], so seeded
//! generators reproduce the same graph.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::AlgoError;
use crate::error::AlgoResult;
use crate::graphs::graph::Graph;

/// Returns a random simple bipartite graph with `v1` vertices on one side,
/// `v2` on the other and `e` edges.
///
/// Vertex labels are shuffled, so the two sides are not contiguous ranges.
///
/// # Errors
///
/// Returns [`AlgoError::CapacityExceeded`] when `e > v1 * v2`, since a simple
/// bipartite graph cannot hold more edges.
pub fn bipartite<R: Rng + ?Sized>(
    v1: usize,
    v2: usize,
    e: usize,
    rng: &mut R,
) -> AlgoResult<Graph> {
    let capacity = v1.saturating_mul(v2);
    if e > capacity {
        return Err(AlgoError::CapacityExceeded {
            capacity,
        });
    }
    let mut labels: Vec<usize> = (0 .. v1 + v2).collect();
    labels.shuffle(rng);
    let mut graph = Graph::new(v1 + v2);
    let mut seen = HashSet::with_capacity(e);
    while graph.e() < e {
        let left = rng.gen_range(0 .. v1);
        let right = v1 + rng.gen_range(0 .. v2);
        if seen.insert((left, right)) {
            graph.add_edge(labels[left], labels[right])?;
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::bipartite;
    use crate::error::AlgoError;
    use crate::graphs::search::Bipartite;

    #[test]
    fn generated_graph_is_bipartite() -> Result<(), AlgoError> {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = bipartite(5, 6, 20, &mut rng)?;
        assert_eq!(graph.v(), 11);
        assert_eq!(graph.e(), 20);
        assert!(Bipartite::new(&graph).is_bipartite());
        Ok(())
    }

    #[test]
    fn complete_bipartite_is_reachable() -> Result<(), AlgoError> {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = bipartite(3, 4, 12, &mut rng)?;
        assert_eq!(graph.max_degree(), 4);
        Ok(())
    }

    #[test]
    fn rejects_too_many_edges() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            bipartite(2, 3, 7, &mut rng).map(|graph| graph.e()),
            Err(AlgoError::CapacityExceeded {
                capacity: 6,
            })
        );
    }
}

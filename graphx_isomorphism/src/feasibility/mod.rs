//! Candidate generation and syntactic feasibility, one rule set per
//! orientation.
//!
//! Rules see graphs only through their [`Adjacency`] and never mutate the
//! search state. Every check returns a plain `bool`.

mod directed;
mod undirected;

pub use directed::Directed;
pub use undirected::Undirected;

use graphx_common::MatchMode;

use crate::graph_index::{Adjacency, NeighbourMap};
use crate::state::SearchState;

/// Read-only view handed to a rule set.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    pub g1: &'a Adjacency,
    pub g2: &'a Adjacency,
    pub state: &'a SearchState,
    pub mode: MatchMode,
}

/// Orientation-specific VF2 rule set.
pub trait FeasibilityRules {
    /// Orientation both input graphs must have.
    const DIRECTED: bool;

    /// Ordered candidate pairs `(g1_node, g2_node)` for extending the
    /// current partial mapping. Every pair uses the same G2 node.
    ///
    /// G1 frontier nodes are listed in index order, not in the order they
    /// joined the frontier, so mappings come out in a different (still
    /// deterministic) order than frontier-insertion-order VF2 variants.
    fn candidate_pairs(ctx: &RuleContext<'_>) -> Vec<(usize, usize)>;

    /// Structural test for adding `(g1_node, g2_node)` to the mapping.
    fn syntactic_feasibility(ctx: &RuleContext<'_>, g1_node: usize, g2_node: usize) -> bool;
}

/// Pairs every node of `g1_nodes` with `g2_node`.
fn pair_with(g1_nodes: impl Iterator<Item = usize>, g2_node: usize) -> Vec<(usize, usize)> {
    g1_nodes.map(|g1_node| (g1_node, g2_node)).collect()
}

/// Fallback when the frontiers cannot drive the choice: every unmapped G1
/// node against the first unmapped G2 node.
fn unrestricted_pairs(state: &SearchState) -> Vec<(usize, usize)> {
    match state.g2.unmapped().next() {
        Some(g2_node) => pair_with(state.g1.unmapped(), g2_node),
        None => Vec::new(),
    }
}

/// Mapped neighbours on both sides must correspond, with equal edge
/// multiplicity (at least the G2 multiplicity in `Mono` mode).
///
/// `g1_nbrs` and `g2_nbrs` are the candidate nodes' neighbour maps in the
/// same direction. Monomorphism only checks the G2 side, so extra G1 edges
/// between mapped nodes are allowed.
fn mapped_neighbours_agree(
    state: &SearchState,
    mode: MatchMode,
    g1_nbrs: &NeighbourMap,
    g2_nbrs: &NeighbourMap,
) -> bool {
    if mode != MatchMode::Mono {
        for (&nbr, &m1) in g1_nbrs {
            let Some(image) = state.g1.core[nbr] else {
                continue;
            };
            if g2_nbrs.get(&image) != Some(&m1) {
                return false;
            }
        }
    }

    for (&nbr, &m2) in g2_nbrs {
        let Some(preimage) = state.g2.core[nbr] else {
            continue;
        };
        match g1_nbrs.get(&preimage) {
            Some(&m1) if mode.edge_count_ok(m1, m2) => {}
            _ => return false,
        }
    }
    true
}

#[inline]
fn count_where(nbrs: &NeighbourMap, pred: impl Fn(usize) -> bool) -> usize {
    nbrs.keys().filter(|&&n| pred(n)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_index::GraphIndex;
    use crate::state::commit;
    use graphx_graph::generators::{complete_graph, path_graph};
    use graphx_graph::{AttrGraph, GraphKind};

    #[test]
    fn mono_ignores_extra_target_edges() {
        let target = complete_graph(3, GraphKind::GRAPH);
        let pattern = path_graph(3, GraphKind::GRAPH);
        let t = GraphIndex::build(&target);
        let p = GraphIndex::build(&pattern);
        let mut state = SearchState::new(3, 3);

        // 0 -> 0 and 1 -> 1 are mapped; pattern node 2 hangs off 1 only.
        commit(&mut state, t.adjacency(), p.adjacency(), 0, 0);
        commit(&mut state, t.adjacency(), p.adjacency(), 1, 1);

        let (g1_nbrs, g2_nbrs) = (t.adjacency().succ(2), p.adjacency().succ(2));
        assert!(mapped_neighbours_agree(&state, MatchMode::Mono, g1_nbrs, g2_nbrs));
        assert!(!mapped_neighbours_agree(&state, MatchMode::Subgraph, g1_nbrs, g2_nbrs));
    }

    #[test]
    fn multiplicity_must_match_outside_mono() {
        let mut target = AttrGraph::multigraph();
        target.add_edge(0, 1);
        target.add_edge(0, 1);
        let pattern = path_graph(2, GraphKind::GRAPH);
        let t = GraphIndex::build(&target);
        let p = GraphIndex::build(&pattern);
        let mut state = SearchState::new(2, 2);
        commit(&mut state, t.adjacency(), p.adjacency(), 0, 0);

        let (g1_nbrs, g2_nbrs) = (t.adjacency().succ(1), p.adjacency().succ(1));
        assert!(!mapped_neighbours_agree(&state, MatchMode::Graph, g1_nbrs, g2_nbrs));
        assert!(mapped_neighbours_agree(&state, MatchMode::Mono, g1_nbrs, g2_nbrs));
    }
}

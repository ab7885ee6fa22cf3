//! Small deterministic graph families.
//!
//! Nodes are `0..n`; directed kinds orient every edge from the lower to
//! the higher label (cycles close with `n - 1 -> 0`, stars point outwards).

use crate::attr_graph::{AttrGraph, GraphKind};

#[must_use]
pub fn empty_graph(n: usize, kind: GraphKind) -> AttrGraph<usize> {
    let mut g = AttrGraph::with_kind(kind);
    for node in 0..n {
        g.add_node(node);
    }
    g
}

/// `0 - 1 - ... - (n - 1)`
#[must_use]
pub fn path_graph(n: usize, kind: GraphKind) -> AttrGraph<usize> {
    let mut g = empty_graph(n, kind);
    g.add_edges_from((1..n).map(|i| (i - 1, i)));
    g
}

#[must_use]
pub fn cycle_graph(n: usize, kind: GraphKind) -> AttrGraph<usize> {
    let mut g = path_graph(n, kind);
    if n > 1 {
        g.add_edge(n - 1, 0);
    }
    g
}

#[must_use]
pub fn complete_graph(n: usize, kind: GraphKind) -> AttrGraph<usize> {
    let mut g = empty_graph(n, kind);
    for u in 0..n {
        for v in (u + 1)..n {
            g.add_edge(u, v);
        }
    }
    g
}

/// Centre `0` joined to leaves `1..=leaves`.
#[must_use]
pub fn star_graph(leaves: usize, kind: GraphKind) -> AttrGraph<usize> {
    let mut g = empty_graph(leaves + 1, kind);
    g.add_edges_from((1..=leaves).map(|leaf| (0, leaf)));
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphView;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(4, 3)]
    fn path_edge_counts(#[case] n: usize, #[case] edges: usize) {
        let g = path_graph(n, GraphKind::GRAPH);
        assert_eq!(g.node_count(), n);
        assert_eq!(g.edge_count(), edges);
    }

    #[test]
    fn cycle_closes_the_path() {
        let g = cycle_graph(3, GraphKind::DIGRAPH);
        assert_eq!(g.edge_multiplicity(&2, &0), 1);
        assert_eq!(g.edge_multiplicity(&0, &2), 0);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn complete_graph_degrees() {
        let g = complete_graph(5, GraphKind::GRAPH);
        assert_eq!(g.edge_count(), 10);
        assert!(g.nodes().all(|n| g.degree(n) == 4));
    }

    #[test]
    fn star_centre_has_every_leaf() {
        let g = star_graph(3, GraphKind::GRAPH);
        assert_eq!(g.degree(&0), 3);
        assert_eq!(g.degree(&3), 1);
    }
}

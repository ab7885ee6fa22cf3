//! Dense, read-only index over one input graph.
//!
//! Both graphs are indexed once when a matcher is built. The search then
//! works on `usize` node indices only and resolves them back to graph nodes
//! when a mapping is emitted or an attribute predicate runs.

mod adjacency;
mod node_registry;

pub use adjacency::{Adjacency, NeighbourMap};
pub use node_registry::NodeRegistry;

use graphx_graph::{Attributes, GraphView};

use crate::semantic::AdjacencyView;

/// Dense-index view of one input graph, built once per matcher.
pub struct GraphIndex<'g, G: GraphView> {
    graph: &'g G,
    registry: NodeRegistry<'g, G::Node>,
    adjacency: Adjacency,
}

impl<'g, G: GraphView> GraphIndex<'g, G> {
    pub fn build(graph: &'g G) -> Self {
        // 1. Fix the node order
        let registry = NodeRegistry::build(graph.nodes());

        // 2. Build adjacency using the registry
        let adjacency = Adjacency::build(graph, &registry);

        Self {
            graph,
            registry,
            adjacency,
        }
    }

    #[must_use]
    pub const fn graph(&self) -> &'g G {
        self.graph
    }

    #[must_use]
    pub const fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.adjacency.is_directed()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    // Delegate to the node registry
    #[must_use]
    pub fn node(&self, index: usize) -> &'g G::Node {
        self.registry.node(index)
    }

    #[must_use]
    pub fn index_of(&self, node: &G::Node) -> Option<usize> {
        self.registry.index_of(node)
    }

    // Delegate to the adjacency
    #[must_use]
    pub fn degree(&self, index: usize) -> usize {
        self.adjacency.degree(index)
    }

    /// Sorted degree sequence.
    #[must_use]
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = (0..self.len()).map(|n| self.degree(n)).collect();
        degrees.sort_unstable();
        degrees
    }

    #[must_use]
    pub fn neighbours(&self, view: AdjacencyView, index: usize) -> &NeighbourMap {
        match view {
            AdjacencyView::Successors => self.adjacency.succ(index),
            AdjacencyView::Predecessors => self.adjacency.pred(index),
        }
    }

    // Resolve back to the graph
    #[must_use]
    pub fn node_attrs(&self, index: usize) -> Option<&'g Attributes> {
        self.graph.node_attrs(self.node(index))
    }

    /// Attributes of every parallel edge between `index` and `nbr` as seen
    /// from `index` in `view`: `index -> nbr` for successors, `nbr -> index`
    /// for predecessors.
    #[must_use]
    pub fn edge_attrs(
        &self,
        view: AdjacencyView,
        index: usize,
        nbr: usize,
    ) -> Option<&'g [Attributes]> {
        let (u, v) = match view {
            AdjacencyView::Successors => (index, nbr),
            AdjacencyView::Predecessors => (nbr, index),
        };
        self.graph.edge_attrs(self.node(u), self.node(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphx_graph::generators::{path_graph, star_graph};
    use graphx_graph::{AttrGraph, GraphKind};

    #[test]
    fn indices_follow_insertion_order() {
        let mut g = AttrGraph::graph();
        g.add_edge("c", "a");
        g.add_edge("a", "b");
        let index = GraphIndex::build(&g);

        assert_eq!(index.len(), 3);
        assert_eq!(index.node(0), &"c");
        assert_eq!(index.index_of(&"b"), Some(2));
        assert_eq!(index.index_of(&"z"), None);
    }

    #[test]
    fn undirected_predecessors_alias_successors() {
        let g = path_graph(3, GraphKind::GRAPH);
        let index = GraphIndex::build(&g);
        let adjacency = index.adjacency();

        assert_eq!(adjacency.succ(1), adjacency.pred(1));
        assert_eq!(adjacency.multiplicity(0, 1), 1);
        assert_eq!(adjacency.multiplicity(1, 0), 1);
        assert_eq!(index.degree_sequence(), vec![1, 1, 2]);
    }

    #[test]
    fn directed_index_splits_views() {
        let g = star_graph(2, GraphKind::DIGRAPH);
        let index = GraphIndex::build(&g);

        assert_eq!(index.neighbours(AdjacencyView::Successors, 0).len(), 2);
        assert!(index.neighbours(AdjacencyView::Predecessors, 0).is_empty());
        assert_eq!(index.neighbours(AdjacencyView::Predecessors, 1).len(), 1);
        assert!(index.edge_attrs(AdjacencyView::Predecessors, 1, 0).is_some());
        assert!(index.edge_attrs(AdjacencyView::Successors, 1, 0).is_none());
    }

    #[test]
    fn multiplicities_and_self_loops_are_counted() {
        let mut g = AttrGraph::multigraph();
        g.add_edge(0, 1);
        g.add_edge(1, 0);
        g.add_edge(1, 1);
        let index = GraphIndex::build(&g);
        let adjacency = index.adjacency();

        assert_eq!(adjacency.multiplicity(0, 1), 2);
        assert_eq!(adjacency.self_loops(1), 1);
        assert_eq!(index.degree(1), 4);
        assert_eq!(index.degree(0), 2);
    }
}

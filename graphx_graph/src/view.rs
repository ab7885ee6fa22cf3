//! Read-only graph capability interface.

use std::fmt::Debug;
use std::hash::Hash;

/// Attribute dictionary attached to a node or to a single edge.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// The minimal view of a graph needed to run a matcher over it.
///
/// Implementations must iterate nodes in a stable order: matchers index the
/// nodes once, in this order, and use it as a deterministic tie-break.
pub trait GraphView {
    /// Opaque, hashable node key.
    type Node: Clone + Eq + Hash + Debug;

    /// Whether edges are ordered pairs.
    fn is_directed(&self) -> bool;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// All nodes, in insertion order.
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    /// Whether `node` belongs to the graph.
    fn contains_node(&self, node: &Self::Node) -> bool;

    /// Distinct out-neighbours of `node` (all neighbours when undirected).
    fn successors(&self, node: &Self::Node) -> impl Iterator<Item = &Self::Node>;

    /// Distinct in-neighbours of `node` (all neighbours when undirected).
    fn predecessors(&self, node: &Self::Node) -> impl Iterator<Item = &Self::Node>;

    /// Number of parallel edges `u -> v`, zero when there is none.
    fn edge_multiplicity(&self, u: &Self::Node, v: &Self::Node) -> usize;

    /// Attributes of `node`, `None` when it is not in the graph.
    fn node_attrs(&self, node: &Self::Node) -> Option<&Attributes>;

    /// One attribute map per parallel edge `u -> v`.
    fn edge_attrs(&self, u: &Self::Node, v: &Self::Node) -> Option<&[Attributes]>;

    /// Degree with parallel edges counted individually.
    ///
    /// Undirected self-loops contribute two, directed self-loops contribute
    /// one to each of the in- and out-degree.
    fn degree(&self, node: &Self::Node) -> usize {
        let out: usize = self
            .successors(node)
            .map(|v| self.edge_multiplicity(node, v))
            .sum();

        if self.is_directed() {
            let inc: usize = self
                .predecessors(node)
                .map(|u| self.edge_multiplicity(u, node))
                .sum();
            out + inc
        } else {
            out + self.edge_multiplicity(node, node)
        }
    }

    /// Total number of edges, parallel edges included.
    fn edge_count(&self) -> usize {
        let total: usize = self.nodes().map(|n| self.degree(n)).sum();
        total / 2
    }
}

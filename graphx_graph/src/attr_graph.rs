use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::view::{Attributes, GraphView};

/// Orientation and edge multiplicity of an [`AttrGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GraphKind {
    pub directed: bool,
    pub multi: bool,
}

impl GraphKind {
    pub const GRAPH: Self = Self {
        directed: false,
        multi: false,
    };
    pub const DIGRAPH: Self = Self {
        directed: true,
        multi: false,
    };
    pub const MULTIGRAPH: Self = Self {
        directed: false,
        multi: true,
    };
    pub const MULTIDIGRAPH: Self = Self {
        directed: true,
        multi: true,
    };
}

type EdgeBundle = Vec<Attributes>;
type AdjacencyMap<N> = IndexMap<N, IndexMap<N, EdgeBundle>>;

/// Attributed graph container with insertion-ordered nodes.
///
/// Each adjacency entry holds one attribute map per parallel edge, so the
/// multiplicity of `u -> v` is the length of that bundle. Undirected edges
/// are stored on both endpoints; a self-loop is stored once.
#[derive(Clone, Debug)]
pub struct AttrGraph<N> {
    kind: GraphKind,
    nodes: IndexMap<N, Attributes>,
    succ: AdjacencyMap<N>,
    /// Only populated for directed graphs.
    pred: AdjacencyMap<N>,
}

impl<N> AttrGraph<N>
where
    N: Clone + Eq + Hash + Debug,
{
    #[must_use]
    pub fn with_kind(kind: GraphKind) -> Self {
        Self {
            kind,
            nodes: IndexMap::new(),
            succ: IndexMap::new(),
            pred: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn graph() -> Self {
        Self::with_kind(GraphKind::GRAPH)
    }

    #[must_use]
    pub fn digraph() -> Self {
        Self::with_kind(GraphKind::DIGRAPH)
    }

    #[must_use]
    pub fn multigraph() -> Self {
        Self::with_kind(GraphKind::MULTIGRAPH)
    }

    #[must_use]
    pub fn multidigraph() -> Self {
        Self::with_kind(GraphKind::MULTIDIGRAPH)
    }

    #[must_use]
    pub const fn kind(&self) -> GraphKind {
        self.kind
    }

    #[must_use]
    pub const fn is_multigraph(&self) -> bool {
        self.kind.multi
    }

    /// Adds `node` if it is not present yet. Existing attributes are kept.
    pub fn add_node(&mut self, node: N) {
        if self.nodes.contains_key(&node) {
            return;
        }
        self.nodes.insert(node.clone(), Attributes::new());
        self.succ.insert(node.clone(), IndexMap::new());
        if self.kind.directed {
            self.pred.insert(node, IndexMap::new());
        }
    }

    /// Adds `node` and merges `attrs` into its attribute map.
    pub fn add_node_with(&mut self, node: N, attrs: Attributes) {
        self.add_node(node.clone());
        if let Some(existing) = self.nodes.get_mut(&node) {
            existing.extend(attrs);
        }
    }

    pub fn add_edge(&mut self, u: N, v: N) {
        self.add_edge_with(u, v, Attributes::new());
    }

    /// Adds the edge `u -> v`, creating missing endpoints.
    ///
    /// Simple graphs merge `attrs` into the existing edge instead of adding
    /// a parallel one.
    pub fn add_edge_with(&mut self, u: N, v: N, attrs: Attributes) {
        self.add_node(u.clone());
        self.add_node(v.clone());

        let multi = self.kind.multi;
        let directed = self.kind.directed;

        push_edge(&mut self.succ, &u, &v, attrs.clone(), multi);
        if directed {
            push_edge(&mut self.pred, &v, &u, attrs, multi);
        } else if u != v {
            push_edge(&mut self.succ, &v, &u, attrs, multi);
        }
    }

    /// Adds every `(u, v)` edge without attributes.
    pub fn add_edges_from(&mut self, edges: impl IntoIterator<Item = (N, N)>) {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }

    /// Sets a single node attribute.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] if `node` is not in the graph.
    pub fn set_node_attr(
        &mut self,
        node: &N,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Result<()> {
        let attrs = self
            .nodes
            .get_mut(node)
            .ok_or_else(|| GraphError::NodeNotFound {
                node: format!("{node:?}"),
            })?;
        attrs.insert(key.into(), value.into());
        Ok(())
    }

    #[must_use]
    pub fn node_attr(&self, node: &N, key: &str) -> Option<&serde_json::Value> {
        self.nodes.get(node).and_then(|attrs| attrs.get(key))
    }

    /// Returns a copy of this graph with every node renamed through `f`.
    ///
    /// `f` must be injective, otherwise nodes are merged.
    #[must_use]
    pub fn relabel<M, F>(&self, f: F) -> AttrGraph<M>
    where
        M: Clone + Eq + Hash + Debug,
        F: Fn(&N) -> M,
    {
        let mut out = AttrGraph::with_kind(self.kind);
        for (node, attrs) in &self.nodes {
            out.add_node_with(f(node), attrs.clone());
        }
        for (u, v, attrs) in self.edges() {
            out.add_edge_with(f(u), f(v), attrs.clone());
        }
        out
    }

    /// Every edge once, parallel edges included, in insertion order of
    /// their source node.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, &Attributes)> {
        let directed = self.kind.directed;
        self.succ.iter().enumerate().flat_map(move |(ui, (u, nbrs))| {
            nbrs.iter()
                .filter(move |(v, _)| {
                    // Undirected edges are listed from the earlier endpoint only.
                    directed || self.succ.get_index_of(*v).is_some_and(|vi| vi >= ui)
                })
                .flat_map(move |(v, bundle)| bundle.iter().map(move |attrs| (u, v, attrs)))
        })
    }
}

fn push_edge<N: Clone + Eq + Hash>(
    adjacency: &mut AdjacencyMap<N>,
    from: &N,
    to: &N,
    attrs: Attributes,
    multi: bool,
) {
    let bundle = adjacency
        .entry(from.clone())
        .or_default()
        .entry(to.clone())
        .or_default();

    if !multi {
        if let Some(existing) = bundle.first_mut() {
            existing.extend(attrs);
            return;
        }
    }
    bundle.push(attrs);
}

impl<N> Default for AttrGraph<N>
where
    N: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::graph()
    }
}

impl<N> GraphView for AttrGraph<N>
where
    N: Clone + Eq + Hash + Debug,
{
    type Node = N;

    fn is_directed(&self) -> bool {
        self.kind.directed
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.keys()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    fn successors(&self, node: &N) -> impl Iterator<Item = &N> {
        self.succ.get(node).into_iter().flat_map(IndexMap::keys)
    }

    fn predecessors(&self, node: &N) -> impl Iterator<Item = &N> {
        let adjacency = if self.kind.directed {
            &self.pred
        } else {
            &self.succ
        };
        adjacency.get(node).into_iter().flat_map(IndexMap::keys)
    }

    fn edge_multiplicity(&self, u: &N, v: &N) -> usize {
        self.succ
            .get(u)
            .and_then(|nbrs| nbrs.get(v))
            .map_or(0, Vec::len)
    }

    fn node_attrs(&self, node: &N) -> Option<&Attributes> {
        self.nodes.get(node)
    }

    fn edge_attrs(&self, u: &N, v: &N) -> Option<&[Attributes]> {
        self.succ
            .get(u)
            .and_then(|nbrs| nbrs.get(v))
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn attrs(value: serde_json::Value) -> Attributes {
        match value {
            serde_json::Value::Object(map) => map,
            _ => Attributes::new(),
        }
    }

    #[test]
    fn undirected_edges_are_symmetric() {
        let mut g = AttrGraph::graph();
        g.add_edge("a", "b");

        assert_eq!(g.edge_multiplicity(&"a", &"b"), 1);
        assert_eq!(g.edge_multiplicity(&"b", &"a"), 1);
        assert_eq!(g.successors(&"b").collect::<Vec<_>>(), vec![&"a"]);
        assert_eq!(g.predecessors(&"b").collect::<Vec<_>>(), vec![&"a"]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn simple_graph_merges_repeated_edges() {
        let mut g = AttrGraph::graph();
        g.add_edge_with(0, 1, attrs(json!({"w": 1})));
        g.add_edge_with(1, 0, attrs(json!({"c": "red"})));

        assert_eq!(g.edge_multiplicity(&0, &1), 1);
        let bundle = g.edge_attrs(&0, &1).unwrap();
        assert_eq!(bundle[0].get("w"), Some(&json!(1)));
        assert_eq!(bundle[0].get("c"), Some(&json!("red")));
    }

    #[test]
    fn multigraph_counts_parallel_edges() {
        let mut g = AttrGraph::multigraph();
        g.add_edge("a", "b");
        g.add_edge("b", "a");

        assert_eq!(g.edge_multiplicity(&"a", &"b"), 2);
        assert_eq!(g.degree(&"a"), 2);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edges().count(), 2);
    }

    #[test]
    fn directed_graph_tracks_predecessors() {
        let mut g = AttrGraph::digraph();
        g.add_edge(0, 1);
        g.add_edge(2, 1);

        assert_eq!(g.edge_multiplicity(&0, &1), 1);
        assert_eq!(g.edge_multiplicity(&1, &0), 0);
        assert_eq!(g.predecessors(&1).copied().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(g.successors(&1).count(), 0);
        assert_eq!(g.degree(&1), 2);
    }

    #[rstest]
    #[case(GraphKind::GRAPH, 2)]
    #[case(GraphKind::MULTIGRAPH, 2)]
    #[case(GraphKind::DIGRAPH, 2)]
    #[case(GraphKind::MULTIDIGRAPH, 2)]
    fn self_loop_degree(#[case] kind: GraphKind, #[case] expected: usize) {
        let mut g = AttrGraph::with_kind(kind);
        g.add_edge(7, 7);

        assert_eq!(g.edge_multiplicity(&7, &7), 1);
        assert_eq!(g.degree(&7), expected);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn set_node_attr_rejects_unknown_nodes() {
        let mut g: AttrGraph<u32> = AttrGraph::graph();
        g.add_node(1);

        assert!(g.set_node_attr(&1, "color", "red").is_ok());
        assert_eq!(g.node_attr(&1, "color"), Some(&json!("red")));
        assert_eq!(
            g.set_node_attr(&2, "color", "blue"),
            Err(GraphError::NodeNotFound {
                node: "2".to_string()
            })
        );
    }

    #[test]
    fn relabel_preserves_structure_and_attributes() {
        let mut g = AttrGraph::multigraph();
        g.add_node_with(0, attrs(json!({"color": "red"})));
        g.add_edge(0, 1);
        g.add_edge(0, 1);
        g.add_edge(1, 1);

        let h = g.relabel(|n| format!("n{n}"));

        assert_eq!(h.node_count(), 2);
        assert_eq!(h.edge_multiplicity(&"n0".to_string(), &"n1".to_string()), 2);
        assert_eq!(h.edge_multiplicity(&"n1".to_string(), &"n1".to_string()), 1);
        assert_eq!(h.node_attr(&"n0".to_string(), "color"), Some(&json!("red")));
    }

    #[test]
    fn nodes_keep_insertion_order() {
        let mut g = AttrGraph::graph();
        g.add_edge(3, 1);
        g.add_node(2);
        g.add_node(3);

        assert_eq!(g.nodes().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    }
}

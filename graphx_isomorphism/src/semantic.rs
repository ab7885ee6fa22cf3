//! Attribute-aware veto layered on top of the structural rules.
//!
//! The engine calls [`SemanticFeasibility::semantic_feasibility`] only for
//! candidate pairs that already passed the syntactic rules. Implementations
//! never change the search order; they can only reject a pair.

use graphx_graph::{Attributes, GraphView};

use crate::graph_index::GraphIndex;
use crate::profiling::Timer;

/// Which adjacency of a node the edge predicate is looking through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdjacencyView {
    Successors,
    Predecessors,
}

impl AdjacencyView {
    /// Views an edge predicate must inspect for a graph of this orientation.
    #[must_use]
    pub const fn for_orientation(directed: bool) -> &'static [Self] {
        if directed {
            &[Self::Successors, Self::Predecessors]
        } else {
            &[Self::Successors]
        }
    }
}

/// What a semantic predicate may look at: both indexed graphs and the
/// current G1 -> G2 partial mapping.
pub struct SemanticContext<'a, 'g, G1: GraphView, G2: GraphView> {
    pub g1: &'a GraphIndex<'g, G1>,
    pub g2: &'a GraphIndex<'g, G2>,
    pub core_1: &'a [Option<usize>],
}

/// Veto on pairs that already passed the structural rules.
pub trait SemanticFeasibility<G1: GraphView, G2: GraphView> {
    /// Returns `false` to reject mapping `g1_node` onto `g2_node`.
    fn semantic_feasibility(
        &self,
        ctx: &SemanticContext<'_, '_, G1, G2>,
        g1_node: usize,
        g2_node: usize,
    ) -> bool;
}

/// Pure structural matching: every pair is semantically feasible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Structural;

impl<G1: GraphView, G2: GraphView> SemanticFeasibility<G1, G2> for Structural {
    #[inline]
    fn semantic_feasibility(&self, _: &SemanticContext<'_, '_, G1, G2>, _: usize, _: usize) -> bool {
        true
    }
}

/// Compares the attribute maps of a G1 node and a G2 node.
pub type NodeMatchFn = Box<dyn Fn(&Attributes, &Attributes) -> bool + Send + Sync>;

/// Receives one attribute map per parallel edge on each side.
pub type EdgeMatchFn = Box<dyn Fn(&[Attributes], &[Attributes]) -> bool + Send + Sync>;

/// Compares node and edge attribute maps with user predicates.
///
/// A missing predicate ignores that kind of attribute. A node without an
/// attribute map can never be matched when a node predicate is set.
#[derive(Default)]
pub struct AttributeMatcher {
    node_match: Option<NodeMatchFn>,
    edge_match: Option<EdgeMatchFn>,
}

impl AttributeMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn node_match<F>(mut self, f: F) -> Self
    where
        F: Fn(&Attributes, &Attributes) -> bool + Send + Sync + 'static,
    {
        self.node_match = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn edge_match<F>(mut self, f: F) -> Self
    where
        F: Fn(&[Attributes], &[Attributes]) -> bool + Send + Sync + 'static,
    {
        self.edge_match = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_node_match(mut self, f: Option<NodeMatchFn>) -> Self {
        self.node_match = f;
        self
    }

    #[must_use]
    pub fn with_edge_match(mut self, f: Option<EdgeMatchFn>) -> Self {
        self.edge_match = f;
        self
    }

    #[must_use]
    pub const fn has_node_match(&self) -> bool {
        self.node_match.is_some()
    }

    #[must_use]
    pub const fn has_edge_match(&self) -> bool {
        self.edge_match.is_some()
    }

    fn nodes_match<G1: GraphView, G2: GraphView>(
        &self,
        ctx: &SemanticContext<'_, '_, G1, G2>,
        g1_node: usize,
        g2_node: usize,
    ) -> bool {
        let Some(node_match) = &self.node_match else {
            return true;
        };
        match (ctx.g1.node_attrs(g1_node), ctx.g2.node_attrs(g2_node)) {
            (Some(a1), Some(a2)) => node_match(a1, a2),
            _ => false,
        }
    }

    /// Checks every edge between `g1_node` and itself or an already mapped
    /// neighbour whose image edge exists in G2. The syntactic rules have
    /// already made the two neighbourhoods agree.
    fn edges_match<G1: GraphView, G2: GraphView>(
        &self,
        ctx: &SemanticContext<'_, '_, G1, G2>,
        view: AdjacencyView,
        g1_node: usize,
        g2_node: usize,
    ) -> bool {
        let Some(edge_match) = &self.edge_match else {
            return true;
        };

        for &nbr in ctx.g1.neighbours(view, g1_node).keys() {
            let image = if nbr == g1_node {
                g2_node
            } else if let Some(image) = ctx.core_1[nbr] {
                image
            } else {
                continue;
            };

            let Some(e2) = ctx.g2.edge_attrs(view, g2_node, image) else {
                continue;
            };
            let Some(e1) = ctx.g1.edge_attrs(view, g1_node, nbr) else {
                continue;
            };
            if !edge_match(e1, e2) {
                return false;
            }
        }
        true
    }
}

impl std::fmt::Debug for AttributeMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeMatcher")
            .field("node_match", &self.has_node_match())
            .field("edge_match", &self.has_edge_match())
            .finish()
    }
}

impl<G1: GraphView, G2: GraphView> SemanticFeasibility<G1, G2> for AttributeMatcher {
    fn semantic_feasibility(
        &self,
        ctx: &SemanticContext<'_, '_, G1, G2>,
        g1_node: usize,
        g2_node: usize,
    ) -> bool {
        let _t = Timer::new("AttributeMatcher::semantic_feasibility");

        if !self.nodes_match(ctx, g1_node, g2_node) {
            return false;
        }

        AdjacencyView::for_orientation(ctx.g1.is_directed())
            .iter()
            .all(|&view| self.edges_match(ctx, view, g1_node, g2_node))
    }
}

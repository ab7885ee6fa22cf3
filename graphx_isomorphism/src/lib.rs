//! VF2 graph and subgraph isomorphism.
//!
//! A [`Vf2Matcher`] enumerates mappings from a target graph G1 (or a
//! subgraph of it) onto every node of a pattern graph G2. The same engine
//! runs in three modes, see [`MatchMode`]:
//!
//! - `Graph`: G1 and G2 are isomorphic,
//! - `Subgraph`: G2 is isomorphic to a node-induced subgraph of G1,
//! - `Mono`: G2 embeds into G1, extra G1 edges allowed.
//!
//! Structural rules are chosen per orientation ([`Undirected`],
//! [`Directed`]); attribute checks are layered on through
//! [`SemanticFeasibility`], usually an [`AttributeMatcher`].

mod error;
mod feasibility;
mod graph_index;
mod mapping;
pub mod match_helpers;
mod matcher;
pub mod profiling;
mod quick_checks;
mod semantic;
mod state;
mod stats;

#[cfg(test)]
mod test_harness;

pub use graphx_common::{Config, ConfigBuilder, Dedupe, MatchMode};
pub use graphx_graph::{Attributes, GraphView};

pub use crate::error::{MatchError, Result};
pub use crate::feasibility::{Directed, FeasibilityRules, RuleContext, Undirected};
pub use crate::graph_index::{Adjacency, GraphIndex, NeighbourMap};
pub use crate::mapping::{Mapping, MappingSet};
pub use crate::matcher::{DiGraphMatcher, GraphMatcher, Matches, Vf2Matcher};
pub use crate::quick_checks::{fast_could_be_isomorphic, faster_could_be_isomorphic};
pub use crate::semantic::{
    AdjacencyView, AttributeMatcher, EdgeMatchFn, NodeMatchFn, SemanticContext,
    SemanticFeasibility, Structural,
};
pub use crate::state::{SearchState, StateRecord};
pub use crate::stats::SearchStats;

/// Whether `g1` and `g2` are isomorphic, ignoring attributes.
pub fn is_isomorphic<G1: GraphView, G2: GraphView>(g1: &G1, g2: &G2) -> Result<bool> {
    if g1.is_directed() {
        Ok(DiGraphMatcher::new(g1, g2)?.is_isomorphic())
    } else {
        Ok(GraphMatcher::new(g1, g2)?.is_isomorphic())
    }
}

/// Whether `g1` and `g2` are isomorphic under the predicates of `matcher`.
pub fn is_isomorphic_with<G1: GraphView, G2: GraphView>(
    g1: &G1,
    g2: &G2,
    matcher: AttributeMatcher,
) -> Result<bool> {
    if g1.is_directed() {
        Ok(DiGraphMatcher::with_semantics(g1, g2, matcher)?.is_isomorphic())
    } else {
        Ok(GraphMatcher::with_semantics(g1, g2, matcher)?.is_isomorphic())
    }
}

/// Whether `g2` is isomorphic to a node-induced subgraph of `g1`.
pub fn subgraph_is_isomorphic<G1: GraphView, G2: GraphView>(g1: &G1, g2: &G2) -> Result<bool> {
    if g1.is_directed() {
        Ok(DiGraphMatcher::new(g1, g2)?.subgraph_is_isomorphic())
    } else {
        Ok(GraphMatcher::new(g1, g2)?.subgraph_is_isomorphic())
    }
}

/// Whether `g2` is monomorphic to a subgraph of `g1`.
pub fn subgraph_is_monomorphic<G1: GraphView, G2: GraphView>(g1: &G1, g2: &G2) -> Result<bool> {
    if g1.is_directed() {
        Ok(DiGraphMatcher::new(g1, g2)?.subgraph_is_monomorphic())
    } else {
        Ok(GraphMatcher::new(g1, g2)?.subgraph_is_monomorphic())
    }
}

/// Every structural mapping of `g2` into `g1` for `config`.
pub fn enumerate_all<G1: GraphView, G2: GraphView>(
    g1: &G1,
    g2: &G2,
    config: &Config,
) -> Result<MappingSet<G1::Node, G2::Node>> {
    if g1.is_directed() {
        Ok(DiGraphMatcher::new(g1, g2)?.find_all(config))
    } else {
        Ok(GraphMatcher::new(g1, g2)?.find_all(config))
    }
}

/// [`enumerate_all`] with attribute predicates.
pub fn enumerate_all_with<G1: GraphView, G2: GraphView>(
    g1: &G1,
    g2: &G2,
    config: &Config,
    matcher: AttributeMatcher,
) -> Result<MappingSet<G1::Node, G2::Node>> {
    if g1.is_directed() {
        Ok(DiGraphMatcher::with_semantics(g1, g2, matcher)?.find_all(config))
    } else {
        Ok(GraphMatcher::with_semantics(g1, g2, matcher)?.find_all(config))
    }
}

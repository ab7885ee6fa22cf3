//! Configuration for the isomorphism search.
//!
//! The two main concepts are:
//! - mode: how strictly the pattern must agree with the part of the target
//!   it is mapped onto (whole-graph isomorphism, induced subgraph
//!   isomorphism, or monomorphism).
//! - dedupe: how to deduplicate mappings after the search.
//!
//! Quick examples
//!
//! Whole-graph isomorphism, every mapping reported:
//! ```
//! use graphx_common::Config;
//! let cfg = Config::isomorphism();
//! ```
//!
//! Induced subgraphs, automorphisms of the pattern collapsed, at most ten:
//! ```
//! use graphx_common::{Config, Dedupe, MatchMode};
//! let cfg = Config::builder()
//!     .mode(MatchMode::Subgraph)
//!     .dedupe(Dedupe::NodeSet)
//!     .limit(10)
//!     .build();
//! assert_eq!(cfg.limit, Some(10));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which relation between the pattern (G2) and the target (G1) is searched.
///
/// - Graph: bijection, every edge multiplicity equal.
/// - Subgraph: G2 is isomorphic to an induced subgraph of G1.
/// - Mono: every G2 edge is covered by at least as many G1 edges; G1 may
///   carry extra edges between mapped nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    Graph,
    Subgraph,
    Mono,
}

impl MatchMode {
    pub const ALL: [Self; 3] = [Self::Graph, Self::Subgraph, Self::Mono];

    /// Edge multiplicity test between a mapped pair: `>=` for monomorphism,
    /// `==` otherwise.
    #[must_use]
    pub const fn edge_count_ok(self, g1: usize, g2: usize) -> bool {
        match self {
            Self::Mono => g1 >= g2,
            Self::Graph | Self::Subgraph => g1 == g2,
        }
    }

    /// Frontier and new-node count test used by the look-ahead rules.
    #[must_use]
    pub const fn lookahead_ok(self, g1: usize, g2: usize) -> bool {
        match self {
            Self::Graph => g1 == g2,
            Self::Subgraph | Self::Mono => g1 >= g2,
        }
    }

    /// Monomorphism skips the look-ahead rules entirely.
    #[must_use]
    pub const fn uses_lookahead(self) -> bool {
        !matches!(self, Self::Mono)
    }

    /// Only whole-graph isomorphism needs both graphs to have the same order.
    #[must_use]
    pub const fn requires_equal_order(self) -> bool {
        matches!(self, Self::Graph)
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Graph => "graph",
            Self::Subgraph => "subgraph",
            Self::Mono => "mono",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown match mode '{input}', expected one of: graph, subgraph, mono")]
pub struct ParseModeError {
    pub input: String,
}

impl FromStr for MatchMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "graph" | "iso" | "isomorphism" => Ok(Self::Graph),
            "subgraph" | "sub" => Ok(Self::Subgraph),
            "mono" | "monomorphism" => Ok(Self::Mono),
            _ => Err(ParseModeError {
                input: s.to_string(),
            }),
        }
    }
}

/// Control how mappings are deduplicated after the search.
///
/// - None:
///     Every mapping is reported. Two mappings are distinct if any pattern
///     node is sent to a different target node.
/// - NodeSet:
///     Two mappings are the same if they cover the same SET of target
///     nodes, regardless of which pattern node lands where (collapses the
///     automorphisms of the pattern).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dedupe {
    #[default]
    None,
    NodeSet,
}

impl Dedupe {
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Global search configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Config {
    pub mode: MatchMode,
    pub dedupe: Dedupe,
    /// Stop after this many mappings (counted after dedupe).
    pub limit: Option<usize>,
}

impl Config {
    #[must_use]
    pub const fn new(mode: MatchMode, dedupe: Dedupe) -> Self {
        Self {
            mode,
            dedupe,
            limit: None,
        }
    }

    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Convenience: whole-graph isomorphism, no dedupe.
    #[must_use]
    pub const fn isomorphism() -> Self {
        Self::new(MatchMode::Graph, Dedupe::None)
    }

    /// Convenience: induced subgraph isomorphism, no dedupe.
    #[must_use]
    pub const fn subgraph() -> Self {
        Self::new(MatchMode::Subgraph, Dedupe::None)
    }

    /// Convenience: monomorphism, no dedupe.
    #[must_use]
    pub const fn monomorphism() -> Self {
        Self::new(MatchMode::Mono, Dedupe::None)
    }

    /// Whether `found` mappings already satisfy the limit.
    #[must_use]
    pub fn limit_reached(&self, found: usize) -> bool {
        self.limit.is_some_and(|limit| found >= limit)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    mode: MatchMode,
    dedupe: Dedupe,
    limit: Option<usize>,
}

impl ConfigBuilder {
    #[must_use]
    pub const fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn isomorphism(self) -> Self {
        self.mode(MatchMode::Graph)
    }

    #[must_use]
    pub const fn subgraph(self) -> Self {
        self.mode(MatchMode::Subgraph)
    }

    #[must_use]
    pub const fn monomorphism(self) -> Self {
        self.mode(MatchMode::Mono)
    }

    #[must_use]
    pub const fn dedupe(mut self, dedupe: Dedupe) -> Self {
        self.dedupe = dedupe;
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn unlimited(mut self) -> Self {
        self.limit = None;
        self
    }

    #[must_use]
    pub const fn build(self) -> Config {
        Config {
            mode: self.mode,
            dedupe: self.dedupe,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;
    use rstest::rstest;

    #[rstest]
    #[case("graph", MatchMode::Graph)]
    #[case("ISO", MatchMode::Graph)]
    #[case("sub", MatchMode::Subgraph)]
    #[case(" subgraph ", MatchMode::Subgraph)]
    #[case("monomorphism", MatchMode::Mono)]
    fn parses_mode_aliases(#[case] input: &str, #[case] expected: MatchMode) {
        assert_eq!(input.parse::<MatchMode>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "homomorphism".parse::<MatchMode>().unwrap_err();
        assert_eq!(err.input, "homomorphism");
        assert!(err.to_string().contains("homomorphism"));
    }

    #[test]
    fn display_parses_back() {
        for mode in MatchMode::ALL {
            assert_eq!(mode.to_string().parse::<MatchMode>(), Ok(mode));
        }
    }

    #[rstest]
    #[case(MatchMode::Graph, 2, 1, false, false)]
    #[case(MatchMode::Subgraph, 2, 1, false, true)]
    #[case(MatchMode::Mono, 2, 1, true, true)]
    #[case(MatchMode::Mono, 1, 2, false, false)]
    #[case(MatchMode::Graph, 3, 3, true, true)]
    fn mode_comparisons(
        #[case] mode: MatchMode,
        #[case] g1: usize,
        #[case] g2: usize,
        #[case] edges: bool,
        #[case] lookahead: bool,
    ) {
        assert_eq!(mode.edge_count_ok(g1, g2), edges);
        assert_eq!(mode.lookahead_ok(g1, g2), lookahead);
    }

    #[test]
    fn builder_defaults_match_default() {
        assert_eq!(Config::builder().build(), Config::default());
        assert_eq!(Config::default(), Config::isomorphism());
    }

    #[test]
    fn builder_sets_every_field() {
        let cfg = Config::builder()
            .monomorphism()
            .dedupe(Dedupe::NodeSet)
            .limit(3)
            .build();

        assert_eq!(cfg.mode, MatchMode::Mono);
        assert!(cfg.dedupe.is_enabled());
        assert!(!cfg.limit_reached(2));
        assert!(cfg.limit_reached(3));
        assert!(!cfg.mode.uses_lookahead());
    }

    quickcheck! {
        fn graph_lookahead_implies_subgraph_lookahead(g1: usize, g2: usize) -> bool {
            !MatchMode::Graph.lookahead_ok(g1, g2) || MatchMode::Subgraph.lookahead_ok(g1, g2)
        }

        fn isomorphic_edges_are_monomorphic(g1: usize, g2: usize) -> bool {
            !MatchMode::Subgraph.edge_count_ok(g1, g2) || MatchMode::Mono.edge_count_ok(g1, g2)
        }
    }
}

//! Common test cases for the graphx workspace.
//!
//! Each case pairs a target graph (G1) with a pattern graph (G2), a search
//! configuration and the number of mappings the search must report.

use graphx_graph::generators::{complete_graph, cycle_graph, empty_graph, path_graph, star_graph};
use graphx_graph::{AttrGraph, GraphKind};

use crate::config::{Config, Dedupe, MatchMode};

/// Graph fixtures share one node type.
pub type Fixture = AttrGraph<usize>;

/// A complete test case definition.
#[derive(Debug, Clone)]
pub struct TestCase {
    /// The name of the test case.
    pub name: &'static str,
    /// The configuration for the search.
    pub config: Config,
    /// The pattern to search for (G2).
    pub pattern: &'static Fixture,
    /// The graph to search in (G1).
    pub target: &'static Fixture,
    /// The expected number of mappings.
    pub expected_matches: usize,
}

impl TestCase {
    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.target.kind().directed
    }
}

// #####################
// UNDIRECTED FIXTURES
// #####################
lazy_static::lazy_static! {
    static ref EMPTY: Fixture = empty_graph(0, GraphKind::GRAPH);
    static ref PATH_3: Fixture = path_graph(3, GraphKind::GRAPH);
    static ref PATH_4: Fixture = path_graph(4, GraphKind::GRAPH);
    static ref TRIANGLE: Fixture = cycle_graph(3, GraphKind::GRAPH);
    static ref CYCLE_4: Fixture = cycle_graph(4, GraphKind::GRAPH);
    static ref COMPLETE_4: Fixture = complete_graph(4, GraphKind::GRAPH);
    static ref STAR_3: Fixture = star_graph(3, GraphKind::GRAPH);
    static ref SINGLE_EDGE: Fixture = path_graph(2, GraphKind::GRAPH);
    static ref DOUBLE_EDGE: Fixture = {
        let mut g = empty_graph(2, GraphKind::MULTIGRAPH);
        g.add_edge(0, 1);
        g.add_edge(0, 1);
        g
    };
    static ref LOOPED_EDGE: Fixture = {
        let mut g = path_graph(2, GraphKind::GRAPH);
        g.add_edge(0, 0);
        g
    };
}

// #####################
// DIRECTED FIXTURES
// #####################
lazy_static::lazy_static! {
    static ref DI_PATH_3: Fixture = path_graph(3, GraphKind::DIGRAPH);
    static ref DI_PATH_4: Fixture = path_graph(4, GraphKind::DIGRAPH);
    static ref DI_CYCLE_3: Fixture = cycle_graph(3, GraphKind::DIGRAPH);
    static ref DI_OUT_STAR_2: Fixture = star_graph(2, GraphKind::DIGRAPH);
    static ref DI_COMPLETE_4: Fixture = complete_graph(4, GraphKind::DIGRAPH);
}

const fn exact(mode: MatchMode) -> Config {
    Config::new(mode, Dedupe::None)
}

const fn node_set(mode: MatchMode) -> Config {
    Config::new(mode, Dedupe::NodeSet)
}

// #####################
// TEST CASES
// #####################
lazy_static::lazy_static! {
    pub static ref UNDIRECTED_TEST_CASES: Vec<TestCase> = vec![
        TestCase {
            name: "path4_self_isomorphisms",
            config: exact(MatchMode::Graph),
            pattern: &PATH_4,
            target: &PATH_4,
            expected_matches: 2,
        },
        TestCase {
            name: "cycle4_self_isomorphisms",
            config: exact(MatchMode::Graph),
            pattern: &CYCLE_4,
            target: &CYCLE_4,
            expected_matches: 8,
        },
        TestCase {
            name: "complete4_self_isomorphisms",
            config: exact(MatchMode::Graph),
            pattern: &COMPLETE_4,
            target: &COMPLETE_4,
            expected_matches: 24,
        },
        TestCase {
            name: "complete4_self_isomorphisms_node_set",
            config: node_set(MatchMode::Graph),
            pattern: &COMPLETE_4,
            target: &COMPLETE_4,
            expected_matches: 1,
        },
        TestCase {
            name: "path4_vs_path3_graph_order_mismatch",
            config: exact(MatchMode::Graph),
            pattern: &PATH_3,
            target: &PATH_4,
            expected_matches: 0,
        },
        TestCase {
            name: "triangle_vs_path3_graph",
            config: exact(MatchMode::Graph),
            pattern: &PATH_3,
            target: &TRIANGLE,
            expected_matches: 0,
        },
        TestCase {
            name: "path3_in_path4_subgraph",
            config: exact(MatchMode::Subgraph),
            pattern: &PATH_3,
            target: &PATH_4,
            expected_matches: 4,
        },
        TestCase {
            name: "path3_in_path4_mono",
            config: exact(MatchMode::Mono),
            pattern: &PATH_3,
            target: &PATH_4,
            expected_matches: 4,
        },
        TestCase {
            name: "path3_in_path4_subgraph_node_set",
            config: node_set(MatchMode::Subgraph),
            pattern: &PATH_3,
            target: &PATH_4,
            expected_matches: 2,
        },
        TestCase {
            name: "triangle_in_complete4_subgraph",
            config: exact(MatchMode::Subgraph),
            pattern: &TRIANGLE,
            target: &COMPLETE_4,
            expected_matches: 24,
        },
        TestCase {
            name: "triangle_in_complete4_subgraph_node_set",
            config: node_set(MatchMode::Subgraph),
            pattern: &TRIANGLE,
            target: &COMPLETE_4,
            expected_matches: 4,
        },
        TestCase {
            name: "path3_in_complete4_subgraph",
            config: exact(MatchMode::Subgraph),
            pattern: &PATH_3,
            target: &COMPLETE_4,
            expected_matches: 0,
        },
        TestCase {
            name: "path3_in_complete4_mono",
            config: exact(MatchMode::Mono),
            pattern: &PATH_3,
            target: &COMPLETE_4,
            expected_matches: 24,
        },
        TestCase {
            name: "cycle4_in_complete4_subgraph",
            config: exact(MatchMode::Subgraph),
            pattern: &CYCLE_4,
            target: &COMPLETE_4,
            expected_matches: 0,
        },
        TestCase {
            name: "cycle4_in_complete4_mono",
            config: exact(MatchMode::Mono),
            pattern: &CYCLE_4,
            target: &COMPLETE_4,
            expected_matches: 24,
        },
        TestCase {
            name: "path3_in_star3_subgraph",
            config: exact(MatchMode::Subgraph),
            pattern: &PATH_3,
            target: &STAR_3,
            expected_matches: 6,
        },
        TestCase {
            name: "empty_pattern_subgraph",
            config: exact(MatchMode::Subgraph),
            pattern: &EMPTY,
            target: &PATH_4,
            expected_matches: 1,
        },
        TestCase {
            name: "empty_graphs_isomorphic",
            config: exact(MatchMode::Graph),
            pattern: &EMPTY,
            target: &EMPTY,
            expected_matches: 1,
        },
        TestCase {
            name: "double_edge_vs_single_edge_graph",
            config: exact(MatchMode::Graph),
            pattern: &SINGLE_EDGE,
            target: &DOUBLE_EDGE,
            expected_matches: 0,
        },
        TestCase {
            name: "double_edge_vs_single_edge_subgraph",
            config: exact(MatchMode::Subgraph),
            pattern: &SINGLE_EDGE,
            target: &DOUBLE_EDGE,
            expected_matches: 0,
        },
        TestCase {
            name: "double_edge_vs_single_edge_mono",
            config: exact(MatchMode::Mono),
            pattern: &SINGLE_EDGE,
            target: &DOUBLE_EDGE,
            expected_matches: 2,
        },
        TestCase {
            name: "self_loop_required_by_pattern",
            config: exact(MatchMode::Mono),
            pattern: &LOOPED_EDGE,
            target: &PATH_4,
            expected_matches: 0,
        },
        TestCase {
            name: "self_loop_pattern_self_match",
            config: exact(MatchMode::Graph),
            pattern: &LOOPED_EDGE,
            target: &LOOPED_EDGE,
            expected_matches: 1,
        },
    ];

    pub static ref DIRECTED_TEST_CASES: Vec<TestCase> = vec![
        TestCase {
            name: "di_cycle3_rotations",
            config: exact(MatchMode::Graph),
            pattern: &DI_CYCLE_3,
            target: &DI_CYCLE_3,
            expected_matches: 3,
        },
        TestCase {
            name: "di_path4_rigid",
            config: exact(MatchMode::Graph),
            pattern: &DI_PATH_4,
            target: &DI_PATH_4,
            expected_matches: 1,
        },
        TestCase {
            name: "di_path3_in_di_cycle3_mono",
            config: exact(MatchMode::Mono),
            pattern: &DI_PATH_3,
            target: &DI_CYCLE_3,
            expected_matches: 3,
        },
        TestCase {
            name: "di_path3_in_di_cycle3_subgraph",
            config: exact(MatchMode::Subgraph),
            pattern: &DI_PATH_3,
            target: &DI_CYCLE_3,
            expected_matches: 0,
        },
        TestCase {
            name: "di_path3_in_di_path4_subgraph",
            config: exact(MatchMode::Subgraph),
            pattern: &DI_PATH_3,
            target: &DI_PATH_4,
            expected_matches: 2,
        },
        TestCase {
            name: "di_out_star_in_di_complete4_mono",
            config: exact(MatchMode::Mono),
            pattern: &DI_OUT_STAR_2,
            target: &DI_COMPLETE_4,
            expected_matches: 8,
        },
        TestCase {
            name: "di_out_star_in_di_complete4_subgraph",
            config: exact(MatchMode::Subgraph),
            pattern: &DI_OUT_STAR_2,
            target: &DI_COMPLETE_4,
            expected_matches: 0,
        },
        TestCase {
            name: "di_path3_in_di_complete4_mono_node_set",
            config: node_set(MatchMode::Mono),
            pattern: &DI_PATH_3,
            target: &DI_COMPLETE_4,
            expected_matches: 4,
        },
    ];
}

/// Every test case, undirected first.
pub fn all_test_cases() -> impl Iterator<Item = &'static TestCase> {
    UNDIRECTED_TEST_CASES
        .iter()
        .chain(DIRECTED_TEST_CASES.iter())
}

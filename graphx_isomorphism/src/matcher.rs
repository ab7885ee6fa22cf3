//! The VF2 engine: one generic matcher parameterised by its feasibility
//! rules and its semantic predicate.
//!
//! A [`Vf2Matcher`] indexes both graphs once. Every query builds a fresh
//! [`Matches`] iterator that owns its own search state, so queries never
//! interfere with each other and restarting a query restarts the search.

use std::collections::HashSet;
use std::marker::PhantomData;

use graphx_common::{Config, MatchMode};
use graphx_graph::GraphView;
use tracing::{debug, info};

use crate::error::{MatchError, Result};
use crate::feasibility::{Directed, FeasibilityRules, RuleContext, Undirected};
use crate::graph_index::GraphIndex;
use crate::mapping::{Mapping, MappingSet};
use crate::semantic::{SemanticContext, SemanticFeasibility, Structural};
use crate::state::{SearchState, StateRecord, commit, restore};
use crate::stats::SearchStats;

/// Finds mappings from (a subgraph of) `g1`, the target, onto all of `g2`,
/// the pattern.
pub struct Vf2Matcher<'g, G1, G2, R = Undirected, S = Structural>
where
    G1: GraphView,
    G2: GraphView,
{
    g1: GraphIndex<'g, G1>,
    g2: GraphIndex<'g, G2>,
    semantics: S,
    rules: PhantomData<R>,
}

/// Matcher for undirected graphs and multigraphs.
pub type GraphMatcher<'g, G1, G2, S = Structural> = Vf2Matcher<'g, G1, G2, Undirected, S>;

/// Matcher for directed graphs and multigraphs.
pub type DiGraphMatcher<'g, G1, G2, S = Structural> = Vf2Matcher<'g, G1, G2, Directed, S>;

impl<'g, G1, G2, R> Vf2Matcher<'g, G1, G2, R, Structural>
where
    G1: GraphView,
    G2: GraphView,
    R: FeasibilityRules,
{
    /// Purely structural matcher.
    pub fn new(g1: &'g G1, g2: &'g G2) -> Result<Self> {
        Self::with_semantics(g1, g2, Structural)
    }
}

impl<'g, G1, G2, R, S> Vf2Matcher<'g, G1, G2, R, S>
where
    G1: GraphView,
    G2: GraphView,
    R: FeasibilityRules,
    S: SemanticFeasibility<G1, G2>,
{
    /// Matcher that also consults `semantics` for every structurally
    /// feasible pair.
    ///
    /// # Errors
    /// [`MatchError::OrientationMismatch`] when either graph's orientation
    /// differs from the rule set's.
    pub fn with_semantics(g1: &'g G1, g2: &'g G2, semantics: S) -> Result<Self> {
        let (g1_directed, g2_directed) = (g1.is_directed(), g2.is_directed());
        if g1_directed != R::DIRECTED || g2_directed != R::DIRECTED {
            return Err(MatchError::OrientationMismatch {
                expected_directed: R::DIRECTED,
                g1_directed,
                g2_directed,
            });
        }

        Ok(Self {
            g1: GraphIndex::build(g1),
            g2: GraphIndex::build(g2),
            semantics,
            rules: PhantomData,
        })
    }

    /// Index of the target graph.
    #[must_use]
    pub const fn g1(&self) -> &GraphIndex<'g, G1> {
        &self.g1
    }

    /// Index of the pattern graph.
    #[must_use]
    pub const fn g2(&self) -> &GraphIndex<'g, G2> {
        &self.g2
    }

    /// Semantic predicate in use.
    #[must_use]
    pub const fn semantics(&self) -> &S {
        &self.semantics
    }

    /// Lazily enumerates every mapping for `mode`, starting a fresh search.
    pub fn matches(&self, mode: MatchMode) -> Matches<'_, 'g, G1, G2, R, S> {
        Matches::new(self, mode)
    }

    /// Whether `g1` and `g2` are isomorphic.
    ///
    /// Graphs with different orders or degree sequences are rejected without
    /// searching.
    pub fn is_isomorphic(&self) -> bool {
        if self.g1.len() != self.g2.len() {
            debug!(
                "Order mismatch: {} vs {} nodes, not isomorphic",
                self.g1.len(),
                self.g2.len()
            );
            return false;
        }

        if self.g1.degree_sequence() != self.g2.degree_sequence() {
            debug!("Degree sequences differ, not isomorphic");
            return false;
        }

        self.isomorphisms_iter().next().is_some()
    }

    /// Every isomorphism between `g1` and `g2`.
    pub fn isomorphisms_iter(&self) -> Matches<'_, 'g, G1, G2, R, S> {
        self.matches(MatchMode::Graph)
    }

    /// Whether a subgraph of `g1` induced by some node subset is isomorphic
    /// to `g2`.
    pub fn subgraph_is_isomorphic(&self) -> bool {
        self.subgraph_isomorphisms_iter().next().is_some()
    }

    /// Every isomorphism between `g2` and an induced subgraph of `g1`.
    pub fn subgraph_isomorphisms_iter(&self) -> Matches<'_, 'g, G1, G2, R, S> {
        self.matches(MatchMode::Subgraph)
    }

    /// Whether `g2` embeds into `g1`, with extra `g1` edges allowed.
    pub fn subgraph_is_monomorphic(&self) -> bool {
        self.subgraph_monomorphisms_iter().next().is_some()
    }

    /// Every monomorphism of `g2` into `g1`.
    pub fn subgraph_monomorphisms_iter(&self) -> Matches<'_, 'g, G1, G2, R, S> {
        self.matches(MatchMode::Mono)
    }

    /// The first mapping the search finds, if any.
    pub fn first(&self, mode: MatchMode) -> Option<Mapping<G1::Node, G2::Node>> {
        self.matches(mode).next()
    }

    /// Number of mappings for `mode`, without dedupe or limit.
    pub fn count(&self, mode: MatchMode) -> usize {
        self.matches(mode).count()
    }

    /// Collects mappings eagerly, applying the configured dedupe and limit.
    pub fn find_all(&self, config: &Config) -> MappingSet<G1::Node, G2::Node> {
        info!(
            "Starting {} search: {} target nodes, {} pattern nodes",
            config.mode,
            self.g1.len(),
            self.g2.len()
        );

        let mut items = Vec::new();
        let mut seen: HashSet<Vec<usize>> = HashSet::new();
        let mut matches = self.matches(config.mode);

        if !config.limit_reached(0) {
            for mapping in matches.by_ref() {
                if config.dedupe.is_enabled() && !seen.insert(mapping.signature().to_vec()) {
                    continue;
                }
                items.push(mapping);
                if config.limit_reached(items.len()) {
                    break;
                }
            }
        }

        info!(
            "Finished {} search: {} mappings kept ({})",
            config.mode,
            items.len(),
            matches.stats()
        );
        MappingSet::new(items, config.mode)
    }
}

struct Frame {
    candidates: Vec<(usize, usize)>,
    cursor: usize,
    /// The pair this frame currently has committed, if any.
    committed: Option<StateRecord>,
}

impl Frame {
    const fn new(candidates: Vec<(usize, usize)>) -> Self {
        Self {
            candidates,
            cursor: 0,
            committed: None,
        }
    }
}

/// Lazy depth-first enumeration of complete mappings.
///
/// The search runs on an explicit stack of candidate frames, one per
/// mapped pair, and pauses after every complete mapping.
pub struct Matches<'m, 'g, G1, G2, R, S>
where
    G1: GraphView,
    G2: GraphView,
{
    matcher: &'m Vf2Matcher<'g, G1, G2, R, S>,
    mode: MatchMode,
    state: SearchState,
    stack: Vec<Frame>,
    stats: SearchStats,
    started: bool,
    exhausted: bool,
}

impl<'m, 'g, G1, G2, R, S> Matches<'m, 'g, G1, G2, R, S>
where
    G1: GraphView,
    G2: GraphView,
    R: FeasibilityRules,
    S: SemanticFeasibility<G1, G2>,
{
    fn new(matcher: &'m Vf2Matcher<'g, G1, G2, R, S>, mode: MatchMode) -> Self {
        let (n1, n2) = (matcher.g1.len(), matcher.g2.len());
        let impossible = n1 < n2 || (mode.requires_equal_order() && n1 != n2);
        if impossible {
            debug!("{} search impossible: {} target nodes, {} pattern nodes", mode, n1, n2);
        }

        Self {
            matcher,
            mode,
            state: SearchState::new(n1, n2),
            stack: Vec::new(),
            stats: SearchStats::new(),
            started: false,
            exhausted: impossible,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Counters for the search so far.
    #[must_use]
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn rule_context<'a>(
        matcher: &'a Vf2Matcher<'g, G1, G2, R, S>,
        state: &'a SearchState,
        mode: MatchMode,
    ) -> RuleContext<'a> {
        RuleContext {
            g1: matcher.g1.adjacency(),
            g2: matcher.g2.adjacency(),
            state,
            mode,
        }
    }

    fn emit(&mut self) -> Mapping<G1::Node, G2::Node> {
        let (g1, g2) = (&self.matcher.g1, &self.matcher.g2);
        let pairs = self
            .stack
            .iter()
            .filter_map(|frame| frame.committed)
            .map(|r| (g1.node(r.g1_node).clone(), g2.node(r.g2_node).clone(), r.g1_node));

        let mapping = Mapping::from_pairs(pairs);
        self.stats.record_mapping();
        mapping
    }

    fn finish(&mut self) {
        self.exhausted = true;
        debug!("{} search exhausted ({})", self.mode, self.stats);
    }
}

impl<G1, G2, R, S> Iterator for Matches<'_, '_, G1, G2, R, S>
where
    G1: GraphView,
    G2: GraphView,
    R: FeasibilityRules,
    S: SemanticFeasibility<G1, G2>,
{
    type Item = Mapping<G1::Node, G2::Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let matcher = self.matcher;
        let target_depth = matcher.g2.len();

        if !self.started {
            self.started = true;
            if target_depth == 0 {
                self.stats.record_mapping();
                self.finish();
                return Some(Mapping::from_pairs(std::iter::empty()));
            }
            let ctx = Self::rule_context(matcher, &self.state, self.mode);
            self.stack.push(Frame::new(R::candidate_pairs(&ctx)));
        }

        loop {
            let Some(frame) = self.stack.last_mut() else {
                self.finish();
                return None;
            };

            if let Some(record) = frame.committed.take() {
                restore(&mut self.state, record);
                self.stats.record_restore();
            }

            let mut chosen = None;
            {
                let ctx = Self::rule_context(matcher, &self.state, self.mode);
                let sem_ctx = SemanticContext {
                    g1: &matcher.g1,
                    g2: &matcher.g2,
                    core_1: &self.state.g1.core,
                };

                while let Some(&(g1_node, g2_node)) = frame.candidates.get(frame.cursor) {
                    frame.cursor += 1;
                    self.stats.record_candidate();

                    if !R::syntactic_feasibility(&ctx, g1_node, g2_node) {
                        self.stats.record_syntactic_rejection();
                        continue;
                    }
                    if !matcher
                        .semantics
                        .semantic_feasibility(&sem_ctx, g1_node, g2_node)
                    {
                        self.stats.record_semantic_rejection();
                        continue;
                    }
                    chosen = Some((g1_node, g2_node));
                    break;
                }
            }

            let Some((g1_node, g2_node)) = chosen else {
                self.stack.pop();
                continue;
            };

            let record = commit(
                &mut self.state,
                matcher.g1.adjacency(),
                matcher.g2.adjacency(),
                g1_node,
                g2_node,
            );
            frame.committed = Some(record);
            self.stats.record_commit();

            if self.state.depth() == target_depth {
                return Some(self.emit());
            }

            let ctx = Self::rule_context(matcher, &self.state, self.mode);
            self.stack.push(Frame::new(R::candidate_pairs(&ctx)));
        }
    }
}

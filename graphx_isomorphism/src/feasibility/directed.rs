use crate::profiling::Timer;

use super::{
    FeasibilityRules, RuleContext, count_where, mapped_neighbours_agree, pair_with,
    unrestricted_pairs,
};

/// Rules for directed graphs, with separate in- and out-frontiers.
#[derive(Clone, Copy, Debug, Default)]
pub struct Directed;

impl FeasibilityRules for Directed {
    const DIRECTED: bool = true;

    fn candidate_pairs(ctx: &RuleContext<'_>) -> Vec<(usize, usize)> {
        let state = ctx.state;

        let t1_out: Vec<usize> = state.g1.out_frontier().collect();
        if let Some(g2_node) = state.g2.out_frontier().next() {
            if !t1_out.is_empty() {
                return pair_with(t1_out.into_iter(), g2_node);
            }
        }

        // Reached whenever either out-frontier is empty.
        let t1_in: Vec<usize> = state.g1.in_frontier().collect();
        if let Some(g2_node) = state.g2.in_frontier().next() {
            if !t1_in.is_empty() {
                return pair_with(t1_in.into_iter(), g2_node);
            }
        }

        unrestricted_pairs(state)
    }

    fn syntactic_feasibility(ctx: &RuleContext<'_>, g1_node: usize, g2_node: usize) -> bool {
        let _t = Timer::new("Directed::syntactic_feasibility");
        let RuleContext {
            g1,
            g2,
            state,
            mode,
        } = *ctx;

        // R_self
        if !mode.edge_count_ok(g1.self_loops(g1_node), g2.self_loops(g2_node)) {
            return false;
        }

        // R_pred
        let (pred1, pred2) = (g1.pred(g1_node), g2.pred(g2_node));
        if !mapped_neighbours_agree(state, mode, pred1, pred2) {
            return false;
        }

        // R_succ
        let (succ1, succ2) = (g1.succ(g1_node), g2.succ(g2_node));
        if !mapped_neighbours_agree(state, mode, succ1, succ2) {
            return false;
        }

        if !mode.uses_lookahead() {
            return true;
        }

        let sides = [(pred1, pred2), (succ1, succ2)];

        // R_termin
        for (nbrs1, nbrs2) in sides {
            let num1 = count_where(nbrs1, |n| state.g1.in_in_frontier(n));
            let num2 = count_where(nbrs2, |n| state.g2.in_in_frontier(n));
            if !mode.lookahead_ok(num1, num2) {
                return false;
            }
        }

        // R_termout
        for (nbrs1, nbrs2) in sides {
            let num1 = count_where(nbrs1, |n| state.g1.in_out_frontier(n));
            let num2 = count_where(nbrs2, |n| state.g2.in_out_frontier(n));
            if !mode.lookahead_ok(num1, num2) {
                return false;
            }
        }

        // R_new
        for (nbrs1, nbrs2) in sides {
            let num1 = count_where(nbrs1, |n| state.g1.is_new(n));
            let num2 = count_where(nbrs2, |n| state.g2.is_new(n));
            if !mode.lookahead_ok(num1, num2) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_index::GraphIndex;
    use crate::state::{SearchState, commit};
    use graphx_common::MatchMode;
    use graphx_graph::generators::{cycle_graph, path_graph};
    use graphx_graph::{AttrGraph, GraphKind};

    #[test]
    fn out_frontier_is_tried_first() {
        let g = cycle_graph(3, GraphKind::DIGRAPH);
        let index = GraphIndex::build(&g);
        let mut state = SearchState::new(3, 3);
        commit(&mut state, index.adjacency(), index.adjacency(), 0, 0);
        let ctx = RuleContext {
            g1: index.adjacency(),
            g2: index.adjacency(),
            state: &state,
            mode: MatchMode::Graph,
        };

        assert_eq!(Directed::candidate_pairs(&ctx), vec![(1, 1)]);
    }

    #[test]
    fn in_frontier_is_used_when_out_frontier_is_empty() {
        // 0 <- 1: mapping 0 leaves only an in-frontier.
        let mut g = AttrGraph::digraph();
        g.add_node(0);
        g.add_edge(1, 0);
        let mut g1 = g.clone();
        g1.add_node(2);
        let (i1, i2) = (GraphIndex::build(&g1), GraphIndex::build(&g));
        let mut state = SearchState::new(3, 2);
        commit(&mut state, i1.adjacency(), i2.adjacency(), 0, 0);
        let ctx = RuleContext {
            g1: i1.adjacency(),
            g2: i2.adjacency(),
            state: &state,
            mode: MatchMode::Subgraph,
        };

        assert_eq!(Directed::candidate_pairs(&ctx), vec![(1, 1)]);
    }

    #[test]
    fn edge_direction_matters() {
        let forward = path_graph(2, GraphKind::DIGRAPH);
        let mut backward = AttrGraph::digraph();
        backward.add_node(0);
        backward.add_edge(1, 0);
        let (i1, i2) = (GraphIndex::build(&forward), GraphIndex::build(&backward));
        let mut state = SearchState::new(2, 2);
        commit(&mut state, i1.adjacency(), i2.adjacency(), 0, 0);
        let ctx = RuleContext {
            g1: i1.adjacency(),
            g2: i2.adjacency(),
            state: &state,
            mode: MatchMode::Mono,
        };

        assert!(!Directed::syntactic_feasibility(&ctx, 1, 1));
    }
}

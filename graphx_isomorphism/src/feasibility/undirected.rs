use crate::profiling::Timer;

use super::{
    FeasibilityRules, RuleContext, count_where, mapped_neighbours_agree, pair_with,
    unrestricted_pairs,
};

/// Rules for undirected graphs, with a single in/out frontier per side.
#[derive(Clone, Copy, Debug, Default)]
pub struct Undirected;

impl FeasibilityRules for Undirected {
    const DIRECTED: bool = false;

    fn candidate_pairs(ctx: &RuleContext<'_>) -> Vec<(usize, usize)> {
        let state = ctx.state;

        let t1: Vec<usize> = state.g1.out_frontier().collect();
        match state.g2.out_frontier().next() {
            Some(g2_node) if !t1.is_empty() => pair_with(t1.into_iter(), g2_node),
            // Also taken when only one of the frontiers is empty.
            _ => unrestricted_pairs(state),
        }
    }

    fn syntactic_feasibility(ctx: &RuleContext<'_>, g1_node: usize, g2_node: usize) -> bool {
        let _t = Timer::new("Undirected::syntactic_feasibility");
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

        // R_neighbor
        let (nbrs1, nbrs2) = (g1.succ(g1_node), g2.succ(g2_node));
        if !mapped_neighbours_agree(state, mode, nbrs1, nbrs2) {
            return false;
        }

        if !mode.uses_lookahead() {
            return true;
        }

        // R_terminout
        let term1 = count_where(nbrs1, |n| state.g1.in_out_frontier(n));
        let term2 = count_where(nbrs2, |n| state.g2.in_out_frontier(n));
        if !mode.lookahead_ok(term1, term2) {
            return false;
        }

        // R_new
        let new1 = count_where(nbrs1, |n| state.g1.is_new(n));
        let new2 = count_where(nbrs2, |n| state.g2.is_new(n));
        mode.lookahead_ok(new1, new2)
    }
}

//! Partial mapping plus frontier sets, and the commit/restore pair that
//! moves the search one level down or up.
//!
//! The engine owns a single [`SearchState`]. Each commit returns a
//! [`StateRecord`] value that the engine keeps on its stack; restoring that
//! record undoes exactly the commit that produced it. Restores must happen
//! in reverse commit order.

mod frontier;

pub(crate) use frontier::SideState;

use frontier::{tag, untag_depth};

use crate::graph_index::Adjacency;

#[derive(Clone, Debug)]
pub struct SearchState {
    pub(crate) g1: SideState,
    pub(crate) g2: SideState,
    /// Number of mapped pairs.
    pub(crate) depth: usize,
}

/// The pair added by one commit and the depth its frontier tags carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateRecord {
    pub g1_node: usize,
    pub g2_node: usize,
    pub depth: usize,
}

impl SearchState {
    #[contracts::debug_ensures(ret.depth == 0)]
    pub(crate) fn new(g1_len: usize, g2_len: usize) -> Self {
        Self {
            g1: SideState::new(g1_len),
            g2: SideState::new(g2_len),
            depth: 0,
        }
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// `core_1` and `core_2` are mutual inverses and `depth` counts them.
    pub(crate) fn is_consistent(&self) -> bool {
        let forward = self.g1.core.iter().enumerate().filter_map(|(n1, n2)| Some((n1, (*n2)?)));
        let mut mapped = 0;
        for (n1, n2) in forward {
            if self.g2.core.get(n2).copied().flatten() != Some(n1) {
                return false;
            }
            mapped += 1;
        }
        let backward = self.g2.core.iter().filter(|n| n.is_some()).count();
        mapped == self.depth && backward == self.depth
    }
}

/// Maps `g1_node` to `g2_node` and grows the frontiers around them.
#[contracts::debug_requires(!state.g1.is_mapped(g1_node) && !state.g2.is_mapped(g2_node))]
#[contracts::debug_ensures(state.g1.core[g1_node] == Some(g2_node))]
#[contracts::debug_ensures(state.g2.core[g2_node] == Some(g1_node))]
#[contracts::debug_ensures(state.is_consistent())]
pub(crate) fn commit(
    state: &mut SearchState,
    g1: &Adjacency,
    g2: &Adjacency,
    g1_node: usize,
    g2_node: usize,
) -> StateRecord {
    state.g1.core[g1_node] = Some(g2_node);
    state.g2.core[g2_node] = Some(g1_node);
    state.depth += 1;
    let depth = state.depth;

    grow(&mut state.g1, g1, g1_node, depth);
    grow(&mut state.g2, g2, g2_node, depth);

    tracing::trace!("commit {} -> {} at depth {}", g1_node, g2_node, depth);

    StateRecord {
        g1_node,
        g2_node,
        depth,
    }
}

/// Every unmapped neighbour of a mapped node other than `node` is already
/// tagged, so only `node`'s own neighbourhood can enter the frontier.
fn grow(side: &mut SideState, adjacency: &Adjacency, node: usize, depth: usize) {
    tag(&mut side.out, node, depth);

    if adjacency.is_directed() {
        tag(&mut side.inc, node, depth);
        for &succ in adjacency.succ(node).keys() {
            if !side.is_mapped(succ) {
                tag(&mut side.out, succ, depth);
            }
        }
        for &pred in adjacency.pred(node).keys() {
            if !side.is_mapped(pred) {
                tag(&mut side.inc, pred, depth);
            }
        }
    } else {
        for &nbr in adjacency.succ(node).keys() {
            if !side.is_mapped(nbr) {
                tag(&mut side.out, nbr, depth);
            }
        }
    }
}

/// Undoes the commit that produced `record`.
#[contracts::debug_requires(state.depth == record.depth)]
#[contracts::debug_requires(state.g1.core[record.g1_node] == Some(record.g2_node))]
#[contracts::debug_ensures(!state.g1.is_mapped(record.g1_node) && !state.g2.is_mapped(record.g2_node))]
#[contracts::debug_ensures(state.is_consistent())]
pub(crate) fn restore(state: &mut SearchState, record: StateRecord) {
    state.g1.core[record.g1_node] = None;
    state.g2.core[record.g2_node] = None;

    for side in [&mut state.g1, &mut state.g2] {
        untag_depth(&mut side.out, record.depth);
        untag_depth(&mut side.inc, record.depth);
    }
    state.depth -= 1;

    tracing::trace!(
        "restore {} -> {} from depth {}",
        record.g1_node,
        record.g2_node,
        record.depth
    );
}

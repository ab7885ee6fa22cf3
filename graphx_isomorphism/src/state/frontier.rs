//! Depth-tagged frontier bookkeeping for one side of the search.
//!
//! A tag of `0` means "not in the frontier"; any other value is the mapping
//! size at which the node entered it. Mapped nodes keep their tag.

#[derive(Clone, Debug)]
pub struct SideState {
    /// Partial mapping from this side's nodes to the other side's nodes.
    pub(crate) core: Vec<Option<usize>>,
    /// Out-frontier tags. Undirected searches use this as the single
    /// in/out frontier.
    pub(crate) out: Vec<usize>,
    /// In-frontier tags, only written by directed searches.
    pub(crate) inc: Vec<usize>,
}

impl SideState {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            core: vec![None; len],
            out: vec![0; len],
            inc: vec![0; len],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.core.len()
    }

    #[inline]
    pub(crate) fn is_mapped(&self, node: usize) -> bool {
        self.core[node].is_some()
    }

    #[inline]
    pub(crate) fn in_out_frontier(&self, node: usize) -> bool {
        self.out[node] != 0 && !self.is_mapped(node)
    }

    #[inline]
    pub(crate) fn in_in_frontier(&self, node: usize) -> bool {
        self.inc[node] != 0 && !self.is_mapped(node)
    }

    /// Neither mapped nor in any frontier.
    #[inline]
    pub(crate) fn is_new(&self, node: usize) -> bool {
        self.out[node] == 0 && self.inc[node] == 0
    }

    pub(crate) fn unmapped(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&n| !self.is_mapped(n))
    }

    pub(crate) fn out_frontier(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&n| self.in_out_frontier(n))
    }

    pub(crate) fn in_frontier(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&n| self.in_in_frontier(n))
    }
}

/// Tags `node` with `depth` unless it already carries a tag.
#[inline]
pub(crate) fn tag(tags: &mut [usize], node: usize, depth: usize) {
    if tags[node] == 0 {
        tags[node] = depth;
    }
}

/// Clears every tag written at `depth`.
pub(crate) fn untag_depth(tags: &mut [usize], depth: usize) {
    for t in tags.iter_mut().filter(|t| **t == depth) {
        *t = 0;
    }
}

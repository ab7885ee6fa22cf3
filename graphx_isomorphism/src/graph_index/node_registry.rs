use std::hash::Hash;

use indexmap::IndexSet;

/// Dense indices for the nodes of one graph, assigned in iteration order.
#[derive(Clone, Debug)]
pub struct NodeRegistry<'g, N> {
    nodes: IndexSet<&'g N>,
}

impl<'g, N> NodeRegistry<'g, N>
where
    N: Eq + Hash,
{
    pub fn build(nodes: impl IntoIterator<Item = &'g N>) -> Self {
        Self {
            nodes: nodes.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Panics if `index` was not handed out by this registry.
    #[must_use]
    pub fn node(&self, index: usize) -> &'g N {
        self.nodes[index]
    }

    #[must_use]
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.nodes.get_index_of(node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &'g N)> + '_ {
        self.nodes.iter().copied().enumerate()
    }
}

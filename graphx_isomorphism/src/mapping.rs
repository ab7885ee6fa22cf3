//! Mappings reported by the matcher.

use std::collections::HashMap;
use std::hash::Hash;

use graphx_common::MatchMode;
use indexmap::IndexMap;

/// One complete G1 -> G2 mapping, owned by the caller.
///
/// Pairs are kept in the order the search added them. Equality ignores that
/// order.
#[derive(Clone, Debug)]
pub struct Mapping<N1, N2> {
    /// G1 (target) to G2 (pattern) node mapping
    forward: IndexMap<N1, N2>,
    /// G2 (pattern) to G1 (target) node mapping
    backward: IndexMap<N2, N1>,
    /// Sorted G1 node indices, used for deduplication.
    signature: Vec<usize>,
}

impl<N1, N2> Mapping<N1, N2>
where
    N1: Clone + Eq + Hash,
    N2: Clone + Eq + Hash,
{
    #[contracts::debug_ensures(ret.forward.len() == ret.backward.len())]
    pub(crate) fn from_pairs(pairs: impl IntoIterator<Item = (N1, N2, usize)>) -> Self {
        let mut forward = IndexMap::new();
        let mut backward = IndexMap::new();
        let mut signature = Vec::new();

        for (g1_node, g2_node, g1_index) in pairs {
            backward.insert(g2_node.clone(), g1_node.clone());
            forward.insert(g1_node, g2_node);
            signature.push(g1_index);
        }
        signature.sort_unstable();

        Self {
            forward,
            backward,
            signature,
        }
    }

    /// Image of a G1 node.
    #[must_use]
    pub fn get(&self, g1_node: &N1) -> Option<&N2> {
        self.forward.get(g1_node)
    }

    /// Preimage of a G2 node.
    #[must_use]
    pub fn get_inverse(&self, g2_node: &N2) -> Option<&N1> {
        self.backward.get(g2_node)
    }

    #[must_use]
    pub fn contains(&self, g1_node: &N1, g2_node: &N2) -> bool {
        self.get(g1_node) == Some(g2_node)
    }

    /// `(g1_node, g2_node)` pairs in the order they were matched.
    pub fn iter(&self) -> impl Iterator<Item = (&N1, &N2)> {
        self.forward.iter()
    }

    #[contracts::debug_requires(self.forward.len() == self.backward.len())]
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The G1 nodes this mapping covers, as sorted indices in G1's node order.
    #[must_use]
    pub fn signature(&self) -> &[usize] {
        &self.signature
    }

    #[must_use]
    pub fn to_hash_map(&self) -> HashMap<N1, N2> {
        self.forward
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    #[must_use]
    pub fn into_pairs(self) -> Vec<(N1, N2)> {
        self.forward.into_iter().collect()
    }
}

impl<N1, N2> PartialEq for Mapping<N1, N2>
where
    N1: Eq + Hash,
    N2: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward
    }
}

impl<N1: Eq + Hash, N2: Eq> Eq for Mapping<N1, N2> {}

impl<'a, N1, N2> IntoIterator for &'a Mapping<N1, N2> {
    type Item = (&'a N1, &'a N2);
    type IntoIter = indexmap::map::Iter<'a, N1, N2>;

    fn into_iter(self) -> Self::IntoIter {
        self.forward.iter()
    }
}

/// A collection of mappings found during one search.
#[derive(Clone, Debug)]
pub struct MappingSet<N1, N2> {
    pub items: Vec<Mapping<N1, N2>>,
    pub mode: MatchMode,
}

impl<N1, N2> MappingSet<N1, N2> {
    #[must_use]
    pub const fn new(items: Vec<Mapping<N1, N2>>, mode: MatchMode) -> Self {
        Self { items, mode }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Mapping<N1, N2>> {
        self.items.iter()
    }
}

impl<N1, N2> IntoIterator for MappingSet<N1, N2> {
    type Item = Mapping<N1, N2>;
    type IntoIter = std::vec::IntoIter<Mapping<N1, N2>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, N1, N2> IntoIterator for &'a MappingSet<N1, N2> {
    type Item = &'a Mapping<N1, N2>;
    type IntoIter = std::slice::Iter<'a, Mapping<N1, N2>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_insertion_order() {
        let a = Mapping::from_pairs([("x", 1, 0), ("y", 2, 1)]);
        let b = Mapping::from_pairs([("y", 2, 1), ("x", 1, 0)]);
        let c = Mapping::from_pairs([("x", 2, 0), ("y", 1, 1)]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.signature(), b.signature());
        assert_eq!(a.signature(), c.signature());
    }

    #[test]
    fn both_directions_are_queryable() {
        let m = Mapping::from_pairs([("x", 'a', 3), ("y", 'b', 1)]);

        assert_eq!(m.get(&"x"), Some(&'a'));
        assert_eq!(m.get_inverse(&'b'), Some(&"y"));
        assert!(m.contains(&"y", &'b'));
        assert_eq!(m.signature(), &[1, 3]);
        assert_eq!(m.iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(m.to_hash_map().len(), 2);
    }
}

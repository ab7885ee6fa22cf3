use graphx_graph::GraphView;
use indexmap::IndexMap;

use super::NodeRegistry;

/// Neighbour index -> number of parallel edges.
pub type NeighbourMap = IndexMap<usize, usize>;

/// Index-level adjacency of one graph.
///
/// Undirected graphs only fill `succ`; their predecessor view aliases it.
#[derive(Clone, Debug, Default)]
pub struct Adjacency {
    directed: bool,
    succ: Vec<NeighbourMap>,
    pred: Vec<NeighbourMap>,
    degree: Vec<usize>,
}

impl Adjacency {
    pub fn build<'g, G>(graph: &'g G, registry: &NodeRegistry<'g, G::Node>) -> Self
    where
        G: GraphView,
    {
        let directed = graph.is_directed();

        let succ: Vec<NeighbourMap> = registry
            .iter()
            .map(|(_, node)| {
                graph
                    .successors(node)
                    .filter_map(|nbr| {
                        let multiplicity = graph.edge_multiplicity(node, nbr);
                        (multiplicity > 0).then_some((registry.index_of(nbr)?, multiplicity))
                    })
                    .collect()
            })
            .collect();

        let pred: Vec<NeighbourMap> = if directed {
            registry
                .iter()
                .map(|(_, node)| {
                    graph
                        .predecessors(node)
                        .filter_map(|nbr| {
                            let multiplicity = graph.edge_multiplicity(nbr, node);
                            (multiplicity > 0).then_some((registry.index_of(nbr)?, multiplicity))
                        })
                        .collect()
                })
                .collect()
        } else {
            Vec::new()
        };

        let mut adjacency = Self {
            directed,
            succ,
            pred,
            degree: Vec::new(),
        };
        let degree = (0..adjacency.len())
            .map(|n| adjacency.compute_degree(n))
            .collect();
        adjacency.degree = degree;
        adjacency
    }

    fn compute_degree(&self, node: usize) -> usize {
        let out: usize = self.succ[node].values().sum();
        if self.directed {
            out + self.pred[node].values().sum::<usize>()
        } else {
            out + self.self_loops(node)
        }
    }

    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.succ.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.succ.is_empty()
    }

    /// Out-neighbours, or every neighbour when undirected.
    #[must_use]
    pub fn succ(&self, node: usize) -> &NeighbourMap {
        &self.succ[node]
    }

    /// In-neighbours, or every neighbour when undirected.
    #[must_use]
    pub fn pred(&self, node: usize) -> &NeighbourMap {
        if self.directed {
            &self.pred[node]
        } else {
            &self.succ[node]
        }
    }

    /// Parallel edges `u -> v`.
    #[must_use]
    pub fn multiplicity(&self, u: usize, v: usize) -> usize {
        self.succ[u].get(&v).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn self_loops(&self, node: usize) -> usize {
        self.multiplicity(node, node)
    }

    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.degree[node]
    }
}

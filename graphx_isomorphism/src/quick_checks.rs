//! Cheap necessary conditions for isomorphism.
//!
//! A `false` result proves the graphs are not isomorphic. A `true` result
//! proves nothing.

use graphx_graph::GraphView;

use crate::profiling::Timer;

fn degree_sequence<G: GraphView>(graph: &G) -> Vec<usize> {
    let mut degrees: Vec<usize> = graph.nodes().map(|n| graph.degree(n)).collect();
    degrees.sort_unstable();
    degrees
}

/// Triangles through `node`, counting each unordered neighbour pair once.
fn triangles<G: GraphView>(graph: &G, node: &G::Node) -> usize {
    let nbrs: Vec<&G::Node> = graph.successors(node).filter(|&n| n != node).collect();
    let mut count = 0;
    for (i, u) in nbrs.iter().enumerate() {
        for w in &nbrs[i + 1..] {
            if graph.edge_multiplicity(u, w) > 0 {
                count += 1;
            }
        }
    }
    count
}

fn degree_triangle_sequence<G: GraphView>(graph: &G) -> Vec<(usize, usize)> {
    let mut props: Vec<(usize, usize)> = graph
        .nodes()
        .map(|n| (graph.degree(n), triangles(graph, n)))
        .collect();
    props.sort_unstable();
    props
}

/// Same order and same sorted degree sequence.
pub fn faster_could_be_isomorphic<G1: GraphView, G2: GraphView>(g1: &G1, g2: &G2) -> bool {
    let _t = Timer::new("faster_could_be_isomorphic");
    g1.node_count() == g2.node_count() && degree_sequence(g1) == degree_sequence(g2)
}

/// [`faster_could_be_isomorphic`] plus equal sorted `(degree, triangles)`
/// sequences for undirected graphs.
pub fn fast_could_be_isomorphic<G1: GraphView, G2: GraphView>(g1: &G1, g2: &G2) -> bool {
    if !faster_could_be_isomorphic(g1, g2) {
        return false;
    }
    if g1.is_directed() || g2.is_directed() {
        return true;
    }

    let _t = Timer::new("fast_could_be_isomorphic");
    degree_triangle_sequence(g1) == degree_triangle_sequence(g2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphx_graph::GraphKind;
    use graphx_graph::generators::{cycle_graph, path_graph, star_graph};

    #[test]
    fn degree_sequences_reject_triangle_vs_path() {
        let triangle = cycle_graph(3, GraphKind::GRAPH);
        let path = path_graph(3, GraphKind::GRAPH);

        assert!(!faster_could_be_isomorphic(&triangle, &path));
        assert!(!fast_could_be_isomorphic(&triangle, &path));
        assert!(faster_could_be_isomorphic(&path, &path));
    }

    #[test]
    fn triangles_separate_equal_degree_sequences() {
        // Two triangles versus a hexagon: every node has degree 2.
        let mut triangles = cycle_graph(3, GraphKind::GRAPH);
        triangles.add_edges_from([(3, 4), (4, 5), (5, 3)]);
        let hexagon = cycle_graph(6, GraphKind::GRAPH);

        assert!(faster_could_be_isomorphic(&triangles, &hexagon));
        assert!(!fast_could_be_isomorphic(&triangles, &hexagon));
    }

    #[test]
    fn directed_graphs_fall_back_to_degrees() {
        let star = star_graph(2, GraphKind::DIGRAPH);
        let path = path_graph(3, GraphKind::DIGRAPH);

        // Same total degrees even though the edges point differently.
        assert!(fast_could_be_isomorphic(&star, &path));
    }
}

//! Node-link JSON loading.
//!
//! ```json
//! {
//!   "directed": false,
//!   "multigraph": false,
//!   "nodes": [{"id": "a", "color": "red"}, {"id": 2}],
//!   "links": [{"source": "a", "target": 2, "weight": 1.5}]
//! }
//! ```
//!
//! Node ids may be strings or any other JSON value; non-string ids are
//! keyed by their JSON text, so `2` and `"2"` are different nodes.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use graphx_graph::{AttrGraph, Attributes, GraphKind, GraphView};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{CliError, Result};

#[derive(Debug, Deserialize)]
struct NodeLinkGraph {
    #[serde(default)]
    directed: bool,
    #[serde(default)]
    multigraph: bool,
    #[serde(default)]
    nodes: Vec<NodeRecord>,
    #[serde(default, alias = "edges")]
    links: Vec<LinkRecord>,
}

#[derive(Debug, Deserialize)]
struct NodeRecord {
    id: Value,
    #[serde(flatten)]
    attrs: Attributes,
}

#[derive(Debug, Deserialize)]
struct LinkRecord {
    source: Value,
    target: Value,
    #[serde(flatten)]
    attrs: Attributes,
}

/// Key used for a JSON node id.
pub fn node_key(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn load_graph(path: &Path) -> Result<AttrGraph<String>> {
    let file = File::open(path)?;
    let graph = read_graph(BufReader::new(file), &path.display().to_string())?;
    debug!(
        "Loaded {}: {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Parses one node-link document. `name` only appears in error messages.
pub fn read_graph<R: Read>(reader: R, name: &str) -> Result<AttrGraph<String>> {
    let doc: NodeLinkGraph = serde_json::from_reader(reader)?;
    let mut graph = AttrGraph::with_kind(GraphKind {
        directed: doc.directed,
        multi: doc.multigraph,
    });

    for node in doc.nodes {
        graph.add_node_with(node_key(&node.id), node.attrs);
    }

    for mut link in doc.links {
        // Multigraph edge keys identify parallel edges, they are not attributes.
        link.attrs.remove("key");

        let (source, target) = (node_key(&link.source), node_key(&link.target));
        for endpoint in [&source, &target] {
            if !graph.contains_node(endpoint) {
                return Err(CliError::UnknownEndpoint {
                    endpoint: endpoint.clone(),
                    graph: name.to_owned(),
                });
            }
        }
        graph.add_edge_with(source, target, link.attrs);
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_attributes_and_numeric_ids() {
        let doc = r#"{
            "directed": true,
            "nodes": [{"id": "a", "color": "red"}, {"id": 2}],
            "links": [{"source": "a", "target": 2, "weight": 1.5}]
        }"#;
        let graph = read_graph(doc.as_bytes(), "inline").unwrap();

        assert!(graph.is_directed());
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node_attr(&"a".to_owned(), "color"), Some(&Value::from("red")));
        assert_eq!(graph.edge_multiplicity(&"a".to_owned(), &"2".to_owned()), 1);
        let edge = graph.edge_attrs(&"a".to_owned(), &"2".to_owned()).unwrap();
        assert_eq!(edge[0].get("weight"), Some(&Value::from(1.5)));
    }

    #[test]
    fn multigraph_links_keep_parallel_edges() {
        let doc = r#"{
            "multigraph": true,
            "nodes": [{"id": 0}, {"id": 1}],
            "links": [
                {"source": 0, "target": 1, "key": 0},
                {"source": 0, "target": 1, "key": 1}
            ]
        }"#;
        let graph = read_graph(doc.as_bytes(), "inline").unwrap();

        assert_eq!(graph.edge_multiplicity(&"1".to_owned(), &"0".to_owned()), 2);
        let edges = graph.edge_attrs(&"0".to_owned(), &"1".to_owned()).unwrap();
        assert!(edges.iter().all(|attrs| attrs.is_empty()));
    }

    #[test]
    fn unknown_endpoints_are_rejected() {
        let doc = r#"{"nodes": [{"id": "a"}], "links": [{"source": "a", "target": "b"}]}"#;
        let err = read_graph(doc.as_bytes(), "broken").unwrap_err();

        assert!(matches!(
            err,
            CliError::UnknownEndpoint { ref endpoint, ref graph } if endpoint == "b" && graph == "broken"
        ));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::Builder::new()
            .prefix("graph_")
            .suffix(".json")
            .tempfile()
            .unwrap();
        write!(file, r#"{{"nodes": [{{"id": "x"}}, {{"id": "y"}}], "edges": [{{"source": "x", "target": "y"}}]}}"#)
            .unwrap();

        let graph = load_graph(file.path()).unwrap();
        assert!(!graph.is_directed());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn missing_files_are_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_graph(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}

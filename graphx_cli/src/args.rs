use std::path::PathBuf;

use clap::Parser;
use graphx_common::{Config, Dedupe, MatchMode};
use graphx_isomorphism::match_helpers::{categorical_edge_match, categorical_node_match_many};
use graphx_isomorphism::{AttributeMatcher, EdgeMatchFn};
use serde_json::Value;

/// graphx - VF2 graph and subgraph isomorphism search
#[derive(Parser, Debug)]
#[command(name = "graphx")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Node-link JSON file holding the pattern graph (G2)
    #[arg(short = 'p', long)]
    pub pattern: PathBuf,

    /// Node-link JSON file holding the target graph (G1)
    #[arg(short = 't', long)]
    pub target: PathBuf,

    /// Kind of mapping to search for
    #[arg(short = 'm', long, value_enum, default_value = "graph")]
    pub mode: ModeArg,

    /// Stop after this many mappings
    #[arg(short = 'l', long)]
    pub limit: Option<usize>,

    /// Drop mappings that cover an already reported target node set
    #[arg(long, value_enum, default_value = "none")]
    pub dedupe: DedupeArg,

    /// Node attribute that must be equal on matched nodes (repeatable)
    #[arg(long = "node-attr", value_name = "KEY")]
    pub node_attrs: Vec<String>,

    /// Edge attribute that must be equal on matched edges (repeatable)
    #[arg(long = "edge-attr", value_name = "KEY")]
    pub edge_attrs: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Print only the number of mappings
    #[arg(short = 'c', long, default_value_t = false)]
    pub count: bool,
}

impl Args {
    /// Convert command-line arguments into internal configuration
    pub fn to_config(&self) -> Config {
        let builder = Config::builder()
            .mode(self.mode.into())
            .dedupe(self.dedupe.into());

        match self.limit {
            Some(limit) => builder.limit(limit).build(),
            None => builder.unlimited().build(),
        }
    }

    /// Categorical predicates for the requested attribute keys.
    pub fn semantics(&self) -> AttributeMatcher {
        let mut matcher = AttributeMatcher::new();

        if !self.node_attrs.is_empty() {
            let keys = self.node_attrs.iter().map(|key| (key.clone(), Value::Null));
            matcher = matcher.with_node_match(Some(categorical_node_match_many(keys)));
        }

        if !self.edge_attrs.is_empty() {
            let per_key: Vec<EdgeMatchFn> = self
                .edge_attrs
                .iter()
                .map(|key| categorical_edge_match(key.as_str(), Value::Null))
                .collect();
            matcher = matcher.edge_match(move |e1, e2| per_key.iter().all(|m| m(e1, e2)));
        }

        matcher
    }
}

/// Command-line argument wrapper for MatchMode
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// Whole-graph isomorphism
    #[value(name = "graph")]
    Graph,
    /// Induced subgraph isomorphism
    #[value(name = "subgraph")]
    Subgraph,
    /// Subgraph monomorphism
    #[value(name = "mono")]
    Mono,
}

impl From<ModeArg> for MatchMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Graph => MatchMode::Graph,
            ModeArg::Subgraph => MatchMode::Subgraph,
            ModeArg::Mono => MatchMode::Mono,
        }
    }
}

/// Command-line argument wrapper for Dedupe
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DedupeArg {
    #[value(name = "none")]
    None,
    #[value(name = "node-set")]
    NodeSet,
}

impl From<DedupeArg> for Dedupe {
    fn from(arg: DedupeArg) -> Self {
        match arg {
            DedupeArg::None => Dedupe::None,
            DedupeArg::NodeSet => Dedupe::NodeSet,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    /// One line per mapping
    #[value(name = "text")]
    Text,
    /// `mapping,target,pattern` rows
    #[value(name = "csv")]
    Csv,
    /// A JSON array of target -> pattern objects
    #[value(name = "json")]
    Json,
}

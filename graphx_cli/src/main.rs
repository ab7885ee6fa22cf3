//! graphx CLI
//!
//! Loads a pattern and a target graph from node-link JSON files and prints
//! the VF2 mappings of the pattern into the target.

#[global_allocator]
/// Global allocator using jemalloc.
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

mod args;
mod error;
mod graph_file;
mod output;

use std::io::Write;

use clap::Parser;
use graphx_isomorphism::enumerate_all_with;
use tracing::info;

use args::Args;
use error::Result;
use graph_file::load_graph;

/// Executes one search.
///
/// This function:
/// 1. Loads both graphs
/// 2. Builds the search configuration and attribute predicates
/// 3. Runs the matcher
/// 4. Writes the mappings, or their count, to `out`
fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let pattern = load_graph(&args.pattern)?;
    let target = load_graph(&args.target)?;
    let config = args.to_config();

    info!(
        "Searching {} in {} ({} mode)",
        args.pattern.display(),
        args.target.display(),
        config.mode
    );

    let mappings = enumerate_all_with(&target, &pattern, &config, args.semantics())?;

    if args.count {
        output::write_count(out, mappings.len(), args.format)
    } else {
        output::write_mappings(out, &mappings, args.format)
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let stdout = std::io::stdout();
    run(&args, &mut stdout.lock())?;

    Ok(())
}

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use shortpath::ingest::load_graph;
use shortpath::ShortPathResult;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Specify the graph file.
    #[arg(short, long, value_name = "GRAPH_FILE")]
    graph: PathBuf,
}

pub fn show(args: ShowArgs) -> ShortPathResult<()> {
    let graph = load_graph(args.graph)?;
    write!(io::stdout().lock(), "{graph}")?;
    Ok(())
}

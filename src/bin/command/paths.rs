use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use log::{debug, info};
use shortpath::common::VertexId;
use shortpath::ingest::load_graph;
use shortpath::report::write_json;
use shortpath::ShortPathResult;

#[derive(Debug, Args)]
pub struct PathsArgs {
    /// Specify the graph file.
    #[arg(short, long, value_name = "GRAPH_FILE")]
    graph: PathBuf,
    /// Specify the starting vertex.
    #[arg(short, long, value_name = "VERTEX_ID", allow_negative_numbers = true)]
    start: VertexId,
    /// Print the paths as JSON.
    #[arg(long)]
    json: bool,
}

pub fn paths(args: PathsArgs) -> ShortPathResult<()> {
    info!("{:?}", args);
    let mut graph = load_graph(&args.graph)?;
    let start = Instant::now();
    let paths = graph.dijkstra_shortest_path(args.start)?;
    debug!("dijkstra time: {} s", start.elapsed().as_secs_f64());
    let mut out = io::stdout().lock();
    if args.json {
        write_json(&mut out, &paths)?;
        writeln!(out)?;
    } else {
        write!(out, "{paths}")?;
    }
    Ok(())
}

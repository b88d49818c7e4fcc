use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use log::info;
use shortpath::ingest::{load_graph, read_queries};
use shortpath::report::{answer_queries, write_json};
use shortpath::ShortPathResult;

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Specify the graph file.
    #[arg(short, long, value_name = "GRAPH_FILE")]
    graph: PathBuf,
    /// Specify the adjacency query file.
    #[arg(short, long, value_name = "QUERY_FILE")]
    queries: PathBuf,
    /// Print the answers as JSON.
    #[arg(long)]
    json: bool,
}

pub fn query(args: QueryArgs) -> ShortPathResult<()> {
    info!("{:?}", args);
    let graph = load_graph(&args.graph)?;
    let queries = read_queries(&args.queries)?;
    let answers = answer_queries(&graph, queries);
    let mut out = io::stdout().lock();
    if args.json {
        write_json(&mut out, &answers)?;
        writeln!(out)?;
    } else {
        for answer in &answers {
            writeln!(out, "{answer}")?;
        }
    }
    Ok(())
}

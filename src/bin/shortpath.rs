mod command;

use std::process::ExitCode;

use clap::Parser;
use mimalloc::MiMalloc;

use crate::command::*;

#[global_allocator]
static ALLOC: MiMalloc = MiMalloc;

/// Shortest paths and adjacency queries on directed weighted graphs.
#[derive(Parser)]
#[command(version, about)]
#[command(propagate_version = true)]
enum Command {
    /// Answer the adjacency queries of a query file.
    Query(QueryArgs),
    /// Print the shortest path from a starting vertex to every vertex (Dijkstra).
    Paths(PathsArgs),
    /// Print the adjacency lists of a graph.
    Show(ShowArgs),
}

fn main() -> ExitCode {
    env_logger::init();
    let command = match Command::try_parse() {
        Ok(command) => command,
        Err(err) => {
            // Showing usage is not a failure.
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
    };
    let result = match command {
        Command::Query(args) => query(args),
        Command::Paths(args) => paths(args),
        Command::Show(args) => show(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

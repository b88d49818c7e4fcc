//! Text and JSON rendering of query answers and shortest-path results.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::common::{VertexId, Weight};
use crate::error::ShortPathResult;
use crate::graph::Graph;
use crate::shortest_path::{PathOutcome, ShortestPaths};

/// The answer to one adjacency query, rendered as
/// `<start> <end>: connected <weight>` or `<start> <end>: not_connected`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QueryAnswer {
    pub start: VertexId,
    pub end: VertexId,
    pub distance: Option<Weight>,
}

impl QueryAnswer {
    pub fn answer(graph: &Graph, start: VertexId, end: VertexId) -> Self {
        Self {
            start,
            end,
            distance: graph.distance_between(start, end),
        }
    }
}

impl fmt::Display for QueryAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: ", self.start, self.end)?;
        match self.distance {
            Some(distance) => write!(f, "connected {distance:.1}"),
            None => write!(f, "not_connected"),
        }
    }
}

pub fn answer_queries<I>(graph: &Graph, queries: I) -> Vec<QueryAnswer>
where
    I: IntoIterator<Item = (VertexId, VertexId)>,
{
    queries
        .into_iter()
        .map(|(start, end)| QueryAnswer::answer(graph, start, end))
        .collect()
}

impl fmt::Display for PathOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOutcome::Reachable { path, cost } => {
                for id in path {
                    write!(f, " {id}")?;
                }
                write!(f, " cost: {cost:.1}")
            }
            PathOutcome::Unreachable => write!(f, " not_possible"),
        }
    }
}

/// One line per vertex in ascending id order.
impl fmt::Display for ShortestPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, outcome) in self.iter() {
            writeln!(f, "{id}:{outcome}")?;
        }
        Ok(())
    }
}

pub fn write_json<W: Write, T: Serialize>(writer: W, value: &T) -> ShortPathResult<()> {
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}

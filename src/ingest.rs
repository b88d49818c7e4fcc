//! Readers for the plain-text graph and query files.
//!
//! A graph file starts with the vertex count, followed by one line per vertex:
//! `<start> (<end> <weight>)*`. A query file is a list of `<start> <end>`
//! pairs. Tokens are separated by any whitespace.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use itertools::Itertools;
use log::{debug, warn};

use crate::common::{VertexId, Weight};
use crate::error::{ShortPathError, ShortPathResult};
use crate::graph::{EdgeRecord, Graph};

fn open<P: AsRef<Path>>(path: P) -> ShortPathResult<BufReader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ShortPathError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Splits the input into lines of whitespace-separated tokens, skipping blank
/// lines.
fn token_lines<R: Read>(reader: R) -> impl Iterator<Item = ShortPathResult<Vec<String>>> {
    ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader)
        .into_records()
        .map(|record| {
            let tokens = record?
                .iter()
                .flat_map(str::split_whitespace)
                .map(str::to_owned)
                .collect_vec();
            Ok(tokens)
        })
        .filter(|tokens| !matches!(tokens, Ok(tokens) if tokens.is_empty()))
}

pub fn load_graph<P: AsRef<Path>>(path: P) -> ShortPathResult<Graph> {
    let records = read_graph(path)?;
    Ok(Graph::from_records(records))
}

pub fn read_graph<P: AsRef<Path>>(path: P) -> ShortPathResult<Vec<EdgeRecord>> {
    read_graph_from_reader(open(path)?)
}

pub fn read_graph_from_reader<R: Read>(reader: R) -> ShortPathResult<Vec<EdgeRecord>> {
    let mut lines = token_lines(reader);
    let header = lines
        .next()
        .transpose()?
        .ok_or_else(|| ShortPathError::Parse("expect vertex count, found empty input".into()))?;
    let num_vertices = header[0].parse::<usize>().map_err(|e| {
        let err = format!("invalid vertex count {}: {e}", header[0]);
        ShortPathError::Parse(err)
    })?;
    // Anything after the count on the first line is read as a vertex line.
    let rest: Option<ShortPathResult<_>> = (header.len() > 1).then(|| Ok(header[1..].to_vec()));

    let mut records = Vec::new();
    for (line, tokens) in rest.into_iter().chain(lines).enumerate() {
        let tokens = tokens?;
        match parse_record(&tokens) {
            Some(record) => records.push(record),
            None => {
                warn!(
                    "invalid start vertex {} on vertex line {line}, stop reading",
                    tokens[0]
                );
                break;
            }
        }
    }
    if records.len() != num_vertices {
        debug!(
            "graph header declares {num_vertices} vertices, read {} vertex lines",
            records.len()
        );
    }
    Ok(records)
}

/// Parses one vertex line. Returns `None` if the start id is malformed. A
/// malformed `(end, weight)` pair drops that pair and the rest of the line.
fn parse_record(tokens: &[String]) -> Option<EdgeRecord> {
    let start = tokens.first()?.parse::<VertexId>().ok()?;
    let mut record = EdgeRecord::new(start);
    for pair in tokens[1..].chunks(2) {
        let edge = match pair {
            [dst, weight] => dst
                .parse::<VertexId>()
                .ok()
                .zip(weight.parse::<Weight>().ok()),
            _ => None,
        };
        let Some((dst, weight)) = edge else {
            warn!(
                "malformed edge {:?} of vertex {start}, keep {} edges read so far",
                pair.join(" "),
                record.edges().len()
            );
            break;
        };
        record.push_edge(dst, weight);
    }
    Some(record)
}

pub fn read_queries<P: AsRef<Path>>(path: P) -> ShortPathResult<Vec<(VertexId, VertexId)>> {
    read_queries_from_reader(open(path)?)
}

/// Reads `<start> <end>` pairs until the first token that is not a vertex id.
pub fn read_queries_from_reader<R: Read>(reader: R) -> ShortPathResult<Vec<(VertexId, VertexId)>> {
    let tokens = token_lines(reader)
        .flatten_ok()
        .collect::<ShortPathResult<Vec<_>>>()?;
    let mut queries = Vec::with_capacity(tokens.len() / 2);
    for (start, end) in tokens.iter().tuples() {
        match (start.parse::<VertexId>(), end.parse::<VertexId>()) {
            (Ok(start), Ok(end)) => queries.push((start, end)),
            _ => {
                warn!("invalid query {start} {end}, stop reading");
                break;
            }
        }
    }
    Ok(queries)
}

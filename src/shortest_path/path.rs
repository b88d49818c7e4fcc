use std::collections::BTreeMap;
use std::iter;

use serde::Serialize;

use crate::common::{VertexId, Weight};
use crate::graph::{Graph, Vertex};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome {
    Reachable { path: Vec<VertexId>, cost: Weight },
    Unreachable,
}

impl PathOutcome {
    pub fn reachable(path: Vec<VertexId>, cost: Weight) -> Self {
        Self::Reachable { path, cost }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable { .. })
    }

    pub fn path(&self) -> Option<&[VertexId]> {
        match self {
            Self::Reachable { path, .. } => Some(path),
            Self::Unreachable => None,
        }
    }

    pub fn cost(&self) -> Option<Weight> {
        match self {
            Self::Reachable { cost, .. } => Some(*cost),
            Self::Unreachable => None,
        }
    }
}

/// Shortest paths from one source to every vertex of the graph, keyed by
/// vertex id in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    source: VertexId,
    paths: BTreeMap<VertexId, PathOutcome>,
}

impl ShortestPaths {
    /// Collects the outcome of the last run from `source` out of the
    /// predecessor links left in `graph`.
    ///
    /// The source is recognized by its id. A reachable vertex may have a zero
    /// distance when zero-weight edges lead to it.
    pub fn from_graph(graph: &Graph, source: VertexId) -> Self {
        let paths = graph
            .vertices()
            .map(|vertex| (vertex.id(), trace_path(graph, vertex, source)))
            .collect();
        Self { source, paths }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, vertex: VertexId) -> Option<&PathOutcome> {
        self.paths.get(&vertex)
    }

    pub fn path_to(&self, vertex: VertexId) -> Option<&[VertexId]> {
        self.get(vertex)?.path()
    }

    pub fn cost_to(&self, vertex: VertexId) -> Option<Weight> {
        self.get(vertex)?.cost()
    }

    pub fn outcomes(&self) -> &BTreeMap<VertexId, PathOutcome> {
        &self.paths
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &PathOutcome)> + '_ {
        self.paths.iter().map(|(id, outcome)| (*id, outcome))
    }
}

fn trace_path(graph: &Graph, vertex: &Vertex, source: VertexId) -> PathOutcome {
    if vertex.id() == source {
        return PathOutcome::reachable(vec![source], 0.0);
    }
    if vertex.predecessor().is_none() {
        return PathOutcome::Unreachable;
    }
    let mut path: Vec<_> = iter::successors(Some(vertex.id()), |id| {
        graph.vertex(*id).and_then(Vertex::predecessor)
    })
    .take(graph.size())
    .collect();
    path.reverse();
    PathOutcome::reachable(path, vertex.distance())
}

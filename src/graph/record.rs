use crate::common::{VertexId, Weight};
use crate::graph::Edge;

/// One line of a graph file: a start vertex and its outgoing edges.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    start: VertexId,
    edges: Vec<Edge>,
}

impl EdgeRecord {
    pub fn new(start: VertexId) -> Self {
        Self {
            start,
            edges: Vec::new(),
        }
    }

    pub fn with_edges<I>(start: VertexId, edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, Weight)>,
    {
        let edges = edges
            .into_iter()
            .map(|(dst, weight)| Edge::new(dst, weight))
            .collect();
        Self { start, edges }
    }

    pub fn add_edge(mut self, dst: VertexId, weight: Weight) -> Self {
        self.push_edge(dst, weight);
        self
    }

    pub fn push_edge(&mut self, dst: VertexId, weight: Weight) -> &mut Self {
        self.edges.push(Edge::new(dst, weight));
        self
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn into_parts(self) -> (VertexId, Vec<Edge>) {
        (self.start, self.edges)
    }
}

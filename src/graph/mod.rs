use std::collections::BTreeMap;
use std::fmt;

use log::{debug, warn};

use crate::common::{VertexId, Weight, INFINITE_DISTANCE};

mod record;

pub use record::EdgeRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub dst: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(dst: VertexId, weight: Weight) -> Self {
        Self { dst, weight }
    }
}

/// A vertex with its outgoing edges and the state left behind by the last
/// shortest-path run.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    edges: Vec<Edge>,
    pub(crate) distance: Weight,
    pub(crate) visited: bool,
    pub(crate) predecessor: Option<VertexId>,
}

impl Vertex {
    fn new(id: VertexId, edges: Vec<Edge>) -> Self {
        Self {
            id,
            edges,
            distance: INFINITE_DISTANCE,
            visited: false,
            predecessor: None,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    pub fn distance(&self) -> Weight {
        self.distance
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    pub(crate) fn reset(&mut self) {
        self.distance = INFINITE_DISTANCE;
        self.visited = false;
        self.predecessor = None;
    }
}

/// A directed, weighted graph stored as adjacency lists keyed by vertex id.
///
/// Only ids that start at least one record become vertices. An id that only
/// ever appears as an edge destination is not a vertex of the graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: BTreeMap<VertexId, Vertex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut graph = Self::new();
        graph.create_graph(records);
        graph
    }

    /// Replaces the whole graph with the given records.
    ///
    /// A start id repeated across records keeps only its last record.
    pub fn create_graph<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        self.make_empty();
        for record in records {
            let (start, edges) = record.into_parts();
            if self
                .vertices
                .insert(start, Vertex::new(start, edges))
                .is_some()
            {
                warn!("vertex {start} is defined more than once, keeping the last definition");
            }
        }
        debug!(
            "created graph with {} vertices and {} edges",
            self.size(),
            self.num_edges()
        );
    }

    pub fn make_empty(&mut self) {
        self.vertices.clear();
    }

    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn num_edges(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(&id)
    }

    /// Vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    pub(crate) fn vertices_mut(&mut self) -> impl Iterator<Item = &mut Vertex> + '_ {
        self.vertices.values_mut()
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    pub fn has_negative_weights(&self) -> bool {
        self.vertices()
            .flat_map(Vertex::edges)
            .any(|edge| edge.weight < 0.0)
    }

    pub fn adjacency_query(&self, start: VertexId, end: VertexId) -> bool {
        self.distance_between(start, end).is_some()
    }

    /// Weight of the first `start -> end` edge, or `None` if the two are not
    /// connected or either one is not a vertex.
    pub fn distance_between(&self, start: VertexId, end: VertexId) -> Option<Weight> {
        if !self.contains_vertex(end) {
            return None;
        }
        self.vertex(start)?
            .edges()
            .iter()
            .find(|edge| edge.dst == end)
            .map(|edge| edge.weight)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Graph is empty, nothing to print.");
        }
        for vertex in self.vertices() {
            write!(f, "{}:", vertex.id())?;
            for edge in vertex.edges() {
                write!(f, " {}", edge.dst)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{build_parallel_edge_graph, build_scenario_graph};

    #[test]
    fn test_build_graph() {
        let graph = build_scenario_graph();
        assert_eq!(graph.size(), 3);
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.vertex_ids().collect::<Vec<_>>(), vec![1, 2, 3]);
        let v1 = graph.vertex(1).unwrap();
        assert_eq!(v1.edges(), &[Edge::new(2, 2.0), Edge::new(3, 5.0)]);
        assert!(graph.vertex(3).unwrap().edges().is_empty());
    }

    #[test]
    fn test_adjacency_query() {
        let graph = build_scenario_graph();
        assert!(graph.adjacency_query(1, 2));
        assert!(graph.adjacency_query(1, 3));
        assert!(graph.adjacency_query(2, 3));
        assert!(!graph.adjacency_query(2, 1));
        assert!(!graph.adjacency_query(3, 3));
        assert!(!graph.adjacency_query(1, 4));
        assert!(!graph.adjacency_query(4, 1));
    }

    #[test]
    fn test_destination_only_vertex() {
        let graph = Graph::from_records([EdgeRecord::new(1).add_edge(4, 1.5)]);
        assert_eq!(graph.size(), 1);
        assert!(!graph.contains_vertex(4));
        assert!(!graph.adjacency_query(1, 4));
        assert_eq!(graph.distance_between(1, 4), None);
    }

    #[test]
    fn test_distance_between() {
        let graph = build_scenario_graph();
        assert_eq!(graph.distance_between(1, 2), Some(2.0));
        assert_eq!(graph.distance_between(1, 3), Some(5.0));
        assert_eq!(graph.distance_between(3, 1), None);
        assert_eq!(graph.distance_between(9, 1), None);
    }

    #[test]
    fn test_zero_and_negative_weights_are_connected() {
        let graph = Graph::from_records([
            EdgeRecord::new(1).add_edge(2, 0.0).add_edge(3, -1.5),
            EdgeRecord::new(2),
            EdgeRecord::new(3),
        ]);
        assert_eq!(graph.distance_between(1, 2), Some(0.0));
        assert_eq!(graph.distance_between(1, 3), Some(-1.5));
        assert!(graph.adjacency_query(1, 2));
        assert!(graph.has_negative_weights());
    }

    #[test]
    fn test_parallel_edges_first_wins() {
        let graph = build_parallel_edge_graph();
        assert_eq!(graph.vertex(1).unwrap().out_degree(), 3);
        assert_eq!(graph.distance_between(1, 2), Some(7.0));
    }

    #[test]
    fn test_rebuild_discards_previous_graph() {
        let mut graph = build_scenario_graph();
        graph.dijkstra_shortest_path(1).unwrap();
        graph.create_graph([EdgeRecord::new(10).add_edge(11, 1.0), EdgeRecord::new(11)]);
        assert_eq!(graph.size(), 2);
        assert!(!graph.contains_vertex(1));
        assert!(!graph.adjacency_query(1, 2));
        for vertex in graph.vertices() {
            assert_eq!(vertex.distance(), INFINITE_DISTANCE);
            assert!(!vertex.is_visited());
            assert_eq!(vertex.predecessor(), None);
        }
    }

    #[test]
    fn test_repeated_start_keeps_last_record() {
        let graph = Graph::from_records([
            EdgeRecord::new(1).add_edge(2, 1.0),
            EdgeRecord::new(2),
            EdgeRecord::new(1).add_edge(2, 4.0),
        ]);
        assert_eq!(graph.size(), 2);
        assert_eq!(graph.distance_between(1, 2), Some(4.0));
    }

    #[test]
    fn test_display() {
        let graph = build_scenario_graph();
        assert_eq!(graph.to_string(), "1: 2 3\n2: 3\n3:\n");
        assert_eq!(
            Graph::new().to_string(),
            "Graph is empty, nothing to print.\n"
        );
    }
}

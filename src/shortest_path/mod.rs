//! Single-source shortest paths with Dijkstra's algorithm.
//!
//! The frontier is a [`BinaryHeap`] of distance snapshots. A vertex whose
//! distance improves is queued again rather than updated in place, so the
//! heap can hold several entries for one vertex; every entry popped for an
//! already visited vertex is dropped.

use log::{debug, trace, warn};

use crate::common::{VertexId, Weight};
use crate::error::{ShortPathError, ShortPathResult};
use crate::graph::{Graph, Vertex};
use crate::heap::{BinaryHeap, HeapEntry};

mod path;

pub use path::{PathOutcome, ShortestPaths};

impl Graph {
    /// Runs Dijkstra's algorithm from `source` and reconstructs the shortest
    /// path to every vertex.
    ///
    /// Edge weights are expected to be non-negative. This is not checked, and
    /// negative weights give results that are not minimal.
    pub fn dijkstra_shortest_path(&mut self, source: VertexId) -> ShortPathResult<ShortestPaths> {
        self.run_dijkstra(source)?;
        Ok(ShortestPaths::from_graph(self, source))
    }

    /// Runs Dijkstra's algorithm from `source`, leaving the distance, visited
    /// flag and predecessor of every vertex set for this run.
    pub fn run_dijkstra(&mut self, source: VertexId) -> ShortPathResult<()> {
        if !self.contains_vertex(source) {
            return Err(ShortPathError::VertexNotFound(source));
        }
        if self.has_negative_weights() {
            warn!("graph has negative edge weights, shortest paths may be wrong");
        }
        self.vertices_mut().for_each(Vertex::reset);
        let mut heap = BinaryHeap::with_capacity(self.size());
        if let Some(vertex) = self.vertex_mut(source) {
            vertex.distance = 0.0;
            heap.insert(HeapEntry::new(source, 0.0));
        }

        let mut num_stale = 0;
        while let Some(HeapEntry { vertex: current, .. }) = heap.delete_min() {
            let Some(vertex) = self.vertex_mut(current) else {
                continue;
            };
            if vertex.visited {
                num_stale += 1;
                continue;
            }
            vertex.visited = true;
            for (neighbor, candidate) in self.relaxation_candidates(current) {
                let Some(neighbor_vertex) = self.vertex_mut(neighbor) else {
                    continue;
                };
                if candidate < neighbor_vertex.distance {
                    neighbor_vertex.distance = candidate;
                    neighbor_vertex.predecessor = Some(current);
                    heap.insert(HeapEntry::new(neighbor, candidate));
                }
            }
        }
        debug!("dijkstra from {source} finished, skipped {num_stale} stale heap entries");
        Ok(())
    }

    /// Distances through `current` to each of its unvisited neighbors, in
    /// edge order.
    fn relaxation_candidates(&self, current: VertexId) -> Vec<(VertexId, Weight)> {
        let Some(vertex) = self.vertex(current) else {
            return Vec::new();
        };
        vertex
            .edges()
            .iter()
            .filter_map(|edge| {
                let Some(neighbor) = self.vertex(edge.dst) else {
                    trace!("skip edge {current} -> {}: not a vertex", edge.dst);
                    return None;
                };
                (!neighbor.is_visited()).then(|| (edge.dst, vertex.distance() + edge.weight))
            })
            .collect()
    }
}

use std::path::PathBuf;

use crate::graph::{EdgeRecord, Graph};

pub fn resource_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join(name)
}

/// 1 -> 2 (2.0), 1 -> 3 (5.0), 2 -> 3 (1.0)
pub fn build_scenario_graph() -> Graph {
    Graph::from_records([
        EdgeRecord::new(1).add_edge(2, 2.0).add_edge(3, 5.0),
        EdgeRecord::new(2).add_edge(3, 1.0),
        EdgeRecord::new(3),
    ])
}

/// Three parallel 1 -> 2 edges weighing 7.0, 1.0 and 3.0, in that order.
pub fn build_parallel_edge_graph() -> Graph {
    Graph::from_records([
        EdgeRecord::with_edges(1, [(2, 7.0), (2, 1.0), (2, 3.0)]),
        EdgeRecord::new(2),
    ])
}

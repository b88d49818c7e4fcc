pub type VertexId = i64;
pub type Weight = f32;

/// Distance of a vertex that no run has reached.
pub const INFINITE_DISTANCE: Weight = Weight::INFINITY;

pub mod common;
mod error;
pub mod graph;
pub mod heap;
pub mod ingest;
pub mod report;
pub mod shortest_path;
#[cfg(test)]
mod test_utils;

pub use error::{ShortPathError, ShortPathResult};

use std::path::PathBuf;

use thiserror::Error;

use crate::common::VertexId;

pub type ShortPathResult<T> = Result<T, ShortPathError>;

#[derive(Debug, Error)]
pub enum ShortPathError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("ParseError: {0}")]
    Parse(String),
    #[error("starting vertex {0} does not exist")]
    VertexNotFound(VertexId),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use std::io::{self, ErrorKind};

    use super::*;

    #[test]
    fn test_io_error_is_transparent() {
        let err: ShortPathError = io::Error::new(ErrorKind::BrokenPipe, "stdout closed").into();
        assert!(matches!(err, ShortPathError::Io(_)));
        assert_eq!(err.to_string(), "stdout closed");
    }
}

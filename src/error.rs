use crate::grid::Position;
use thiserror::Error;

/// Errors returned by maze generation and solving.
///
/// A search that cannot reach the end cell is not an error: it comes back as a
/// `Solution` with an empty path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze dimensions: {rows}x{cols} (both must be at least 1)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Invalid endpoint {position}: {reason}")]
    InvalidEndpoint {
        position: Position,
        reason: &'static str,
    },

    #[error("Solve interrupted by shutdown signal")]
    Interrupted,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MazeError>;

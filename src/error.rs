use thiserror::Error;

/// Errors raised while building or carving a maze.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A rectangle whose end does not lie strictly after its start.
    #[error("invalid range: ({x0}, {y0})..({x1}, {y1})")]
    InvalidRange { x0: u16, y0: u16, x1: u16, y1: u16 },

    /// Two cells that are not exactly two steps apart along one axis.
    #[error("invalid path from {from:?} to {to:?}")]
    InvalidPath { from: (u16, u16), to: (u16, u16) },

    /// Carving was started without any frontier cell.
    #[error("no frontiers to explore, set a start cell to dig the maze")]
    EmptyFrontier,

    /// A maze with zero width or height.
    #[error("maze dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: u16, height: u16 },
}

impl From<MazeError> for std::io::Error {
    fn from(err: MazeError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {rows}x{cols}, both must be at least 1 and the cell count must fit in usize")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;

use thiserror::Error;

/// Errors surfaced by grid construction, cell access and pattern placement.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum AutomatonError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: usize, height: usize },
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("not enough space to place {pattern} at ({x}, {y})")]
    InsufficientSpace {
        x: usize,
        y: usize,
        pattern: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, AutomatonError>;

//! Errors raised by terrain grid construction and access.

use thiserror::Error;

use crate::geom::{Point, Range};

/// Errors produced by [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate outside the grid bounds was accessed.
    #[error("cell {pos} is outside grid bounds {bounds}")]
    OutOfBounds { pos: Point, bounds: Range },
    /// A terrain layer does not have `rows * cols` samples.
    #[error("terrain layer has {found} samples, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },
}

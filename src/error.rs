use thiserror::Error;

use crate::grid::AxisTag;

/// Refusal categories shared by every diagnostic operation.
///
/// Missing numeric samples (NaN) are data, not errors; they propagate
/// through the arithmetic instead of surfacing here.
#[derive(Error, Debug)]
pub enum MetError {
    #[error("Unsupported array rank {rank}: expected {expected}")]
    UnsupportedRank { rank: usize, expected: &'static str },

    #[error("Axis {axis} is not defined for rank-{rank} arrays")]
    InvalidAxis { axis: AxisTag, rank: usize },

    #[error("Shape mismatch: {context}")]
    ShapeMismatch { context: String },

    #[error("Missing coordinate: {name}")]
    MissingCoordinate { name: String },

    #[error("Unrecognized horizontal axes: trailing dimensions ({y_name}, {x_name}) are not a latitude/longitude pair")]
    UnrecognizedAxis { y_name: String, x_name: String },
}

//! Error types for transform application.

use shape_types::MeshError;
use thiserror::Error;

/// Result type for transform operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors that can occur while applying a transform.
///
/// `InvalidGridSize` and `MalformedMesh` are configuration errors;
/// `UnknownMode` is the distinct invalid-mode class. None of them are ever
/// swallowed into a degenerate default - a zero grid size would turn every
/// normalized coordinate into NaN.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The grid extent is zero, negative, or non-finite.
    #[error("grid size must be positive and finite, got {grid_size}")]
    InvalidGridSize {
        /// The rejected extent.
        grid_size: f32,
    },

    /// A mode ordinal outside the closed palette.
    #[error("unknown transform mode ordinal {0}")]
    UnknownMode(u8),

    /// The source mesh failed structural validation.
    #[error("source mesh is malformed: {0}")]
    MalformedMesh(#[from] MeshError),
}

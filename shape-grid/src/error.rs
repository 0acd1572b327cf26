//! Error types for mesh generation.

use thiserror::Error;

/// Result type for generator operations.
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur while generating a base mesh.
///
/// These are configuration errors: they surface at setup and are never
/// defaulted away, because a zero extent poisons every downstream
/// transform normalization with NaN.
#[derive(Debug, Error)]
pub enum GridError {
    /// The per-square size is zero, negative, or non-finite.
    #[error("square size must be positive and finite, got {square_size}")]
    NonPositiveSquareSize {
        /// The rejected value.
        square_size: f32,
    },

    /// The overall solid size is zero, negative, or non-finite.
    #[error("size must be positive and finite, got {size}")]
    NonPositiveSize {
        /// The rejected value.
        size: f32,
    },
}

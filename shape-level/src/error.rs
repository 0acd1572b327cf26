//! Level decoding errors.

use thiserror::Error;

/// Errors raised while encoding or decoding level data.
#[derive(Debug, Error)]
pub enum LevelError {
    /// Malformed JSON, or a field of the wrong shape.
    #[error("level JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A mode field held an ordinal outside the transform palette.
    #[error("unknown transform mode ordinal {0}")]
    UnknownModeOrdinal(u8),

    /// A mode field held a name no transform mode answers to.
    #[error("unknown transform mode name {0:?}")]
    UnknownModeName(String),

    /// A flat triangle index list whose length is not a multiple of three.
    #[error("triangle index count {count} is not a multiple of 3")]
    MalformedTriangles {
        /// Number of indices found.
        count: usize,
    },
}

/// Result alias for level operations.
pub type LevelResult<T> = Result<T, LevelError>;

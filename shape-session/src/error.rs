//! Session error types.

use shape_transform::TransformError;
use shape_types::MeshError;
use thiserror::Error;

/// Errors a session can surface to its caller.
///
/// History no-ops are deliberately not here; an undo with nothing to
/// undo is an advisory the session logs and swallows.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The transform engine rejected its inputs.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// An injected mesh failed validation.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Result alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

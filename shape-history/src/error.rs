//! History error types.

use thiserror::Error;

/// Advisory errors for history operations on empty stacks.
///
/// None of these indicate corruption; the history is left untouched and
/// the caller simply has nothing to apply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Undo requested with an empty undo stack.
    #[error("nothing to undo")]
    NothingToUndo,

    /// Redo requested with an empty redo stack.
    #[error("nothing to redo")]
    NothingToRedo,

    /// Reset requested before any snapshot was pushed.
    #[error("nothing to reset to")]
    NothingToReset,
}

/// Result alias for history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;

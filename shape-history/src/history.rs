//! The bounded undo/redo stack.

use crate::{HistoryError, HistoryResult, ObjectState, Snapshot};
use shape_types::TriMesh;
use std::collections::VecDeque;
use tracing::debug;

/// Default maximum number of undo steps kept in memory.
pub const DEFAULT_DEPTH: usize = 64;

/// Bounded undo/redo history.
///
/// Three storage areas: the undo stack (oldest at the front), the redo
/// stack, and a current slot. The current slot holds the snapshot the
/// live object was last restored to; before the first undo it is empty
/// and the caller supplies a snapshot of the live object instead.
///
/// Pushing a new snapshot discards any redo branch. Pushing past
/// capacity drops the oldest undo entry.
#[derive(Debug)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    current: Option<Snapshot>,
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// History with the default depth of [`DEFAULT_DEPTH`] steps.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_DEPTH)
    }

    /// History keeping at most `max_depth` undo steps (clamped to at
    /// least one).
    #[must_use]
    pub fn with_capacity(max_depth: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            current: None,
            max_depth: max_depth.max(1),
        }
    }

    /// Record the pre-edit state of the object.
    ///
    /// Called immediately before a commit mutates the object. Deep-clones
    /// the mesh. Clears the redo stack and the current slot; the live
    /// object is about to diverge from both.
    pub fn push(&mut self, mesh: &TriMesh, state: ObjectState) {
        if !self.redo.is_empty() {
            debug!(discarded = self.redo.len(), "discarding redo branch");
        }
        self.redo.clear();
        self.current = None;
        self.undo.push_back(Snapshot::new(mesh, state));
        if self.undo.len() > self.max_depth {
            self.undo.pop_front();
            debug!(max_depth = self.max_depth, "dropped oldest undo entry");
        }
    }

    /// Step back one snapshot.
    ///
    /// `live` is a snapshot of the object as it stands right now; it is
    /// what redo must later restore when this is the first undo since the
    /// last push. Returns a clone of the snapshot to apply.
    pub fn undo(&mut self, live: Snapshot) -> HistoryResult<Snapshot> {
        let restored = self.undo.pop_back().ok_or(HistoryError::NothingToUndo)?;
        let displaced = self.current.take().unwrap_or(live);
        self.redo.push(displaced);
        self.current = Some(restored.clone());
        Ok(restored)
    }

    /// Step forward one snapshot. Mirror of [`History::undo`].
    pub fn redo(&mut self, live: Snapshot) -> HistoryResult<Snapshot> {
        let restored = self.redo.pop().ok_or(HistoryError::NothingToRedo)?;
        let displaced = self.current.take().unwrap_or(live);
        self.undo.push_back(displaced);
        if self.undo.len() > self.max_depth {
            self.undo.pop_front();
        }
        self.current = Some(restored.clone());
        Ok(restored)
    }

    /// Jump back to the oldest remembered snapshot and forget everything
    /// else.
    ///
    /// After a full chain of undos the oldest snapshot lives in the
    /// current slot rather than the undo stack; reset restores it from
    /// either place.
    pub fn reset(&mut self) -> HistoryResult<Snapshot> {
        let oldest = self
            .undo
            .front()
            .cloned()
            .or_else(|| self.current.clone())
            .ok_or(HistoryError::NothingToReset)?;
        self.undo.clear();
        self.redo.clear();
        self.current = None;
        Ok(oldest)
    }

    /// Number of snapshots available to undo.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of snapshots available to redo.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Whether an undo would succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether a redo would succeed.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

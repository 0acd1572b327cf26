//! Stepping through a level's authored solution hints.

use crate::{LevelManifest, SnapshotRecord};

/// Cursor over the non-goal snapshots of a level, in file order.
///
/// The goal record never appears as a hint. Navigation clamps at both
/// ends instead of wrapping, so repeated presses past the last hint stay
/// on the last hint.
#[derive(Debug)]
pub struct HintCursor<'a> {
    steps: Vec<&'a SnapshotRecord>,
    index: usize,
}

impl<'a> HintCursor<'a> {
    /// Cursor positioned on the first hint of `manifest`.
    #[must_use]
    pub fn new(manifest: &'a LevelManifest) -> Self {
        Self {
            steps: manifest
                .snapshots
                .iter()
                .filter(|record| !record.is_goal)
                .collect(),
            index: 0,
        }
    }

    /// The hint the cursor is on, or `None` for a level with no hints.
    #[must_use]
    pub fn current(&self) -> Option<&'a SnapshotRecord> {
        self.steps.get(self.index).copied()
    }

    /// Advance to the next hint, clamping at the last one.
    pub fn next(&mut self) -> Option<&'a SnapshotRecord> {
        if self.index + 1 < self.steps.len() {
            self.index += 1;
        }
        self.current()
    }

    /// Step back to the previous hint, clamping at the first one.
    pub fn previous(&mut self) -> Option<&'a SnapshotRecord> {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    /// Number of hints available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the level has no hints at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

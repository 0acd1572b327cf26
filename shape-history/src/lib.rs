//! Bounded undo/redo history of shape snapshots.
//!
//! Every committed edit pushes a [`Snapshot`] (deep mesh copy plus the
//! object's [`ObjectState`]) onto the undo stack. Undo and redo move
//! snapshots between the two stacks through a current slot, so walking
//! back k steps after n commits lands exactly on the state after commit
//! n - k. The history is bounded; the oldest snapshot is dropped once
//! the undo stack reaches capacity.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod history;
mod state;

pub use error::{HistoryError, HistoryResult};
pub use history::{History, DEFAULT_DEPTH};
pub use state::{ObjectState, Snapshot};

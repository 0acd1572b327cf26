//! JSON encoding of levels and mesh snapshots.
//!
//! A level is a [`LevelManifest`]: a name plus an ordered list of
//! [`SnapshotRecord`]s, each referencing a separately stored
//! [`MeshRecord`] by key. Exactly one record per level is the goal shape;
//! the rest are the authored solution steps that hint navigation walks
//! through.
//!
//! Only the encoding lives here. Where the bytes come from or go to is
//! the caller's concern.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod hint;
mod record;

pub use error::{LevelError, LevelResult};
pub use hint::HintCursor;
pub use record::{LevelManifest, MeshRecord, SnapshotRecord};

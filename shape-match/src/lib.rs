//! Approximate mesh matching for the shape puzzle.
//!
//! [`meshes_equal`] decides whether the player's current vertex buffer
//! matches the hidden goal buffer: tolerant of per-vertex floating-point
//! jitter, independent of vertex order, and staged so that grossly wrong
//! meshes are rejected after sampling only a handful of vertices.
//!
//! [`GoalComparator`] runs the full comparison on a worker thread so the
//! per-tick step never blocks on a sort of several thousand vertices; it
//! guarantees at most one comparison in flight and that the latest
//! requested input is eventually compared.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod comparator;
mod matcher;

pub use comparator::GoalComparator;
pub use matcher::meshes_equal;

//! Procedural mesh transformations for the shape puzzle.
//!
//! The player reshapes the base solid by applying one of a fixed palette of
//! vertex-buffer transforms. Each transform is a pure function from an
//! input vertex buffer to an output vertex buffer; topology never changes,
//! only positions move (and, for the circular modes, per-triangle winding).
//!
//! The entry point is [`apply_transform`]. [`TransformMode`] is the closed
//! palette enum, carrying the catalog metadata shown in the UI.
//!
//! # Coordinate Convention
//!
//! Every mode first maps source-local vertices to world space through the
//! source's [`Pose`], then subtracts `(grid.x, source.y, grid.z)` - the
//! result is re-centered horizontally on the grid while keeping the
//! source's own height. All normalization is against the grid extent
//! supplied by the caller. Getting this step wrong silently misaligns the
//! preview and the committed shape, which is why it lives in exactly one
//! place.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod engine;
mod error;
mod mode;
mod pose;

pub use engine::{
    apply_transform, CIRCULAR_DEGENERATE_FRACTION, EXPAND_FACTOR, SHEAR_FACTOR, SHRINK_FACTOR,
    STRETCH_FACTOR, WAVE_COUNT,
};
pub use error::{TransformError, TransformResult};
pub use mode::TransformMode;
pub use pose::Pose;

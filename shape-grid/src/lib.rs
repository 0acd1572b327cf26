//! Procedural base meshes for the shape puzzle.
//!
//! Three generators, all pure functions returning a fresh [`TriMesh`](shape_types::TriMesh):
//!
//! - [`generate_grid`] - the checkerboard-triangulated ground grid
//! - [`generate_cube`] - a subdivided solid cube, the usual puzzle base solid
//! - [`generate_plane`] - a thin double-sided plane for flat goal shapes
//!
//! Every generator centers its mesh on the origin; the transform engine
//! depends on that centering convention, so it is part of the contract, not
//! a cosmetic choice.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
// Vertex counts stay far below u32::MAX for any playable grid.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

mod cube;
mod error;
mod grid;
mod plane;

pub use cube::generate_cube;
pub use error::{GridError, GridResult};
pub use grid::{generate_grid, grid_extent, GridParams};
pub use plane::generate_plane;

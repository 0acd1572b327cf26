//! Core geometry types for the shape puzzle.
//!
//! This crate provides the types every other `shape-*` crate builds on:
//!
//! - [`TriMesh`] - an indexed triangle mesh with optional UVs and derived normals
//! - [`Aabb`] - axis-aligned bounding box
//!
//! # Coordinate System
//!
//! Right-handed, **Y up**. The reference grid lies in the XZ plane, centered
//! on its own origin. All coordinates are `f32`; a mesh snapshot compares
//! bit-identical after a deterministic recomputation.
//!
//! # Example
//!
//! ```
//! use shape_types::{TriMesh, Point3};
//!
//! let mut mesh = TriMesh::new();
//! mesh.positions.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.positions.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.positions.push(Point3::new(0.0, 0.0, 1.0));
//! mesh.triangles.push([0, 1, 2]);
//!
//! assert_eq!(mesh.vertex_count(), 3);
//! assert!(mesh.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bounds;
mod mesh;

pub use bounds::Aabb;
pub use mesh::{MeshError, TriMesh};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, UnitQuaternion, Vector3};

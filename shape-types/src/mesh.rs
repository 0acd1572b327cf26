//! Indexed triangle mesh.

use crate::Aabb;
use nalgebra::{Point2, Point3, Vector3};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised by mesh validation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A triangle references a vertex index past the end of the buffer.
    #[error("triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfBounds {
        /// Index of the offending triangle.
        triangle: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// The UV buffer is non-empty but does not match the vertex count.
    #[error("uv count {uv_count} does not match vertex count {vertex_count}")]
    UvCountMismatch {
        /// Number of UV coordinates present.
        uv_count: usize,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}

/// An indexed triangle mesh.
///
/// Vertex insertion order is the topological index the triangle buffer
/// refers to. Order matters for rendering hand-off; the approximate
/// matcher deliberately ignores it.
///
/// The `uvs` and `normals` buffers are either empty or exactly
/// `positions.len()` long. Normals are derived data - they are recomputed
/// with [`TriMesh::recalculate_normals`] after every transform application
/// and never compared.
///
/// # Example
///
/// ```
/// use shape_types::{TriMesh, Point3};
///
/// let mesh = TriMesh::from_parts(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 0.0, 1.0),
///     ],
///     vec![[0, 1, 2]],
/// );
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriMesh {
    /// Vertex positions. Insertion order is semantically meaningful.
    pub positions: Vec<Point3<f32>>,

    /// Triangles as `[v0, v1, v2]` indices into `positions`. Winding order
    /// encodes the facet-forward normal.
    pub triangles: Vec<[u32; 3]>,

    /// Texture coordinates, empty or one per vertex.
    pub uvs: Vec<Point2<f32>>,

    /// Derived vertex normals, empty or one per vertex.
    pub normals: Vec<Vector3<f32>>,
}

impl TriMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            triangles: Vec::new(),
            uvs: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            uvs: Vec::with_capacity(vertex_count),
            normals: Vec::new(),
        }
    }

    /// Create a mesh from positions and triangles, with no UVs or normals.
    #[inline]
    #[must_use]
    pub const fn from_parts(positions: Vec<Point3<f32>>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            positions,
            triangles,
            uvs: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the mesh has no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Check structural invariants: every triangle index is in range and
    /// the UV buffer, when present, matches the vertex count.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError`] describing the first violation found.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.positions.len();
        for (triangle, indices) in self.triangles.iter().enumerate() {
            for &index in indices {
                if index as usize >= vertex_count {
                    return Err(MeshError::IndexOutOfBounds {
                        triangle,
                        index,
                        vertex_count,
                    });
                }
            }
        }
        if !self.uvs.is_empty() && self.uvs.len() != vertex_count {
            return Err(MeshError::UvCountMismatch {
                uv_count: self.uvs.len(),
                vertex_count,
            });
        }
        Ok(())
    }

    /// Axis-aligned bounds over all vertex positions.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.positions.iter())
    }

    /// Recompute vertex normals by area-weighted face-normal accumulation.
    ///
    /// The unnormalized cross product of each triangle's edges carries the
    /// facet area as its magnitude, so summing it per vertex weights large
    /// facets more. Vertices whose accumulated normal degenerates to zero
    /// (isolated vertices, zero-area fans) fall back to +Y.
    pub fn recalculate_normals(&mut self) {
        let mut accumulated = vec![Vector3::zeros(); self.positions.len()];

        for &[i0, i1, i2] in &self.triangles {
            let p0 = self.positions[i0 as usize];
            let p1 = self.positions[i1 as usize];
            let p2 = self.positions[i2 as usize];
            let face_normal = (p1 - p0).cross(&(p2 - p0));

            accumulated[i0 as usize] += face_normal;
            accumulated[i1 as usize] += face_normal;
            accumulated[i2 as usize] += face_normal;
        }

        self.normals = accumulated
            .into_iter()
            .map(|n| {
                let length = n.norm();
                if length > f32::EPSILON {
                    n / length
                } else {
                    Vector3::y()
                }
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quad() -> TriMesh {
        TriMesh::from_parts(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(1.0, 0.0, 1.0),
            ],
            vec![[0, 2, 1], [1, 2, 3]],
        )
    }

    #[test]
    fn validate_accepts_well_formed_mesh() {
        assert!(quad().validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_index() {
        let mut mesh = quad();
        mesh.triangles.push([0, 1, 9]);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::IndexOutOfBounds {
                triangle: 2,
                index: 9,
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_short_uv_buffer() {
        let mut mesh = quad();
        mesh.uvs.push(Point2::new(0.0, 0.0));
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::UvCountMismatch {
                uv_count: 1,
                vertex_count: 4,
            })
        ));
    }

    #[test]
    fn flat_quad_normals_point_up() {
        let mut mesh = quad();
        mesh.recalculate_normals();
        assert_eq!(mesh.normals.len(), 4);
        for normal in &mesh.normals {
            assert_relative_eq!(normal.y, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn isolated_vertex_normal_falls_back_to_up() {
        let mut mesh = quad();
        mesh.positions.push(Point3::new(5.0, 5.0, 5.0));
        mesh.recalculate_normals();
        assert_eq!(mesh.normals[4], Vector3::y());
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let bounds = quad().bounds();
        assert_relative_eq!(bounds.min.x, 0.0);
        assert_relative_eq!(bounds.max.x, 1.0);
        assert_relative_eq!(bounds.size().y, 0.0);
        assert_relative_eq!(bounds.size().z, 1.0);
    }

    #[test]
    fn clone_is_deep() {
        let mut original = quad();
        let snapshot = original.clone();
        original.positions[0].x = 100.0;
        assert_relative_eq!(snapshot.positions[0].x, 0.0);
    }
}

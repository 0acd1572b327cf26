//! Checkerboard ground grid.

use crate::{GridError, GridResult};
use shape_types::{Point2, Point3, TriMesh};
use tracing::debug;

/// Parameters for the ground grid.
///
/// # Example
///
/// ```
/// use shape_grid::{generate_grid, grid_extent, GridParams};
///
/// let params = GridParams::new().with_divisions(4).with_subdivisions(2);
/// let mesh = generate_grid(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 9 * 9);
/// assert_eq!(grid_extent(&params), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct GridParams {
    /// Number of squares along one side (clamped to at least 1).
    pub divisions: u32,
    /// World-space size of each square.
    pub square_size: f32,
    /// Subdivisions per square (clamped to at least 1).
    pub subdivisions: u32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            divisions: 8,
            square_size: 1.0,
            subdivisions: 16,
        }
    }
}

impl GridParams {
    /// Creates parameters with defaults (8 squares of size 1, 16 subdivisions).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of squares along one side.
    #[must_use]
    pub const fn with_divisions(mut self, divisions: u32) -> Self {
        self.divisions = divisions;
        self
    }

    /// Sets the world-space size of each square.
    #[must_use]
    pub const fn with_square_size(mut self, square_size: f32) -> Self {
        self.square_size = square_size;
        self
    }

    /// Sets the subdivisions per square.
    #[must_use]
    pub const fn with_subdivisions(mut self, subdivisions: u32) -> Self {
        self.subdivisions = subdivisions;
        self
    }
}

/// World-space side length of the square domain the transforms normalize
/// against. Always `divisions * square_size` of the reference grid.
#[must_use]
pub fn grid_extent(params: &GridParams) -> f32 {
    params.divisions.max(1) as f32 * params.square_size
}

/// Generate the flat checkerboard grid in the XZ plane, centered on the
/// origin.
///
/// Produces `(divisions * subdivisions + 1)^2` vertices with UVs linear in
/// `[0,1]^2`. Cells are kept in a checkerboard parity pattern - a cell at
/// square coordinates `(sx, sz)` is triangulated only when `sx % 2 == sz % 2` -
/// which renders as the alternating ground pattern.
///
/// # Errors
///
/// Returns [`GridError::NonPositiveSquareSize`] for a non-positive or
/// non-finite square size.
pub fn generate_grid(params: &GridParams) -> GridResult<TriMesh> {
    if !(params.square_size > 0.0 && params.square_size.is_finite()) {
        return Err(GridError::NonPositiveSquareSize {
            square_size: params.square_size,
        });
    }

    let divisions = params.divisions.max(1);
    let subdivisions = params.subdivisions.max(1);
    let side = divisions * subdivisions;
    let vertices_per_row = side + 1;

    let mut mesh = TriMesh::with_capacity(
        (vertices_per_row * vertices_per_row) as usize,
        (side * side) as usize,
    );

    // Centering convention: axis positions run from -divisions/2 squares to
    // +divisions/2 squares. The transform engine assumes exactly this.
    let offset = divisions as f32 / 2.0;

    for z in 0..=side {
        for x in 0..=side {
            mesh.positions.push(Point3::new(
                (x as f32 - offset * subdivisions as f32) * params.square_size
                    / subdivisions as f32,
                0.0,
                (z as f32 - offset * subdivisions as f32) * params.square_size
                    / subdivisions as f32,
            ));
            mesh.uvs
                .push(Point2::new(x as f32 / side as f32, z as f32 / side as f32));
        }
    }

    for z in 0..side {
        for x in 0..side {
            if (x / subdivisions) % 2 != (z / subdivisions) % 2 {
                continue;
            }

            let vertex = z * vertices_per_row + x;
            mesh.triangles
                .push([vertex, vertex + vertices_per_row, vertex + 1]);
            mesh.triangles.push([
                vertex + 1,
                vertex + vertices_per_row,
                vertex + vertices_per_row + 1,
            ]);
        }
    }

    mesh.recalculate_normals();

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated ground grid"
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vertex_count_matches_formula() {
        let params = GridParams::new().with_divisions(8).with_subdivisions(16);
        let mesh = generate_grid(&params).unwrap();
        assert_eq!(mesh.vertex_count(), 129 * 129);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn checkerboard_keeps_half_the_cells() {
        // 2x2 squares, 1 subdivision: cells (0,0) and (1,1) survive parity.
        let params = GridParams::new().with_divisions(2).with_subdivisions(1);
        let mesh = generate_grid(&params).unwrap();
        assert_eq!(mesh.triangle_count(), 4);
    }

    #[test]
    fn grid_is_centered_on_origin() {
        let params = GridParams::new().with_divisions(8).with_subdivisions(2);
        let mesh = generate_grid(&params).unwrap();
        let bounds = mesh.bounds();
        assert_relative_eq!(bounds.min.x, -4.0, epsilon = 1e-6);
        assert_relative_eq!(bounds.max.x, 4.0, epsilon = 1e-6);
        assert_relative_eq!(bounds.min.z, -4.0, epsilon = 1e-6);
        assert_relative_eq!(bounds.max.z, 4.0, epsilon = 1e-6);
        assert_relative_eq!(bounds.size().y, 0.0);
    }

    #[test]
    fn uvs_span_unit_square() {
        let params = GridParams::new().with_divisions(2).with_subdivisions(2);
        let mesh = generate_grid(&params).unwrap();
        let first = mesh.uvs[0];
        let last = mesh.uvs[mesh.uvs.len() - 1];
        assert_relative_eq!(first.x, 0.0);
        assert_relative_eq!(first.y, 0.0);
        assert_relative_eq!(last.x, 1.0);
        assert_relative_eq!(last.y, 1.0);
    }

    #[test]
    fn zero_divisions_clamp_to_one() {
        let params = GridParams::new().with_divisions(0).with_subdivisions(1);
        let mesh = generate_grid(&params).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn non_positive_square_size_is_rejected() {
        let params = GridParams::new().with_square_size(0.0);
        assert!(matches!(
            generate_grid(&params),
            Err(GridError::NonPositiveSquareSize { .. })
        ));
        let params = GridParams::new().with_square_size(f32::NAN);
        assert!(generate_grid(&params).is_err());
    }

    #[test]
    fn extent_is_divisions_times_square_size() {
        let params = GridParams::new().with_divisions(8).with_square_size(0.5);
        assert_relative_eq!(grid_extent(&params), 4.0);
    }
}

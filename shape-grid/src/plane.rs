//! Double-sided vertical plane.

use crate::{GridError, GridResult};
use shape_types::{Point2, Point3, TriMesh};
use tracing::debug;

/// Separation between the front and back sheets.
const SHEET_GAP: f32 = 0.001;

/// Generate a thin double-sided square plane in the XY plane, centered on
/// the origin. Two parallel vertex sheets at z = +/-[`SHEET_GAP`] with
/// opposite winding keep the plane visible from both sides without relying
/// on two-sided materials.
///
/// # Errors
///
/// Returns [`GridError::NonPositiveSize`] for a non-positive or non-finite
/// size. `divisions` below 1 is clamped to 1.
pub fn generate_plane(divisions: u32, size: f32) -> GridResult<TriMesh> {
    if !(size > 0.0 && size.is_finite()) {
        return Err(GridError::NonPositiveSize { size });
    }

    let divisions = divisions.max(1);
    let vertices_per_side = divisions + 1;
    let sheet_vertices = vertices_per_side * vertices_per_side;
    let division_size = size / divisions as f32;

    let mut mesh = TriMesh::with_capacity(
        (sheet_vertices * 2) as usize,
        (divisions * divisions * 4) as usize,
    );

    // Front sheet first, back sheet appended after it.
    for &z in &[SHEET_GAP, -SHEET_GAP] {
        for y in 0..vertices_per_side {
            for x in 0..vertices_per_side {
                mesh.positions.push(Point3::new(
                    -size / 2.0 + x as f32 * division_size,
                    -size / 2.0 + y as f32 * division_size,
                    z,
                ));
                mesh.uvs.push(Point2::new(
                    x as f32 / divisions as f32,
                    y as f32 / divisions as f32,
                ));
            }
        }
    }

    for y in 0..divisions {
        for x in 0..divisions {
            let top_left = y * vertices_per_side + x;
            let bottom_left = (y + 1) * vertices_per_side + x;
            let top_right = top_left + 1;
            let bottom_right = bottom_left + 1;

            // front
            mesh.triangles.push([top_left, bottom_right, bottom_left]);
            mesh.triangles.push([top_left, top_right, bottom_right]);

            // back, winding reversed
            mesh.triangles.push([
                top_left + sheet_vertices,
                bottom_left + sheet_vertices,
                bottom_right + sheet_vertices,
            ]);
            mesh.triangles.push([
                top_left + sheet_vertices,
                bottom_right + sheet_vertices,
                top_right + sheet_vertices,
            ]);
        }
    }

    mesh.recalculate_normals();

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated plane"
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn counts_match_formula() {
        let plane = generate_plane(4, 8.0).unwrap();
        assert_eq!(plane.vertex_count(), 2 * 25);
        assert_eq!(plane.triangle_count(), 4 * 16);
        assert!(plane.validate().is_ok());
    }

    #[test]
    fn sheets_straddle_the_origin() {
        let plane = generate_plane(2, 4.0).unwrap();
        let bounds = plane.bounds();
        assert_relative_eq!(bounds.min.z, -SHEET_GAP);
        assert_relative_eq!(bounds.max.z, SHEET_GAP);
        assert_relative_eq!(bounds.min.x, -2.0);
        assert_relative_eq!(bounds.max.y, 2.0);
    }

    #[test]
    fn non_positive_size_is_rejected() {
        assert!(matches!(
            generate_plane(2, 0.0),
            Err(GridError::NonPositiveSize { .. })
        ));
    }
}

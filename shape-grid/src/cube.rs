//! Subdivided solid cube.

use crate::{GridError, GridResult};
use shape_types::{Point2, Point3, TriMesh, Vector3};
use tracing::debug;

/// Per-face frame: outward normal plus the two in-face axes.
const FACE_FRAMES: [(Vector3<f32>, Vector3<f32>, Vector3<f32>); 6] = [
    // front (+z)
    (
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    ),
    // back (-z)
    (
        Vector3::new(0.0, 0.0, -1.0),
        Vector3::new(-1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    ),
    // left (-x)
    (
        Vector3::new(-1.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(0.0, 1.0, 0.0),
    ),
    // right (+x)
    (
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, -1.0),
        Vector3::new(0.0, 1.0, 0.0),
    ),
    // top (+y)
    (
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, -1.0),
    ),
    // bottom (-y)
    (
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ),
];

/// Generate a solid cube of the given size centered on the origin, each of
/// its six faces fully tiled with `divisions x divisions` cells.
///
/// Faces are emitted as independent vertex sheets - `(divisions + 1)^2`
/// vertices and `2 * divisions^2` triangles per face - welded only by
/// coincidence of position along shared edges. UVs run linearly over each
/// face.
///
/// # Errors
///
/// Returns [`GridError::NonPositiveSize`] for a non-positive or non-finite
/// size. `divisions` below 1 is clamped to 1.
///
/// # Example
///
/// ```
/// use shape_grid::generate_cube;
///
/// let cube = generate_cube(4, 2.0).unwrap();
/// assert_eq!(cube.vertex_count(), 6 * 25);
/// assert_eq!(cube.triangle_count(), 6 * 32);
/// ```
pub fn generate_cube(divisions: u32, size: f32) -> GridResult<TriMesh> {
    if !(size > 0.0 && size.is_finite()) {
        return Err(GridError::NonPositiveSize { size });
    }

    let divisions = divisions.max(1);
    let vertices_per_face = (divisions + 1) * (divisions + 1);

    let mut mesh = TriMesh::with_capacity(
        (vertices_per_face * 6) as usize,
        (divisions * divisions * 2 * 6) as usize,
    );

    for (face, &(normal, right, up)) in FACE_FRAMES.iter().enumerate() {
        let vertex_offset = face as u32 * vertices_per_face;

        for v in 0..=divisions {
            for u in 0..=divisions {
                let fu = u as f32 / divisions as f32;
                let fv = v as f32 / divisions as f32;

                let position = normal * (size / 2.0)
                    + right * ((fu - 0.5) * size)
                    + up * ((fv - 0.5) * size);
                mesh.positions.push(Point3::from(position));
                mesh.uvs.push(Point2::new(fu, fv));

                if u < divisions && v < divisions {
                    let top_left = vertex_offset + v * (divisions + 1) + u;
                    let top_right = top_left + 1;
                    let bottom_left = top_left + divisions + 1;
                    let bottom_right = bottom_left + 1;

                    mesh.triangles.push([top_left, top_right, bottom_left]);
                    mesh.triangles.push([top_right, bottom_right, bottom_left]);
                }
            }
        }
    }

    mesh.recalculate_normals();

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "generated cube"
    );

    Ok(mesh)
}

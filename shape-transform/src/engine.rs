//! Transform application: shared re-centering, per-mode kernels, winding fix.

use crate::{Pose, TransformError, TransformMode, TransformResult};
use shape_types::{Point3, TriMesh, Vector3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// X multiplier of the Stretch mode.
pub const STRETCH_FACTOR: f32 = 2.0;

/// X multiplier of the Shrink mode.
pub const SHRINK_FACTOR: f32 = 0.5;

/// Ripple count of the wavy modes across the grid extent.
pub const WAVE_COUNT: f32 = 4.0;

/// Z-proportional X offset of the Shear mode.
pub const SHEAR_FACTOR: f32 = 0.5;

/// Uniform multiplier of the Expand mode.
pub const EXPAND_FACTOR: f32 = 2.0;

/// Normalized-Z radius below which the circular modes are known to produce
/// angle-unstable, possibly overlapping triangles. The behavior inside this
/// zone is preserved as-is for level compatibility; tests only assert
/// outside it.
pub const CIRCULAR_DEGENERATE_FRACTION: f32 = 0.05;

/// Grid coordinate frame every kernel normalizes against.
struct GridFrame {
    size: f32,
    min: f32,
}

impl GridFrame {
    fn new(size: f32) -> Self {
        Self {
            size,
            min: -size / 2.0,
        }
    }

    #[inline]
    fn normalize(&self, axis_value: f32) -> f32 {
        (axis_value - self.min) / self.size
    }
}

/// A pure per-vertex remapping over the offset-adjusted vertex.
type VertexKernel = fn(Point3<f32>, &GridFrame) -> Point3<f32>;

/// The single registration point mapping each mode to its kernel and
/// whether the post-pass winding fix applies.
fn dispatch(mode: TransformMode) -> (VertexKernel, bool) {
    match mode {
        TransformMode::None => (kernel_none, false),
        TransformMode::Circular => (kernel_circular, true),
        TransformMode::CircularSquared => (kernel_circular_squared, true),
        TransformMode::Stretch => (kernel_stretch, false),
        TransformMode::Shrink => (kernel_shrink, false),
        TransformMode::Wavy => (kernel_wavy, false),
        TransformMode::WavySharp => (kernel_wavy_sharp, false),
        TransformMode::Shear => (kernel_shear, false),
        TransformMode::Expand => (kernel_expand, false),
    }
}

/// Apply a transform mode to a source mesh.
///
/// Every source-local vertex is mapped to world space through
/// `source_pose`, re-centered by subtracting
/// `(grid.x, source.y, grid.z)`, and fed to the mode's kernel. The output
/// mesh keeps the source's triangle and UV buffers (the circular modes may
/// flip individual triangle windings) and carries freshly recomputed
/// normals. Vertex and triangle counts are invariant.
///
/// # Errors
///
/// - [`TransformError::InvalidGridSize`] if `grid_size` is not positive
///   and finite.
/// - [`TransformError::MalformedMesh`] if the source mesh fails
///   [`TriMesh::validate`].
pub fn apply_transform(
    mode: TransformMode,
    source: &TriMesh,
    source_pose: &Pose,
    grid_pose: &Pose,
    grid_size: f32,
) -> TransformResult<TriMesh> {
    if !(grid_size > 0.0 && grid_size.is_finite()) {
        return Err(TransformError::InvalidGridSize { grid_size });
    }
    source.validate()?;

    let frame = GridFrame::new(grid_size);
    let offset = Vector3::new(
        grid_pose.position.x,
        source_pose.position.y,
        grid_pose.position.z,
    );

    let adjusted: Vec<Point3<f32>> = source
        .positions
        .iter()
        .map(|p| source_pose.transform_point(p) - offset)
        .collect();

    let (kernel, fix_winding) = dispatch(mode);

    let positions: Vec<Point3<f32>> = adjusted.iter().map(|&v| kernel(v, &frame)).collect();

    let mut triangles = source.triangles.clone();
    if fix_winding {
        // The back half of the circular wrap folds over; flipping its
        // winding keeps the normals facing outward. Judged on the
        // pre-transform adjusted centroid, not the wrapped output.
        for triangle in &mut triangles {
            let centroid_z = (adjusted[triangle[0] as usize].z
                + adjusted[triangle[1] as usize].z
                + adjusted[triangle[2] as usize].z)
                / 3.0;
            if centroid_z > frame.min {
                triangle.swap(0, 1);
            }
        }
    }

    let mut mesh = TriMesh {
        positions,
        triangles,
        uvs: source.uvs.clone(),
        normals: Vec::new(),
    };
    mesh.recalculate_normals();
    Ok(mesh)
}

fn kernel_none(v: Point3<f32>, _frame: &GridFrame) -> Point3<f32> {
    v
}

fn kernel_circular(v: Point3<f32>, frame: &GridFrame) -> Point3<f32> {
    circular(v, frame, false)
}

fn kernel_circular_squared(v: Point3<f32>, frame: &GridFrame) -> Point3<f32> {
    circular(v, frame, true)
}

/// Wrap the grid around the origin: X becomes the angle, Z the radius.
///
/// With `square`, the unit direction is pushed out to the unit square
/// boundary: the dominant component is normalized to +/-1 (its Euclidean
/// length against the other is 1 on the unit circle) and the other is
/// scaled in proportion.
fn circular(v: Point3<f32>, frame: &GridFrame, square: bool) -> Point3<f32> {
    let nx = frame.normalize(v.x);
    let nz = frame.normalize(v.z);

    let angle = nx * TAU;
    let mut x = angle.cos();
    let mut z = angle.sin();

    if square {
        if x.abs() > z.abs() {
            let square_x = (z * z + x * x).sqrt().copysign(x);
            let square_z = (z * z + z * z).sqrt().copysign(z);
            x = square_x;
            z = square_z;
        } else {
            let square_x = (x * x + x * x).sqrt().copysign(x);
            let square_z = (x * x + z * z).sqrt().copysign(z);
            x = square_x;
            z = square_z;
        }
    }

    let radius = nz * frame.size;
    Point3::new(x * radius, v.y, z * radius)
}

fn kernel_stretch(v: Point3<f32>, _frame: &GridFrame) -> Point3<f32> {
    Point3::new(v.x * STRETCH_FACTOR, v.y, v.z)
}

fn kernel_shrink(v: Point3<f32>, _frame: &GridFrame) -> Point3<f32> {
    Point3::new(v.x * SHRINK_FACTOR, v.y, v.z)
}

fn kernel_wavy(v: Point3<f32>, frame: &GridFrame) -> Point3<f32> {
    let nx = frame.normalize(v.x);
    let wave = (nx * TAU * WAVE_COUNT).sin() / WAVE_COUNT * 0.5;
    Point3::new(v.x, v.y, v.z + wave)
}

fn kernel_wavy_sharp(v: Point3<f32>, frame: &GridFrame) -> Point3<f32> {
    let nx = frame.normalize(v.x);
    let wave = sharp_sin(nx * TAU * WAVE_COUNT) / WAVE_COUNT * 0.5;
    Point3::new(v.x, v.y, v.z + wave)
}

fn kernel_shear(v: Point3<f32>, _frame: &GridFrame) -> Point3<f32> {
    Point3::new(v.x + SHEAR_FACTOR * v.z, v.y, v.z)
}

fn kernel_expand(v: Point3<f32>, _frame: &GridFrame) -> Point3<f32> {
    Point3::new(
        v.x * EXPAND_FACTOR,
        v.y * EXPAND_FACTOR,
        v.z * EXPAND_FACTOR,
    )
}

/// Triangle wave with the same period and phase as `sin`.
fn sharp_sin(x: f32) -> f32 {
    (x.rem_euclid(TAU) - PI).abs() - FRAC_PI_2
}

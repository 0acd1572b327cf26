//! Sort-then-bounded-search point-set equality.

use shape_types::Point3;
use std::cmp::Ordering;
use tracing::debug;

/// Coarse sampling strides tried before the full pass, largest first.
/// Checking every 1000th sorted vertex, then every 100th, then every 10th
/// rejects grossly different meshes after a few dozen comparisons; only
/// plausible near-matches pay for the full pass.
const STRIDES: [usize; 3] = [1000, 100, 10];

/// Decide whether two vertex buffers describe the same point set within a
/// per-axis tolerance.
///
/// A vertex of `a` matches when *some* vertex of `b` lies within
/// `tolerance` on all three axes simultaneously (a box, not a sphere).
/// Vertex order carries no meaning here: both buffers are sorted by the
/// lexicographic `(x, y, z)` key first and matched by an expanding search
/// around the shared sorted index.
///
/// A length mismatch is conclusive and returns `false` immediately.
/// Non-match is the ordinary, frequent outcome - no side effects beyond a
/// `debug!` diagnostic naming the first failing vertex.
///
/// # Example
///
/// ```
/// use shape_match::meshes_equal;
/// use shape_types::Point3;
///
/// let a = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
/// let b = vec![Point3::new(1.1, 0.0, 0.0), Point3::new(0.1, 0.0, 0.0)];
/// assert!(meshes_equal(&a, &b, 0.25));
/// assert!(!meshes_equal(&a, &b, 0.05));
/// ```
#[must_use]
pub fn meshes_equal(a: &[Point3<f32>], b: &[Point3<f32>], tolerance: f32) -> bool {
    if a.len() != b.len() {
        debug!(len_a = a.len(), len_b = b.len(), "mesh lengths differ");
        return false;
    }

    let mut sorted_a = a.to_vec();
    let mut sorted_b = b.to_vec();
    sorted_a.sort_unstable_by(lexicographic);
    sorted_b.sort_unstable_by(lexicographic);

    for stride in STRIDES {
        let mut index = 0;
        while index < sorted_a.len() {
            if !match_single(&sorted_a[index], index, &sorted_b, tolerance) {
                debug!(index, stride, "no vertex within tolerance in coarse pass");
                return false;
            }
            index += stride;
        }
    }

    for (index, point) in sorted_a.iter().enumerate() {
        // Indices the coarse passes already cleared.
        if STRIDES.iter().any(|stride| index % stride == 0) {
            continue;
        }
        if !match_single(point, index, &sorted_b, tolerance) {
            debug!(index, "no vertex within tolerance in full pass");
            return false;
        }
    }

    true
}

/// Lexicographic `(x, y, z)` ordering on the raw bit-total order, so NaN
/// payloads cannot panic the sort.
fn lexicographic(a: &Point3<f32>, b: &Point3<f32>) -> Ordering {
    a.x.total_cmp(&b.x)
        .then_with(|| a.y.total_cmp(&b.y))
        .then_with(|| a.z.total_cmp(&b.z))
}

/// Search `sorted_b` for any vertex within tolerance of `point`, starting
/// at `index` and expanding outward one offset at a time in both
/// directions.
///
/// After independently sorting two nearly-identical point sets, a matching
/// point's index in B can drift arbitrarily far from its index in A when
/// many points share near-equal sort keys, so the search only stops once
/// both directions run off the ends of the array.
fn match_single(point: &Point3<f32>, index: usize, sorted_b: &[Point3<f32>], tolerance: f32) -> bool {
    let mut offset = 0usize;
    loop {
        let forward = index + offset;
        let backward = index.checked_sub(offset);

        if forward >= sorted_b.len() && backward.is_none() {
            return false;
        }

        if forward < sorted_b.len() && within_tolerance(point, &sorted_b[forward], tolerance) {
            return true;
        }

        if let Some(backward) = backward {
            if within_tolerance(point, &sorted_b[backward], tolerance) {
                return true;
            }
        }

        offset += 1;
    }
}

/// Box (per-axis) tolerance test; a single scalar is reused for all axes.
#[inline]
fn within_tolerance(a: &Point3<f32>, b: &Point3<f32>, tolerance: f32) -> bool {
    (a.x - b.x).abs() <= tolerance
        && (a.y - b.y).abs() <= tolerance
        && (a.z - b.z).abs() <= tolerance
}

//! Per-tick dirty checks.

use shape_transform::Pose;
use shape_types::{Point3, Vector3};

/// Remembers the last observed vertex buffer, pose and bounds size and
/// reports whether each has changed since.
///
/// Each `*_changed` call compares against the stored value, then stores
/// the new one. The first observation of any quantity reports a change,
/// so a freshly constructed detector triggers one full regeneration.
/// Comparisons are exact; a vertex nudged by one ulp counts as a change.
#[derive(Debug, Default)]
pub struct ChangeDetector {
    positions: Option<Vec<Point3<f32>>>,
    pose: Option<Pose>,
    bounds_size: Option<Vector3<f32>>,
}

impl ChangeDetector {
    /// Detector that has observed nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the vertex buffer differs from the last one observed.
    pub fn vertices_changed(&mut self, positions: &[Point3<f32>]) -> bool {
        let changed = self
            .positions
            .as_deref()
            .map_or(true, |previous| previous != positions);
        if changed {
            self.positions = Some(positions.to_vec());
        }
        changed
    }

    /// Whether the pose differs from the last one observed.
    pub fn pose_changed(&mut self, pose: &Pose) -> bool {
        let changed = self.pose.as_ref() != Some(pose);
        if changed {
            self.pose = Some(*pose);
        }
        changed
    }

    /// Whether the bounds size differs from the last one observed.
    pub fn bounds_changed(&mut self, size: &Vector3<f32>) -> bool {
        let changed = self.bounds_size.as_ref() != Some(size);
        if changed {
            self.bounds_size = Some(*size);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_counts_as_a_change() {
        let mut detector = ChangeDetector::new();
        assert!(detector.vertices_changed(&[Point3::origin()]));
        assert!(detector.pose_changed(&Pose::identity()));
        assert!(detector.bounds_changed(&Vector3::new(1.0, 1.0, 1.0)));
    }

    #[test]
    fn unchanged_values_stay_quiet() {
        let mut detector = ChangeDetector::new();
        let buffer = [Point3::new(1.0, 2.0, 3.0)];
        detector.vertices_changed(&buffer);
        assert!(!detector.vertices_changed(&buffer));
        detector.pose_changed(&Pose::identity());
        assert!(!detector.pose_changed(&Pose::identity()));
    }

    #[test]
    fn any_vertex_edit_is_noticed() {
        let mut detector = ChangeDetector::new();
        let mut buffer = vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        detector.vertices_changed(&buffer);
        buffer[1].y += 1.0e-6;
        assert!(detector.vertices_changed(&buffer));
        assert!(!detector.vertices_changed(&buffer));
    }

    #[test]
    fn pose_translation_is_noticed() {
        let mut detector = ChangeDetector::new();
        detector.pose_changed(&Pose::identity());
        assert!(detector.pose_changed(&Pose::from_position(Point3::new(0.0, 1.0, 0.0))));
    }
}

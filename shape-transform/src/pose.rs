//! Rigid world transform of a scene entity.

use shape_types::{Point3, UnitQuaternion, Vector3};

/// World-space position and rotation of a mesh-bearing entity.
///
/// The scene glue supplies one of these for the transform source and one
/// for the reference grid; the engine never looks anything up itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// World position.
    pub position: Point3<f32>,
    /// World rotation.
    pub rotation: UnitQuaternion<f32>,
}

impl Pose {
    /// Pose at the origin with no rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Pose at a position with no rotation.
    #[must_use]
    pub fn from_position(position: Point3<f32>) -> Self {
        Self {
            position,
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Pose from position and rotation.
    #[must_use]
    pub const fn new(position: Point3<f32>, rotation: UnitQuaternion<f32>) -> Self {
        Self { position, rotation }
    }

    /// Map a local point into world space.
    #[inline]
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f32>) -> Point3<f32> {
        self.rotation * point + self.position.coords
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_leaves_points_alone() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(Pose::identity().transform_point(&p), p);
    }

    #[test]
    fn translation_offsets_points() {
        let pose = Pose::from_position(Point3::new(1.0, 0.0, -1.0));
        let p = pose.transform_point(&Point3::new(0.5, 0.5, 0.5));
        assert_relative_eq!(p.x, 1.5);
        assert_relative_eq!(p.z, -0.5);
    }

    #[test]
    fn rotation_applies_before_translation() {
        let pose = Pose::new(
            Point3::new(10.0, 0.0, 0.0),
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2),
        );
        // +x rotates onto -z around y
        let p = pose.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, -1.0, epsilon = 1e-6);
    }
}

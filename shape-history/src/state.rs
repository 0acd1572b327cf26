//! Snapshot payload types.

use shape_transform::TransformMode;
use shape_types::{Point3, TriMesh, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The restorable, non-mesh part of a shape object.
///
/// `mesh_ref` names a persisted mesh snapshot when the state came from a
/// level file; live snapshots carry their mesh in [`Snapshot::mesh`] and
/// leave it `None`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectState {
    /// Position of the object relative to its parent anchor.
    pub local_position: Point3<f32>,
    /// World rotation.
    pub rotation: UnitQuaternion<f32>,
    /// Axis-aligned collider extents.
    pub collider_size: Vector3<f32>,
    /// Transform mode selected at snapshot time.
    pub mode: TransformMode,
    /// Key of a persisted mesh snapshot, if any.
    pub mesh_ref: Option<String>,
}

impl ObjectState {
    /// A state at the origin with identity rotation, unit collider and no
    /// transform mode selected.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            local_position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
            collider_size: Vector3::new(1.0, 1.0, 1.0),
            mode: TransformMode::None,
            mesh_ref: None,
        }
    }
}

/// One restorable history entry: a deep mesh copy and the object state
/// that accompanied it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// Deep copy of the source mesh at snapshot time.
    pub mesh: TriMesh,
    /// Object state at snapshot time.
    pub state: ObjectState,
}

impl Snapshot {
    /// Bundle a mesh and state into a snapshot, cloning the mesh.
    #[must_use]
    pub fn new(mesh: &TriMesh, state: ObjectState) -> Self {
        Self {
            mesh: mesh.clone(),
            state,
        }
    }
}

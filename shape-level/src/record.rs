//! Serialized record types.

use crate::{LevelError, LevelResult};
use serde::{Deserialize, Serialize};
use shape_transform::TransformMode;
use shape_types::{Point2, Point3, TriMesh, UnitQuaternion, Vector3};
use tracing::debug;

/// A persisted mesh snapshot.
///
/// Triangles are stored as a flat index list, three entries per
/// triangle, exactly as authored level files carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshRecord {
    /// Vertex positions.
    pub vertices: Vec<Point3<f32>>,
    /// Flat triangle index list, length a multiple of three.
    pub triangles: Vec<u32>,
    /// Texture coordinates, one per vertex or empty.
    pub uv: Vec<Point2<f32>>,
}

impl MeshRecord {
    /// Decode a mesh snapshot from JSON.
    pub fn from_json_str(json: &str) -> LevelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode this mesh snapshot as JSON.
    pub fn to_json_string(&self) -> LevelResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Convert into a mesh, grouping the flat index list into triangles.
    /// Normals are left for the caller to recalculate.
    pub fn into_mesh(self) -> LevelResult<TriMesh> {
        if self.triangles.len() % 3 != 0 {
            return Err(LevelError::MalformedTriangles {
                count: self.triangles.len(),
            });
        }
        let triangles = self
            .triangles
            .chunks_exact(3)
            .map(|chunk| [chunk[0], chunk[1], chunk[2]])
            .collect();
        let mut mesh = TriMesh::from_parts(self.vertices, triangles);
        mesh.uvs = self.uv;
        Ok(mesh)
    }
}

impl From<&TriMesh> for MeshRecord {
    fn from(mesh: &TriMesh) -> Self {
        Self {
            vertices: mesh.positions.clone(),
            triangles: mesh.triangles.iter().flatten().copied().collect(),
            uv: mesh.uvs.clone(),
        }
    }
}

/// One authored object state inside a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    /// Key of the mesh snapshot this record restores.
    pub mesh: String,
    /// Object position relative to the level anchor.
    pub position: Point3<f32>,
    /// Object rotation.
    pub rotation: UnitQuaternion<f32>,
    /// Axis-aligned collider extents.
    pub collider_size: Vector3<f32>,
    /// Transform mode, accepted as a name or an ordinal.
    #[serde(with = "mode_repr")]
    pub mode: TransformMode,
    /// Whether this record is the hidden goal shape.
    pub is_goal: bool,
}

/// A complete level: its display name and the authored snapshots in
/// solution order, goal included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelManifest {
    /// Display name of the level.
    pub name: String,
    /// Authored snapshots in file order.
    pub snapshots: Vec<SnapshotRecord>,
}

impl LevelManifest {
    /// Decode a manifest from JSON.
    pub fn from_json_str(json: &str) -> LevelResult<Self> {
        let manifest: Self = serde_json::from_str(json)?;
        debug!(
            name = %manifest.name,
            snapshots = manifest.snapshots.len(),
            "decoded level manifest"
        );
        Ok(manifest)
    }

    /// Encode this manifest as JSON.
    pub fn to_json_string(&self) -> LevelResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The goal record, if the manifest has one.
    #[must_use]
    pub fn goal(&self) -> Option<&SnapshotRecord> {
        self.snapshots.iter().find(|record| record.is_goal)
    }
}

/// Mode fields serialize as the display name but decode from either a
/// name or the palette ordinal, since both appear in authored files.
mod mode_repr {
    use super::{LevelError, TransformMode};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Ordinal(u8),
        Name(String),
    }

    fn resolve(repr: Repr) -> Result<TransformMode, LevelError> {
        match repr {
            Repr::Ordinal(ordinal) => TransformMode::try_from(ordinal)
                .map_err(|_| LevelError::UnknownModeOrdinal(ordinal)),
            Repr::Name(name) => TransformMode::from_name(&name)
                .or_else(|| {
                    // Compact spelling without spaces, e.g. "WavySharp".
                    TransformMode::ALL
                        .into_iter()
                        .find(|mode| mode.name().replace(' ', "") == name)
                })
                .ok_or(LevelError::UnknownModeName(name)),
        }
    }

    pub fn serialize<S: Serializer>(mode: &TransformMode, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(mode.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TransformMode, D::Error> {
        let repr = Repr::deserialize(deserializer)?;
        resolve(repr).map_err(D::Error::custom)
    }
}

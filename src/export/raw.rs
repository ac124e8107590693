//! Raw mesh data export for custom consumers.
//!
//! The layout is the one polygon-based scene editors ingest directly:
//! vertex positions, a flat loop (corner) list with per-polygon totals and
//! starts, and attributes per loop.

use crate::error::Result;
use crate::mesher::{MesherOutput, NamedMesh, TurretRig};
use serde::{Deserialize, Serialize};

/// Raw buffers of one named mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMesh {
    pub name: String,
    pub group: String,
    /// Vertex positions (3 floats per vertex).
    pub positions: Vec<[f32; 3]>,
    /// Vertex index of every polygon corner.
    pub loops: Vec<u32>,
    /// Corner count per polygon.
    pub loop_totals: Vec<u32>,
    /// Index into `loops` of each polygon's first corner.
    pub loop_starts: Vec<u32>,
    /// Primary RGBA color per corner.
    pub primary_colors: Vec<[u8; 4]>,
    /// Secondary RGBA color per corner.
    pub secondary_colors: Vec<[u8; 4]>,
    /// Material code per polygon.
    pub materials: Vec<i32>,
    pub origin: Option<[f32; 3]>,
}

impl RawMesh {
    pub fn from_mesh(mesh: &NamedMesh) -> Self {
        let (primary, secondary) = mesh.corner_colors();
        Self {
            name: mesh.name.clone(),
            group: mesh.group.clone(),
            positions: mesh.fragment.vertices.clone(),
            loops: mesh.fragment.faces.clone(),
            loop_totals: mesh.fragment.offsets.clone(),
            loop_starts: mesh.fragment.loop_starts(),
            primary_colors: primary.iter().map(|c| c.to_rgba8()).collect(),
            secondary_colors: secondary.iter().map(|c| c.to_rgba8()).collect(),
            materials: mesh.materials.clone(),
            origin: mesh.origin.map(|o| o.to_array()),
        }
    }
}

/// Raw data of a whole mesher run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMeshData {
    pub meshes: Vec<RawMesh>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rig: Option<TurretRig>,
}

/// Export meshes as raw data.
pub fn export_raw(output: &MesherOutput) -> RawMeshData {
    RawMeshData {
        meshes: output.meshes.iter().map(RawMesh::from_mesh).collect(),
        rig: output.rig.clone(),
    }
}

impl RawMeshData {
    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.meshes.iter().map(|m| m.positions.len()).sum()
    }

    /// Get the number of polygons.
    pub fn polygon_count(&self) -> usize {
        self.meshes.iter().map(|m| m.loop_totals.len()).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//! Mesh export formats.
//!
//! This module provides exporters for various 3D formats.

pub mod gltf;
pub mod obj;
pub mod raw;

pub use gltf::export_glb;
pub use obj::{export_obj, ObjExport};
pub use raw::{export_raw, RawMesh, RawMeshData};

//! # Avorion Mesher
//!
//! A Rust library for generating 3D meshes from Avorion ship and turret
//! designs.
//!
//! ## Overview
//!
//! This library takes a design file exported by the game (XML) and produces
//! polygon meshes: every block is one of eight reference shapes, rotated by
//! its orientation code and stretched into its bounding box. Meshes can be
//! exported as GLB, OBJ or raw buffers.
//!
//! ## Quick Start
//!
//! ```ignore
//! use avorion_mesher::{load_design, Mesher, MesherConfig, export_glb};
//!
//! // Load a design
//! let design = load_design("path/to/ship.xml")?;
//!
//! // Merge blocks into one mesh per hull or turret part
//! let config = MesherConfig::default().with_separate_blocks(false);
//! let output = Mesher::with_config(config).build(&design)?;
//!
//! // Export to GLB
//! let glb_bytes = export_glb(&output)?;
//! ```
//!
//! ## Unknown block types
//!
//! Type codes missing from the shape tables fail the build by default. Use
//! [`ShapeResolution::Lenient`] to generate them as cubes instead:
//!
//! ```ignore
//! use avorion_mesher::{MesherConfig, ShapeResolution};
//!
//! let config = MesherConfig::default().with_shape_resolution(ShapeResolution::Lenient);
//! ```

pub mod catalog;
pub mod design;
pub mod error;
pub mod export;
pub mod mesher;
pub mod types;

// Re-export main types for convenience
pub use catalog::{Category, Material, ShapeKey, ShapeResolution};
pub use design::{Block, Design, DesignSummary, PartKind, Ship, Turret, TurretPart};
pub use error::{ErrorKind, MesherError, Result};
pub use export::gltf::export_glb;
pub use export::obj::{export_obj, ObjExport};
pub use export::raw::{export_raw, RawMesh, RawMeshData};
pub use mesher::{
    Fragment, GeometryWarning, Mesher, MesherConfig, MesherOutput, NamedMesh, RigBone, TurretRig,
    DESIGN_FORWARD, DESIGN_UP,
};
pub use types::{axis_conversion, BoundingBox, Color, Orientation, SignedAxis};

/// Load a design from a file path. The design is named after the file stem.
pub fn load_design<P: AsRef<std::path::Path>>(path: P) -> Result<Design> {
    Design::load(path)
}

/// Parse a design from XML text.
pub fn parse_design(xml: &str, name: &str) -> Result<Design> {
    Design::from_xml_str(xml, name)
}

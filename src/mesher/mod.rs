//! Mesh generation from designs.
//!
//! Every block is stretched from one of eight reference polyhedra into its
//! bounding box. Blocks are emitted one mesh each, or joined into one mesh
//! per hull or turret part.

pub mod block;
pub mod concat;
pub mod geometry;
pub mod reference;
pub mod rig;

pub use block::{generate, GeometryWarning};
pub use concat::concatenate;
pub use geometry::Fragment;
pub use reference::ReferenceShape;
pub use rig::{RigBone, TurretRig};

use crate::catalog::ShapeResolution;
use crate::design::{Block, Design, Ship, Turret};
use crate::error::{MesherError, Result};
use crate::types::{axis_conversion, BoundingBox, Color, OrientationFault, SignedAxis};
use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Forward axis of designs as exported by the game.
pub const DESIGN_FORWARD: SignedAxis = SignedAxis::NegZ;
/// Up axis of designs as exported by the game.
pub const DESIGN_UP: SignedAxis = SignedAxis::PosY;

/// Main mesher configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MesherConfig {
    /// Emit one mesh per block instead of one per hull or turret part.
    pub separate_blocks: bool,
    /// Shift the output so the center of its bounds is the origin.
    pub recenter_to_origin: bool,
    /// Handling of type codes missing from the shape tables.
    pub shape_resolution: ShapeResolution,
    /// Applied to all output after generation.
    pub global_matrix: Mat4,
    /// Generate blocks on the rayon pool. Ignored without the `parallel`
    /// feature.
    pub parallel: bool,
}

impl Default for MesherConfig {
    fn default() -> Self {
        Self {
            separate_blocks: true,
            recenter_to_origin: false,
            shape_resolution: ShapeResolution::Strict,
            global_matrix: Mat4::IDENTITY,
            parallel: true,
        }
    }
}

impl MesherConfig {
    pub fn with_separate_blocks(mut self, separate: bool) -> Self {
        self.separate_blocks = separate;
        self
    }

    pub fn with_recenter(mut self, recenter: bool) -> Self {
        self.recenter_to_origin = recenter;
        self
    }

    pub fn with_shape_resolution(mut self, policy: ShapeResolution) -> Self {
        self.shape_resolution = policy;
        self
    }

    pub fn with_global_matrix(mut self, matrix: Mat4) -> Self {
        self.global_matrix = matrix;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Convert from a `(forward, up)` axis convention to forward `+Y`,
    /// up `+Z`.
    ///
    /// Returns `None` if `forward` and `up` share an axis.
    pub fn with_axes(self, forward: SignedAxis, up: SignedAxis) -> Option<Self> {
        let rotation = axis_conversion(forward, up, SignedAxis::PosY, SignedAxis::PosZ)?;
        Some(self.with_global_matrix(Mat4::from_mat3(rotation)))
    }

    /// Override the axis conversion from optional `forward`/`up` axes.
    ///
    /// With neither axis given the current `global_matrix` is kept. A single
    /// missing axis is taken from the game's design frame
    /// ([`DESIGN_FORWARD`], [`DESIGN_UP`]). Returns `None` if the resulting
    /// pair shares an axis.
    pub fn with_axis_override(
        self,
        forward: Option<SignedAxis>,
        up: Option<SignedAxis>,
    ) -> Option<Self> {
        match (forward, up) {
            (None, None) => Some(self),
            (forward, up) => self.with_axes(
                forward.unwrap_or(DESIGN_FORWARD),
                up.unwrap_or(DESIGN_UP),
            ),
        }
    }

    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }
}

/// One output mesh with per-face attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedMesh {
    pub name: String,
    /// Hull or turret part this mesh belongs to.
    pub group: String,
    pub fragment: Fragment,
    /// Translation of the whole mesh, set for turret parts.
    pub origin: Option<Vec3>,
    pub primary_colors: Vec<Color>,
    pub secondary_colors: Vec<Color>,
    /// Material code per face.
    pub materials: Vec<i32>,
}

impl NamedMesh {
    /// Join block fragments, repeating each block's attributes over its faces.
    fn assemble(
        name: String,
        group: &str,
        origin: Option<Vec3>,
        blocks: &[Block],
        fragments: &[Fragment],
    ) -> Self {
        let (fragment, face_counts) = concatenate(fragments);
        let primary: Vec<Color> = blocks.iter().map(|b| b.color).collect();
        let secondary: Vec<Color> = blocks.iter().map(|b| b.secondary_color).collect();
        let materials: Vec<i32> = blocks.iter().map(|b| b.material).collect();

        Self {
            name,
            group: group.to_string(),
            fragment,
            origin,
            primary_colors: concat::per_face(&primary, &face_counts),
            secondary_colors: concat::per_face(&secondary, &face_counts),
            materials: concat::per_face(&materials, &face_counts),
        }
    }

    /// Primary and secondary colors per polygon corner, in `faces` order.
    pub fn corner_colors(&self) -> (Vec<Color>, Vec<Color>) {
        let corners: Vec<usize> = self.fragment.offsets.iter().map(|&n| n as usize).collect();
        (
            concat::per_face(&self.primary_colors, &corners),
            concat::per_face(&self.secondary_colors, &corners),
        )
    }

    /// Bounds with the origin applied.
    pub fn world_bounds(&self) -> Option<BoundingBox> {
        let bounds = self.fragment.bounds()?;
        Some(bounds.translated(self.origin.unwrap_or(Vec3::ZERO).to_array()))
    }

    /// Apply a transform to the mesh as placed in the world.
    ///
    /// With an origin, the origin takes the full transform and the
    /// vertices only its linear part.
    pub fn transform(&mut self, matrix: &Mat4) {
        match self.origin.as_mut() {
            Some(origin) => {
                *origin = matrix.transform_point3(*origin);
                self.fragment
                    .transform(&Mat4::from_mat3(Mat3::from_mat4(*matrix)));
            }
            None => self.fragment.transform(matrix),
        }
    }

    pub fn translate(&mut self, offset: Vec3) {
        match self.origin.as_mut() {
            Some(origin) => *origin += offset,
            None => self.fragment.translate(offset.to_array()),
        }
    }
}

/// Output from the mesher.
#[derive(Debug, Clone, Default)]
pub struct MesherOutput {
    pub meshes: Vec<NamedMesh>,
    /// Bone layout, for turrets meshed with merged blocks.
    pub rig: Option<TurretRig>,
    /// Blocks generated unrotated because of a bad orientation.
    pub warnings: Vec<GeometryWarning>,
}

impl MesherOutput {
    pub fn mesh(&self, name: &str) -> Option<&NamedMesh> {
        self.meshes.iter().find(|m| m.name == name)
    }

    pub fn total_vertices(&self) -> usize {
        self.meshes.iter().map(|m| m.fragment.vertex_count()).sum()
    }

    pub fn total_faces(&self) -> usize {
        self.meshes.iter().map(|m| m.fragment.face_count()).sum()
    }

    /// World bounds of all meshes.
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.meshes
            .iter()
            .filter_map(NamedMesh::world_bounds)
            .reduce(|a, b| a.union(&b))
    }

    fn apply_matrix(&mut self, matrix: &Mat4) {
        for mesh in &mut self.meshes {
            mesh.transform(matrix);
        }
        if let Some(rig) = self.rig.as_mut() {
            rig.transform(matrix);
        }
    }

    fn recenter(&mut self) {
        let Some(bounds) = self.bounds() else {
            return;
        };
        let shift = -Vec3::from(bounds.center());
        for mesh in &mut self.meshes {
            mesh.translate(shift);
        }
        if let Some(rig) = self.rig.as_mut() {
            rig.translate(shift);
        }
    }
}

/// The main mesher struct.
#[derive(Debug, Clone, Default)]
pub struct Mesher {
    config: MesherConfig,
}

impl Mesher {
    /// Create a new mesher with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new mesher with custom configuration.
    pub fn with_config(config: MesherConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &MesherConfig {
        &self.config
    }

    /// Generate the meshes of a design.
    ///
    /// Fails as a whole on the first block that cannot be generated. Only
    /// the hull of a ship is meshed; its embedded turrets are meshed with
    /// [`Mesher::build_turret`].
    pub fn build(&self, design: &Design) -> Result<MesherOutput> {
        match design {
            Design::Ship(ship) => self.build_ship(ship),
            Design::Turret(turret) => self.build_turret(turret),
        }
    }

    pub fn build_ship(&self, ship: &Ship) -> Result<MesherOutput> {
        let mut output = MesherOutput::default();
        let group = format!("{}.hull", ship.name);
        let fragments = self.generate_group(&ship.blocks, &group, &mut output.warnings)?;
        output.meshes = self.group_meshes(&ship.name, &group, None, &ship.blocks, &fragments);
        Ok(self.finish(output, &ship.name))
    }

    /// Generate the meshes of a turret. Coaxial turrets are not supported.
    pub fn build_turret(&self, turret: &Turret) -> Result<MesherOutput> {
        if turret.coaxial {
            return Err(MesherError::NotImplemented(format!(
                "meshing coaxial turret '{}'",
                turret.name
            )));
        }

        let mut output = MesherOutput::default();
        for part in turret.parts() {
            let group = format!("{}.{}", turret.name, part.part);
            let fragments = self.generate_group(&part.blocks, &group, &mut output.warnings)?;
            output.meshes.extend(self.group_meshes(
                &group,
                &group,
                Some(part.origin),
                &part.blocks,
                &fragments,
            ));
        }

        if !self.config.separate_blocks {
            output.rig = TurretRig::for_turret(turret);
        }
        Ok(self.finish(output, &turret.name))
    }

    /// Apply the global matrix and recentering.
    fn finish(&self, mut output: MesherOutput, name: &str) -> MesherOutput {
        if self.config.global_matrix != Mat4::IDENTITY {
            output.apply_matrix(&self.config.global_matrix);
        }
        if self.config.recenter_to_origin {
            output.recenter();
        }

        tracing::debug!(
            design = name,
            meshes = output.meshes.len(),
            vertices = output.total_vertices(),
            faces = output.total_faces(),
            warnings = output.warnings.len(),
            "meshed design"
        );
        output
    }

    /// Separate block meshes are named `<prefix>.block<index>`, a merged
    /// mesh after its group.
    fn group_meshes(
        &self,
        prefix: &str,
        group: &str,
        origin: Option<Vec3>,
        blocks: &[Block],
        fragments: &[Fragment],
    ) -> Vec<NamedMesh> {
        if blocks.is_empty() {
            return Vec::new();
        }

        if self.config.separate_blocks {
            blocks
                .iter()
                .zip(fragments)
                .map(|(block, fragment)| {
                    NamedMesh::assemble(
                        format!("{prefix}.block{}", block.index),
                        group,
                        origin,
                        std::slice::from_ref(block),
                        std::slice::from_ref(fragment),
                    )
                })
                .collect()
        } else {
            vec![NamedMesh::assemble(
                group.to_string(),
                group,
                origin,
                blocks,
                fragments,
            )]
        }
    }

    /// Generate every block of a group, recording orientation fallbacks.
    fn generate_group(
        &self,
        blocks: &[Block],
        group: &str,
        warnings: &mut Vec<GeometryWarning>,
    ) -> Result<Vec<Fragment>> {
        let generated = self.generate_blocks(blocks)?;

        let mut fragments = Vec::with_capacity(generated.len());
        for (block, (fragment, fault)) in blocks.iter().zip(generated) {
            if let Some(fault) = fault {
                warnings.push(GeometryWarning {
                    group: group.to_string(),
                    block_index: block.index,
                    orientation: block.orientation,
                    fault,
                });
            }
            fragments.push(fragment);
        }
        Ok(fragments)
    }

    #[cfg(feature = "parallel")]
    fn generate_blocks(&self, blocks: &[Block]) -> Result<Vec<Generated>> {
        use rayon::prelude::*;

        let policy = self.config.shape_resolution;
        if self.config.parallel {
            blocks
                .par_iter()
                .map(|b| block::generate_checked(b, policy))
                .collect()
        } else {
            generate_sequential(blocks, policy)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn generate_blocks(&self, blocks: &[Block]) -> Result<Vec<Generated>> {
        generate_sequential(blocks, self.config.shape_resolution)
    }
}

type Generated = (Fragment, Option<OrientationFault>);

fn generate_sequential(blocks: &[Block], policy: ShapeResolution) -> Result<Vec<Generated>> {
    blocks
        .iter()
        .map(|b| block::generate_checked(b, policy))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::fixtures::{SHIP_XML, TURRET_XML};
    use crate::error::ErrorKind;

    fn ship() -> Design {
        Design::from_xml_str(SHIP_XML, "frigate").unwrap()
    }

    fn turret() -> Design {
        Design::from_xml_str(TURRET_XML, "gun").unwrap()
    }

    fn merged() -> MesherConfig {
        MesherConfig::default().with_separate_blocks(false)
    }

    #[test]
    fn test_ship_separate_blocks() {
        let output = Mesher::new().build(&ship()).unwrap();
        let names: Vec<_> = output.meshes.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["frigate.block0", "frigate.block1", "frigate.block2"]);
        assert!(output.meshes.iter().all(|m| m.group == "frigate.hull"));
        assert!(output.meshes.iter().all(|m| m.origin.is_none()));
        assert!(output.rig.is_none());
        assert!(output.warnings.is_empty());

        let block0 = output.mesh("frigate.block0").unwrap();
        assert_eq!(block0.primary_colors, vec![Color::rgba(0x80, 0x80, 0x80, 0xFF); 6]);
        assert_eq!(block0.secondary_colors, vec![Color::TRANSPARENT; 6]);
        assert_eq!(block0.materials, vec![0; 6]);

        let block1 = output.mesh("frigate.block1").unwrap();
        assert_eq!(block1.fragment.face_count(), 5);
        assert_eq!(block1.secondary_colors[0], Color::rgba(0, 0xFF, 0, 0xFF));
    }

    #[test]
    fn test_ship_merged_hull() {
        let output = Mesher::with_config(merged()).build(&ship()).unwrap();
        assert_eq!(output.meshes.len(), 1);

        let hull = output.mesh("frigate.hull").unwrap();
        // Cube, edge and corner: 6 + 5 + 7 faces over 8 + 6 + 7 vertices.
        assert_eq!(hull.fragment.face_count(), 18);
        assert_eq!(hull.fragment.vertex_count(), 21);
        assert!(hull.fragment.is_well_formed());
        assert_eq!(hull.primary_colors.len(), 18);
        assert_eq!(hull.primary_colors[5], Color::rgba(0x80, 0x80, 0x80, 0xFF));
        assert_eq!(hull.primary_colors[6], Color::rgba(0xFF, 0, 0, 0xFF));
        assert_eq!(hull.primary_colors[17], Color::rgba(0, 0, 0xFF, 0x80));
        assert_eq!(hull.materials[17], 6);
        // Embedded turrets are not part of the hull.
        assert!(output.rig.is_none());
    }

    #[test]
    fn test_corner_colors() {
        let output = Mesher::with_config(merged()).build(&ship()).unwrap();
        let hull = &output.meshes[0];
        let (primary, secondary) = hull.corner_colors();
        assert_eq!(primary.len(), hull.fragment.faces.len());
        assert_eq!(secondary.len(), hull.fragment.faces.len());
        // The cube contributes 24 corners.
        assert_eq!(primary[23], Color::rgba(0x80, 0x80, 0x80, 0xFF));
        assert_eq!(primary[24], Color::rgba(0xFF, 0, 0, 0xFF));
    }

    #[test]
    fn test_turret_merged_parts() {
        let output = Mesher::with_config(merged()).build(&turret()).unwrap();
        let names: Vec<_> = output.meshes.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["gun.base", "gun.body", "gun.barrel"]);

        let barrel = output.mesh("gun.barrel").unwrap();
        assert_eq!(barrel.origin, Some(Vec3::new(0.0, 1.5, 0.5)));
        assert_eq!(barrel.group, "gun.barrel");
        // Vertices stay part-local.
        assert_eq!(barrel.fragment.bounds().unwrap().min, [0.25, 0.25, 0.0]);
        assert_eq!(barrel.world_bounds().unwrap().min, [0.25, 1.75, 0.5]);

        let rig = output.rig.unwrap();
        assert_eq!(rig.bones.len(), 4);
    }

    #[test]
    fn test_turret_separate_blocks() {
        let output = Mesher::new().build(&turret()).unwrap();
        let names: Vec<_> = output.meshes.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "gun.base.block0",
                "gun.body.block0",
                "gun.body.block1",
                "gun.barrel.block0"
            ]
        );
        assert_eq!(output.meshes[2].group, "gun.body");
        assert_eq!(output.meshes[2].origin, Some(Vec3::new(0.0, 1.0, 0.0)));
        assert!(output.rig.is_none());
    }

    #[test]
    fn test_embedded_turret_builds() {
        let Design::Ship(ship) = ship() else {
            unreachable!()
        };
        let output = Mesher::with_config(merged())
            .build_turret(&ship.turrets[0])
            .unwrap();
        // Empty body and barrel produce no meshes.
        assert_eq!(output.meshes.len(), 1);
        assert_eq!(output.meshes[0].name, "frigate_turret0.base");
    }

    #[test]
    fn test_coaxial_turret_not_implemented() {
        let Design::Turret(mut turret) = turret() else {
            unreachable!()
        };
        turret.coaxial = true;
        let err = Mesher::new().build_turret(&turret).unwrap_err();
        assert!(matches!(err, MesherError::NotImplemented(_)));
        assert_eq!(err.kind(), ErrorKind::Unsupported);
    }

    #[test]
    fn test_orientation_warnings_are_collected() {
        let ship = Ship {
            name: "bent".into(),
            blocks: vec![
                Block::new(0, [0.0; 3], [1.0; 3]),
                Block::new(7, [1.0, 0.0, 0.0], [2.0, 1.0, 1.0]).with_orientation(9, 3),
            ],
            turrets: Vec::new(),
        };
        let output = Mesher::new().build_ship(&ship).unwrap();
        assert_eq!(output.meshes.len(), 2);
        assert_eq!(output.warnings.len(), 1);

        let warning = &output.warnings[0];
        assert_eq!(warning.group, "bent.hull");
        assert_eq!(warning.block_index, 7);
        assert_eq!(warning.fault, OrientationFault::OutOfRange);
    }

    #[test]
    fn test_lookup_policy() {
        let ship = Ship {
            name: "odd".into(),
            blocks: vec![Block::new(0, [0.0; 3], [1.0; 3]).with_type(99999)],
            turrets: Vec::new(),
        };

        let err = Mesher::new().build_ship(&ship).unwrap_err();
        assert!(matches!(err, MesherError::UnknownShape(99999)));
        assert_eq!(err.kind(), ErrorKind::Lookup);

        let lenient = MesherConfig::default().with_shape_resolution(ShapeResolution::Lenient);
        let output = Mesher::with_config(lenient).build_ship(&ship).unwrap();
        assert_eq!(output.meshes[0].fragment.face_count(), 6);
    }

    #[test]
    fn test_global_matrix() {
        let shift = Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0));
        let config = merged().with_global_matrix(shift);

        let output = Mesher::with_config(config.clone()).build(&ship()).unwrap();
        let bounds = output.bounds().unwrap();
        assert_eq!(bounds.min, [10.0, 0.0, 0.0]);
        assert_eq!(bounds.max, [13.0, 2.0, 1.0]);

        // Turret parts move by origin, not by vertex.
        let output = Mesher::with_config(config).build(&turret()).unwrap();
        let body = output.mesh("gun.body").unwrap();
        assert_eq!(body.origin, Some(Vec3::new(10.0, 1.0, 0.0)));
        assert_eq!(body.fragment.bounds().unwrap().min, [0.0, 0.0, 0.0]);
        let rig = output.rig.unwrap();
        assert_eq!(rig.bones[0].head, Vec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_axis_conversion_config() {
        // Forward -Z, up +Y into forward +Y, up +Z.
        let config = merged()
            .with_axes(SignedAxis::NegZ, SignedAxis::PosY)
            .unwrap();
        let output = Mesher::with_config(config).build(&ship()).unwrap();
        let bounds = output.bounds().unwrap();
        // X stays, Y becomes Z and Z becomes -Y.
        let close = |a: [f32; 3], b: [f32; 3]| a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-6);
        assert!(close(bounds.min, [0.0, -1.0, 0.0]), "{:?}", bounds.min);
        assert!(close(bounds.max, [3.0, 0.0, 2.0]), "{:?}", bounds.max);

        assert!(MesherConfig::default()
            .with_axes(SignedAxis::PosY, SignedAxis::NegY)
            .is_none());
    }

    #[test]
    fn test_axis_override_keeps_loaded_matrix() {
        let shift = Mat4::from_translation(Vec3::new(100.0, 0.0, 0.0));
        let json = serde_json::to_string(&merged().with_global_matrix(shift)).unwrap();
        let loaded = MesherConfig::from_json_str(&json).unwrap();

        // No axis flags: the matrix from the file survives.
        let config = loaded.clone().with_axis_override(None, None).unwrap();
        assert_eq!(config.global_matrix, shift);
        assert!(!config.separate_blocks);
        let output = Mesher::with_config(config).build(&ship()).unwrap();
        assert_eq!(output.bounds().unwrap().min, [100.0, 0.0, 0.0]);

        // One axis given: the other comes from the design frame.
        let config = loaded.with_axis_override(Some(SignedAxis::PosX), None).unwrap();
        let rotation = Mat3::from_mat4(config.global_matrix);
        assert_eq!(rotation * Vec3::X, Vec3::Y);
        assert_eq!(rotation * Vec3::Y, Vec3::Z);
        assert!(!config.separate_blocks);

        // Forward +Y clashes with the default up axis.
        assert!(MesherConfig::default()
            .with_axis_override(Some(SignedAxis::PosY), None)
            .is_none());
    }

    #[test]
    fn test_recenter() {
        let config = merged().with_recenter(true);
        let output = Mesher::with_config(config).build(&ship()).unwrap();
        let bounds = output.bounds().unwrap();
        assert_eq!(bounds.min, [-1.5, -1.0, -0.5]);
        assert_eq!(bounds.max, [1.5, 1.0, 0.5]);

        let config = merged().with_recenter(true);
        let output = Mesher::with_config(config).build(&turret()).unwrap();
        let center = output.bounds().unwrap().center();
        assert!(center.iter().all(|c| c.abs() < 1e-6));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let design = ship();
        let parallel = Mesher::with_config(merged().with_parallel(true))
            .build(&design)
            .unwrap();
        let sequential = Mesher::with_config(merged().with_parallel(false))
            .build(&design)
            .unwrap();
        assert_eq!(parallel.meshes, sequential.meshes);
    }

    #[test]
    fn test_config_from_json() {
        let config = MesherConfig::from_json_str(
            r#"{"separate_blocks": false, "shape_resolution": "lenient"}"#,
        )
        .unwrap();
        assert!(!config.separate_blocks);
        assert_eq!(config.shape_resolution, ShapeResolution::Lenient);
        assert_eq!(config.global_matrix, Mat4::IDENTITY);
        assert!(!config.recenter_to_origin);

        let json = serde_json::to_string(&MesherConfig::default()).unwrap();
        assert_eq!(MesherConfig::from_json_str(&json).unwrap(), MesherConfig::default());

        assert!(MesherConfig::from_json_str("{").is_err());
    }
}

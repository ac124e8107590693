//! Per-block geometry generation.

use super::geometry::Fragment;
use crate::catalog::ShapeResolution;
use crate::design::Block;
use crate::error::Result;
use crate::types::{Orientation, OrientationFault};
use glam::{Mat3, Vec3};

const CENTER: Vec3 = Vec3::splat(0.5);

/// A non-fatal problem met while generating a block.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryWarning {
    /// Name of the mesh group the block belongs to.
    pub group: String,
    pub block_index: i32,
    pub orientation: Orientation,
    pub fault: OrientationFault,
}

impl std::fmt::Display for GeometryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} block {}: {} {}, left unrotated",
            self.group, self.block_index, self.fault, self.orientation
        )
    }
}

/// Generate the world-space polygon mesh of a block.
///
/// Orientation codes that do not decode leave the shape unrotated.
pub fn generate(block: &Block, policy: ShapeResolution) -> Result<Fragment> {
    generate_checked(block, policy).map(|(fragment, _)| fragment)
}

/// Like [`generate`], also returning the orientation fault if the block
/// was left unrotated.
pub fn generate_checked(
    block: &Block,
    policy: ShapeResolution,
) -> Result<(Fragment, Option<OrientationFault>)> {
    let shape = block.shape(policy)?.reference();

    let (rotation, fault) = match block.orientation.rotation() {
        Ok(rotation) => (rotation, None),
        Err(fault) => {
            tracing::warn!(
                block = block.index,
                look = block.orientation.look,
                up = block.orientation.up,
                "{fault}, generating block unrotated"
            );
            (Mat3::IDENTITY, Some(fault))
        }
    };

    // Negative extents mirror the shape and are kept as-is.
    let extent = block.upper - block.lower;
    let vertices = shape
        .vertices
        .iter()
        .map(|&p| {
            let rotated = rotation * (Vec3::from(p) - CENTER) + CENTER;
            (rotated * extent + block.lower).to_array()
        })
        .collect();

    let fragment = Fragment {
        vertices,
        faces: shape.faces.to_vec(),
        offsets: shape.offsets.to_vec(),
    };
    Ok((fragment, fault))
}

//! Design file parsing.
//!
//! This module turns the game's exported XML designs into typed, immutable
//! [`Ship`] and [`Turret`] values. Block type codes are stored raw and only
//! resolved to shapes when meshing.

pub mod block;
pub mod ship;
pub mod summary;
pub mod turret;
mod xml;

#[cfg(test)]
pub(crate) mod fixtures;

pub use block::Block;
pub use ship::Ship;
pub use summary::DesignSummary;
pub use turret::{PartKind, Turret, TurretPart};

use crate::error::{MesherError, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A parsed top-level design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Design {
    Ship(Ship),
    Turret(Turret),
}

impl Design {
    pub fn name(&self) -> &str {
        match self {
            Design::Ship(ship) => &ship.name,
            Design::Turret(turret) => &turret.name,
        }
    }

    /// Every block of the design. For ships these are the hull blocks; for
    /// turrets the blocks of all three parts.
    pub fn blocks(&self) -> Box<dyn Iterator<Item = &Block> + '_> {
        match self {
            Design::Ship(ship) => Box::new(ship.blocks.iter()),
            Design::Turret(turret) => Box::new(turret.parts().flat_map(|p| p.blocks.iter())),
        }
    }

    /// Every block with the offset it is placed at: zero for hull blocks,
    /// the part origin for turret blocks.
    pub fn placed_blocks(&self) -> Box<dyn Iterator<Item = (&Block, Vec3)> + '_> {
        match self {
            Design::Ship(ship) => Box::new(ship.blocks.iter().map(|b| (b, Vec3::ZERO))),
            Design::Turret(turret) => Box::new(
                turret
                    .parts()
                    .flat_map(|p| p.blocks.iter().map(move |b| (b, p.origin))),
            ),
        }
    }

    /// Parse a design document, dispatching on its root element.
    pub fn from_xml_str(xml: &str, name: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)?;
        let root = doc.root_element();

        match xml::tag(&root) {
            "ship_design" | "plan" => Ok(Design::Ship(Ship::from_xml(root, name)?)),
            "turret_design" | "turretDesign" => Ok(Design::Turret(Turret::from_xml(root, name)?)),
            other => Err(MesherError::InvalidFileFormat(other.to_string())),
        }
    }

    /// Read and parse a design file. The design is named after the file stem.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "design".to_string());
        let xml = std::fs::read_to_string(path)?;
        Self::from_xml_str(&xml, &name)
    }
}

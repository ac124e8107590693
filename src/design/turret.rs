//! Turret designs: three independently positioned parts plus muzzles.

use super::xml;
use super::Block;
use crate::error::{MesherError, Result};
use glam::Vec3;
use roxmltree::Node;
use serde::{Deserialize, Serialize};

/// Root tags accepted for a turret design.
pub const TURRET_TAGS: [&str; 2] = ["turret_design", "turretDesign"];

/// The three parts of a turret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    Base,
    Body,
    Barrel,
}

impl PartKind {
    pub const ALL: [PartKind; 3] = [PartKind::Base, PartKind::Body, PartKind::Barrel];

    /// Element tag of this part in a turret design.
    pub fn tag(&self) -> &'static str {
        match self {
            PartKind::Base => "base",
            PartKind::Body => "body",
            PartKind::Barrel => "barrel",
        }
    }
}

impl std::fmt::Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// One turret part: its blocks, positioned collectively at `origin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurretPart {
    pub part: PartKind,
    pub origin: Vec3,
    pub blocks: Vec<Block>,
}

impl TurretPart {
    pub fn empty(part: PartKind) -> Self {
        Self {
            part,
            origin: Vec3::ZERO,
            blocks: Vec::new(),
        }
    }

    /// Parse the `<base>`, `<body>` or `<barrel>` child of a turret element.
    ///
    /// Every `<item>` below the part element, at any depth, becomes a block.
    pub fn from_xml(turret: Node, part: PartKind) -> Result<Self> {
        let node = xml::require_child(&turret, part.tag())?;
        let origin = xml::parse_vec3(&node, ["px", "py", "pz"])?;
        let blocks = node
            .descendants()
            .filter(|n| n.is_element() && n.has_tag_name("item"))
            .map(Block::from_xml)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            part,
            origin,
            blocks,
        })
    }
}

/// A turret design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turret {
    pub name: String,
    pub size: f32,
    /// Coaxial turrets have no separate body or barrel motion. Meshing them
    /// is not implemented.
    pub coaxial: bool,
    /// Index of the block this turret is mounted on, `-1` if none.
    pub parent: i32,
    /// Shot color code.
    pub color: i32,
    pub base: TurretPart,
    pub body: TurretPart,
    pub barrel: TurretPart,
    pub muzzles: Vec<Vec3>,
}

impl Turret {
    pub fn part(&self, part: PartKind) -> &TurretPart {
        match part {
            PartKind::Base => &self.base,
            PartKind::Body => &self.body,
            PartKind::Barrel => &self.barrel,
        }
    }

    pub fn parts(&self) -> impl Iterator<Item = &TurretPart> {
        PartKind::ALL.into_iter().map(move |p| self.part(p))
    }

    pub fn block_count(&self) -> usize {
        self.parts().map(|p| p.blocks.len()).sum()
    }

    /// Parse a `<turret_design>` (or legacy `<turretDesign>`) element.
    ///
    /// Coaxial turrets parse, but their body and barrel may be absent and
    /// are then left empty.
    pub fn from_xml(node: Node, name: &str) -> Result<Self> {
        let tag = xml::tag(&node);
        if !TURRET_TAGS.contains(&tag) {
            return Err(MesherError::NotATurret(tag.to_string()));
        }

        let size = xml::parse_attr(&node, "size")?;
        let coaxial = node.attribute("coaxial") == Some("true");
        let color = xml::parse_attr(&node, "shot_color")?;
        let parent = xml::parse_attr_or(&node, "blockIndex", -1)?;

        let base = TurretPart::from_xml(node, PartKind::Base)?;
        let optional_part = |part: PartKind| -> Result<TurretPart> {
            if coaxial && xml::child_by_name(&node, part.tag()).is_none() {
                Ok(TurretPart::empty(part))
            } else {
                TurretPart::from_xml(node, part)
            }
        };
        let body = optional_part(PartKind::Body)?;
        let barrel = optional_part(PartKind::Barrel)?;

        let muzzles = node
            .descendants()
            .filter(|n| n.is_element() && n.has_tag_name("muzzlePosition"))
            .map(|n| xml::parse_vec3(&n, ["x", "y", "z"]))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: name.to_string(),
            size,
            coaxial,
            parent,
            color,
            base,
            body,
            barrel,
            muzzles,
        })
    }
}

//! Blocks: the placed units a design is made of.

use super::xml;
use crate::catalog::{
    resolve_category, resolve_material, resolve_shape, Category, Material, ShapeKey,
    ShapeResolution,
};
use crate::error::{MesherError, Result};
use crate::types::{BoundingBox, Color, Orientation};
use glam::Vec3;
use roxmltree::Node;
use serde::{Deserialize, Serialize};

/// One placed block.
///
/// `lower` and `upper` are opposite corners of the box the block's
/// reference shape is stretched to. They are not required to be ordered;
/// a negative extent mirrors the shape along that axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Design-local identifier.
    pub index: i32,
    /// Index of the logical parent block, `-1` if none.
    pub parent: i32,
    pub lower: Vec3,
    pub upper: Vec3,
    pub orientation: Orientation,
    /// Raw game type code, resolved through the shape and category tables.
    pub type_code: i32,
    /// Raw material code.
    pub material: i32,
    pub color: Color,
    pub secondary_color: Color,
}

impl Block {
    /// A plain iron cube block spanning `lower..upper` with default orientation.
    pub fn new(index: i32, lower: impl Into<Vec3>, upper: impl Into<Vec3>) -> Self {
        Self {
            index,
            parent: -1,
            lower: lower.into(),
            upper: upper.into(),
            orientation: Orientation::IDENTITY,
            type_code: 1,
            material: 0,
            color: Color::WHITE,
            secondary_color: Color::TRANSPARENT,
        }
    }

    pub fn with_type(mut self, type_code: i32) -> Self {
        self.type_code = type_code;
        self
    }

    pub fn with_orientation(mut self, look: i32, up: i32) -> Self {
        self.orientation = Orientation::new(look, up);
        self
    }

    pub fn with_material(mut self, material: i32) -> Self {
        self.material = material;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_parent(mut self, parent: i32) -> Self {
        self.parent = parent;
        self
    }

    pub fn shape(&self, policy: ShapeResolution) -> Result<ShapeKey> {
        resolve_shape(self.type_code, policy)
    }

    pub fn category(&self, policy: ShapeResolution) -> Result<Category> {
        resolve_category(self.type_code, policy)
    }

    pub fn material(&self) -> Result<&'static Material> {
        resolve_material(self.material)
    }

    /// Axis-aligned bounds with ordered corners.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(
            self.lower.min(self.upper).to_array(),
            self.lower.max(self.upper).to_array(),
        )
    }

    /// Parse an `<item>` element holding a nested `<block>` descriptor.
    ///
    /// The material code must resolve here. The type code is kept raw and
    /// only resolved when the block is meshed or summarized, so an unknown
    /// type does not fail parsing; see [`Block::shape`].
    pub fn from_xml(item: Node) -> Result<Self> {
        if xml::tag(&item) != "item" {
            return Err(MesherError::UnexpectedElement {
                expected: "item".to_string(),
                found: xml::tag(&item).to_string(),
            });
        }

        let index: i32 = xml::parse_attr(&item, "index")?;
        let malformed = |err: MesherError| MesherError::MalformedBlock {
            index,
            reason: err.to_string(),
        };

        let parent = xml::parse_attr_or(&item, "parent", -1).map_err(malformed)?;

        let descriptor = xml::child_by_name(&item, "block").ok_or_else(|| {
            MesherError::MalformedBlock {
                index,
                reason: "<item> does not contain a <block> element".to_string(),
            }
        })?;

        let lower = xml::parse_vec3(&descriptor, ["lx", "ly", "lz"]).map_err(malformed)?;
        let upper = xml::parse_vec3(&descriptor, ["ux", "uy", "uz"]).map_err(malformed)?;
        let look = xml::parse_attr(&descriptor, "look").map_err(malformed)?;
        let up = xml::parse_attr(&descriptor, "up").map_err(malformed)?;
        let type_code = xml::parse_attr(&descriptor, "index").map_err(malformed)?;
        let material = xml::parse_attr(&descriptor, "material").map_err(malformed)?;

        let color = xml::attr(&descriptor, "color")
            .and_then(Color::from_argb_hex)
            .map_err(malformed)?;
        let secondary_color = match descriptor.attribute("secondaryColor") {
            Some(raw) => Color::from_argb_hex(raw).map_err(malformed)?,
            None => Color::TRANSPARENT,
        };

        // Unknown materials fail the block; type codes are resolved at meshing time.
        resolve_material(material)?;

        Ok(Self {
            index,
            parent,
            lower,
            upper,
            orientation: Orientation::new(look, up),
            type_code,
            material,
            color,
            secondary_color,
        })
    }
}

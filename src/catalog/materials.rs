//! Material code → material lookup.

use crate::error::{MesherError, Result};
use crate::types::Color;
use serde::Serialize;

/// A block material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Material {
    pub index: i32,
    pub name: &'static str,
    /// Display color in HTML notation.
    pub color: &'static str,
}

impl Material {
    /// Display color as RGBA.
    pub fn display_color(&self) -> Color {
        // Table colors are constants, a parse failure means a typo above.
        Color::from_html(self.color).unwrap_or(Color::WHITE)
    }
}

pub const MATERIALS: [Material; 7] = [
    Material { index: 0, name: "Iron", color: "#ffb380" },
    Material { index: 1, name: "Titanium", color: "#ffffff" },
    Material { index: 2, name: "Naonite", color: "#4dff4d" },
    Material { index: 3, name: "Trinium", color: "#4d9aff" },
    Material { index: 4, name: "Xanion", color: "#ffff4d" },
    Material { index: 5, name: "Ogonite", color: "#ff8133" },
    Material { index: 6, name: "Avorion", color: "#ff2626" },
];

/// Look up a material by its code.
pub fn resolve_material(material_code: i32) -> Result<&'static Material> {
    MATERIALS
        .iter()
        .find(|m| m.index == material_code)
        .ok_or(MesherError::UnknownMaterial(material_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_material() {
        assert_eq!(resolve_material(0).unwrap().name, "Iron");
        assert_eq!(resolve_material(6).unwrap().name, "Avorion");
        assert!(matches!(resolve_material(7), Err(MesherError::UnknownMaterial(7))));
        assert!(resolve_material(-1).is_err());
    }

    #[test]
    fn test_material_colors_parse() {
        for material in MATERIALS.iter() {
            assert!(Color::from_html(material.color).is_ok(), "{}", material.name);
        }
        assert_eq!(
            resolve_material(0).unwrap().display_color(),
            Color::rgba(0xFF, 0xB3, 0x80, 0xFF)
        );
    }
}

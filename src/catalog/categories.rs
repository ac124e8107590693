//! Type code → display category lookup.
//!
//! Categories only group blocks for display; geometry never depends on
//! them.

use super::ShapeResolution;
use crate::error::{MesherError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    SmartHull,
    Hull,
    Armor,
    Crew,
    Glow,
    Glass,
    Reflector,
    Stone,
    Hologram,
    RichStone,
    SuperRichStone,
    Wreckage,
    Hardpoints,
    Propulsion,
    Systems,
    TheRest,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::SmartHull => "Smart Hull",
            Category::Hull => "Hull",
            Category::Armor => "Armor",
            Category::Crew => "Crew",
            Category::Glow => "Glow",
            Category::Glass => "Glass",
            Category::Reflector => "Reflector",
            Category::Stone => "Stone",
            Category::Hologram => "Hologram",
            Category::RichStone => "Rich Stone",
            Category::SuperRichStone => "Super Rich Stone",
            Category::Wreckage => "Wreckage",
            Category::Hardpoints => "Hardpoints",
            Category::Propulsion => "Propulsion",
            Category::Systems => "Systems",
            Category::TheRest => "The Rest",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub const CATEGORY_TABLE: [(Category, &[i32]); 16] = [
    (Category::SmartHull, &[1, 2, 100, 101, 102, 103, 108, 109, 112]),
    (Category::Hull, &[121, 122, 123, 124, 125, 126, 127, 128, 129]),
    (Category::Armor, &[8, 104, 105, 106, 107, 110, 111, 113]),
    (Category::Crew, &[6, 114, 115, 116, 117, 118, 119, 120]),
    (Category::Glow, &[150, 151, 152, 153, 154, 155, 156, 157]),
    (Category::Glass, &[170, 171, 172, 173, 174, 175, 176, 177]),
    (Category::Reflector, &[180, 181, 182, 184, 195, 196, 201]),
    (Category::Stone, &[4, 185, 186, 187, 188, 197, 198, 202]),
    (Category::Hologram, &[190, 191, 192, 193, 194, 199, 200, 203]),
    (Category::RichStone, &[510, 511, 512, 513, 514, 515, 516, 517]),
    (Category::SuperRichStone, &[520, 521, 522, 523, 524, 525, 526, 527]),
    (Category::Wreckage, &[700, 701, 702, 703, 704, 705, 706, 707]),
    // Rotation lock, edge, torpedo launcher, frontal, turret base, edge
    (Category::Hardpoints, &[12, 23, 18, 22, 20, 21]),
    // Engine, thruster, directional thruster, gyro, inertia dampener
    (Category::Propulsion, &[3, 7, 13, 14, 15]),
    // Shield, energy container, generator, integrity field, computer core, hyperspace core
    (Category::Systems, &[50, 51, 52, 53, 54, 55]),
    // Cargo, framework, hangar, dock, flight recorder, assembly, torpedo storage,
    // transporter, academy, cloning pods, solar panel, light, name, logo
    (
        Category::TheRest,
        &[5, 9, 10, 11, 16, 17, 19, 56, 57, 58, 60, 61, 600, 601, 650, 651],
    ),
];

static CATEGORIES_BY_CODE: LazyLock<HashMap<i32, Category>> = LazyLock::new(|| {
    CATEGORY_TABLE
        .iter()
        .flat_map(|(category, codes)| codes.iter().map(move |&code| (code, *category)))
        .collect()
});

/// Look up the display category of a block type code.
pub fn resolve_category(type_code: i32, policy: ShapeResolution) -> Result<Category> {
    match (CATEGORIES_BY_CODE.get(&type_code), policy) {
        (Some(category), _) => Ok(*category),
        (None, ShapeResolution::Lenient) => {
            tracing::warn!(type_code, "unknown block type, using category 'The Rest'");
            Ok(Category::TheRest)
        }
        (None, ShapeResolution::Strict) => Err(MesherError::UnknownCategory(type_code)),
    }
}

//! Per-design block statistics.

use super::Design;
use crate::catalog::{Category, ShapeResolution};
use crate::error::Result;
use crate::types::BoundingBox;
use serde::Serialize;
use std::collections::BTreeMap;

/// Block counts of a design, grouped for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DesignSummary {
    pub name: String,
    pub block_count: usize,
    pub turret_count: usize,
    pub by_category: BTreeMap<Category, usize>,
    /// Keyed by material name.
    pub by_material: BTreeMap<&'static str, usize>,
    /// Union of all block boxes as placed (turret parts at their origin),
    /// `None` for an empty design.
    pub bounds: Option<BoundingBox>,
}

impl DesignSummary {
    pub fn of(design: &Design, policy: ShapeResolution) -> Result<Self> {
        let mut summary = DesignSummary {
            name: design.name().to_string(),
            turret_count: match design {
                Design::Ship(ship) => ship.turrets.len(),
                Design::Turret(_) => 0,
            },
            ..Default::default()
        };

        for (block, offset) in design.placed_blocks() {
            summary.block_count += 1;
            *summary.by_category.entry(block.category(policy)?).or_default() += 1;
            *summary.by_material.entry(block.material()?.name).or_default() += 1;

            let bounds = block.bounds().translated(offset.to_array());
            summary.bounds = Some(match summary.bounds {
                Some(acc) => acc.union(&bounds),
                None => bounds,
            });
        }

        Ok(summary)
    }
}

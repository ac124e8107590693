//! Ship designs: a hull made of blocks, plus embedded turret designs.

use super::turret::TURRET_TAGS;
use super::xml;
use super::{Block, Turret};
use crate::error::{MesherError, Result};
use roxmltree::Node;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub name: String,
    /// Hull blocks, in document order.
    pub blocks: Vec<Block>,
    pub turrets: Vec<Turret>,
}

impl Ship {
    /// Parse a `<ship_design>` element, or a bare `<plan>` block list.
    ///
    /// Embedded turret designs are named `<name>_turret<k>`.
    pub fn from_xml(node: Node, name: &str) -> Result<Self> {
        let plan = match xml::tag(&node) {
            "ship_design" => xml::require_child(&node, "plan")?,
            "plan" => node,
            other => return Err(MesherError::NotAShipDesign(other.to_string())),
        };

        let blocks = xml::children_by_name(&plan, "item")
            .map(Block::from_xml)
            .collect::<Result<Vec<_>>>()?;

        let turrets = node
            .descendants()
            .filter(|n| n.is_element() && TURRET_TAGS.contains(&xml::tag(n)))
            .enumerate()
            .map(|(k, n)| Turret::from_xml(n, &format!("{name}_turret{k}")))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            ship = name,
            blocks = blocks.len(),
            turrets = turrets.len(),
            "parsed ship design"
        );

        Ok(Self {
            name: name.to_string(),
            blocks,
            turrets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::fixtures::{PLAN_XML, SHIP_XML};
    use glam::Vec3;

    #[test]
    fn test_parse_ship_design() {
        let doc = roxmltree::Document::parse(SHIP_XML).unwrap();
        let ship = Ship::from_xml(doc.root_element(), "frigate").unwrap();

        assert_eq!(ship.name, "frigate");
        assert_eq!(ship.blocks.len(), 3);
        assert_eq!(
            ship.blocks.iter().map(|b| b.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(ship.blocks[1].parent, 0);
        assert_eq!(ship.turrets.len(), 1);
        assert_eq!(ship.turrets[0].name, "frigate_turret0");
        assert_eq!(ship.turrets[0].parent, 1);
        // Turret blocks do not leak into the hull.
        assert_eq!(ship.turrets[0].base.blocks.len(), 1);
    }

    #[test]
    fn test_parse_bare_plan() {
        let doc = roxmltree::Document::parse(PLAN_XML).unwrap();
        let ship = Ship::from_xml(doc.root_element(), "plan").unwrap();
        assert_eq!(ship.blocks.len(), 1);
        assert!(ship.turrets.is_empty());
        assert_eq!(ship.blocks[0].upper, Vec3::new(2.0, 1.0, 1.0));
    }

    #[test]
    fn test_not_a_ship() {
        let doc = roxmltree::Document::parse(r#"<station/>"#).unwrap();
        let err = Ship::from_xml(doc.root_element(), "x").unwrap_err();
        assert!(matches!(err, MesherError::NotAShipDesign(ref tag) if tag == "station"));
    }

    #[test]
    fn test_malformed_item_aborts_the_ship() {
        let xml = r#"<plan>
            <item index="0" parent="-1">
              <block lx="0" ly="0" lz="0" ux="1" uy="1" uz="1" look="1" up="3" index="1" material="0" color="FFFFFFFF"/>
            </item>
            <item index="9" parent="0"/>
        </plan>"#;
        let doc = roxmltree::Document::parse(xml).unwrap();
        let err = Ship::from_xml(doc.root_element(), "x").unwrap_err();
        assert!(matches!(err, MesherError::MalformedBlock { index: 9, .. }));
    }
}

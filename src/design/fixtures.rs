//! Sample design documents shared by tests.

/// A turret with one base block, two body blocks, one barrel block and two muzzles.
pub(crate) const TURRET_XML: &str = r#"<turret_design size="1.5" coaxial="false" shot_color="3" blockIndex="12">
  <base px="0" py="0" pz="0">
    <plan>
      <item index="0" parent="-1">
        <block lx="0" ly="0" lz="0" ux="1" uy="1" uz="1" look="1" up="3" index="1" material="0" color="FFFF0000"/>
      </item>
    </plan>
  </base>
  <body px="0" py="1" pz="0">
    <plan>
      <item index="0" parent="-1">
        <block lx="0" ly="0" lz="0" ux="1" uy="0.5" uz="1" look="1" up="3" index="100" material="1" color="FF00FF00"/>
      </item>
      <item index="1" parent="0">
        <block lx="0" ly="0.5" lz="0" ux="1" uy="1" uz="1" look="1" up="3" index="1" material="1" color="FF00FF00"/>
      </item>
    </plan>
  </body>
  <barrel px="0" py="1.5" pz="0.5">
    <plan>
      <item index="0" parent="-1">
        <block lx="0.25" ly="0.25" lz="0" ux="0.75" uy="0.75" uz="3" look="1" up="3" index="1" material="2" color="FF0000FF"/>
      </item>
    </plan>
  </barrel>
  <muzzlePosition x="0.5" y="2" z="3"/>
  <muzzlePosition x="0.5" y="2" z="5"/>
</turret_design>"#;

/// A ship with three hull blocks and one embedded turret.
pub(crate) const SHIP_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ship_design>
  <plan accumulateHealth="true" convex="false">
    <item index="0" parent="-1">
      <block lx="0" ly="0" lz="0" ux="2" uy="1" uz="1" look="1" up="3" index="1" material="0" color="FF808080"/>
    </item>
    <item index="1" parent="0">
      <block lx="2" ly="0" lz="0" ux="3" uy="1" uz="1" look="1" up="3" index="100" material="1" color="FFFF0000" secondaryColor="FF00FF00"/>
    </item>
    <item index="2" parent="0">
      <block lx="0" ly="1" lz="0" ux="1" uy="2" uz="1" look="5" up="3" index="102" material="6" color="800000FF"/>
    </item>
  </plan>
  <turretDesign size="1" coaxial="false" shot_color="2" blockIndex="1">
    <base px="0" py="0" pz="0">
      <plan>
        <item index="0" parent="-1">
          <block lx="0" ly="0" lz="0" ux="1" uy="1" uz="1" look="1" up="3" index="1" material="0" color="FFFFFFFF"/>
        </item>
      </plan>
    </base>
    <body px="0" py="1" pz="0"/>
    <barrel px="0" py="1" pz="0"/>
  </turretDesign>
</ship_design>"#;

/// A bare block list with a single cube.
pub(crate) const PLAN_XML: &str = r#"<plan>
  <item index="0" parent="-1">
    <block lx="0" ly="0" lz="0" ux="2" uy="1" uz="1" look="0" up="2" index="1" material="0" color="FF808080"/>
  </item>
</plan>"#;

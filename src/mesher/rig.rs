//! Turret rig description.
//!
//! A turret animates with four bones: the base is fixed, `rotation` turns
//! the body, `elevation` tilts the barrel and `target` is a handle in front
//! of the muzzles the other bones track. Only the bone layout is produced
//! here; building the actual armature and constraints is up to the
//! consumer.

use crate::design::Turret;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Lowest barrel elevation, in degrees.
pub const MIN_ELEVATION_DEG: f32 = -85.0;
/// Highest barrel elevation, in degrees.
pub const MAX_ELEVATION_DEG: f32 = 15.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigBone {
    pub name: String,
    pub head: Vec3,
    pub tail: Vec3,
    /// Index of the parent bone in [`TurretRig::bones`].
    pub parent: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurretRig {
    /// Name of the turret the rig belongs to.
    pub name: String,
    /// `base`, `rotation`, `elevation` and `target`, in that order.
    pub bones: Vec<RigBone>,
    /// Barrel elevation range in radians.
    pub elevation_limits: (f32, f32),
}

impl TurretRig {
    pub const BASE: usize = 0;
    pub const ROTATION: usize = 1;
    pub const ELEVATION: usize = 2;
    pub const TARGET: usize = 3;

    /// Lay out the bones of a turret. Coaxial turrets have no rig.
    pub fn for_turret(turret: &Turret) -> Option<Self> {
        if turret.coaxial {
            return None;
        }

        let size = turret.size;
        let aim = if turret.muzzles.is_empty() {
            turret.barrel.origin
        } else {
            turret.muzzles.iter().copied().sum::<Vec3>() / turret.muzzles.len() as f32
        };

        let bone = |name: &str, head: Vec3, tail: Vec3, parent: Option<usize>| RigBone {
            name: name.to_string(),
            head,
            tail,
            parent,
        };

        let bones = vec![
            bone(
                "base",
                turret.base.origin,
                turret.base.origin + Vec3::new(0.0, 0.1, 0.0) * size,
                None,
            ),
            bone(
                "rotation",
                turret.body.origin,
                turret.body.origin + Vec3::new(0.0, 0.0, -0.1) * size,
                Some(Self::BASE),
            ),
            bone(
                "elevation",
                turret.barrel.origin,
                turret.barrel.origin + Vec3::new(0.0, 0.0, 0.1) * size,
                Some(Self::ROTATION),
            ),
            bone(
                "target",
                aim + Vec3::new(0.0, 0.0, 10.0) * size,
                aim + Vec3::new(0.0, 0.0, 11.0) * size,
                Some(Self::BASE),
            ),
        ];

        Some(Self {
            name: format!("{}.rig", turret.name),
            bones,
            elevation_limits: (
                MIN_ELEVATION_DEG.to_radians(),
                MAX_ELEVATION_DEG.to_radians(),
            ),
        })
    }

    pub fn bone(&self, index: usize) -> Option<&RigBone> {
        self.bones.get(index)
    }

    pub fn transform(&mut self, matrix: &Mat4) {
        for bone in &mut self.bones {
            bone.head = matrix.transform_point3(bone.head);
            bone.tail = matrix.transform_point3(bone.tail);
        }
    }

    pub fn translate(&mut self, offset: Vec3) {
        for bone in &mut self.bones {
            bone.head += offset;
            bone.tail += offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::fixtures::TURRET_XML;
    use crate::design::Design;

    fn turret() -> Turret {
        match Design::from_xml_str(TURRET_XML, "gun").unwrap() {
            Design::Turret(turret) => turret,
            Design::Ship(_) => unreachable!(),
        }
    }

    #[test]
    fn test_bone_layout() {
        let rig = TurretRig::for_turret(&turret()).unwrap();
        assert_eq!(rig.name, "gun.rig");
        let names: Vec<_> = rig.bones.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["base", "rotation", "elevation", "target"]);

        let base = rig.bone(TurretRig::BASE).unwrap();
        assert_eq!(base.head, Vec3::ZERO);
        assert_eq!(base.tail, Vec3::new(0.0, 0.15, 0.0));
        assert_eq!(base.parent, None);

        let rotation = rig.bone(TurretRig::ROTATION).unwrap();
        assert_eq!(rotation.head, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(rotation.parent, Some(TurretRig::BASE));

        let elevation = rig.bone(TurretRig::ELEVATION).unwrap();
        assert_eq!(elevation.head, Vec3::new(0.0, 1.5, 0.5));
        assert_eq!(elevation.parent, Some(TurretRig::ROTATION));
    }

    #[test]
    fn test_target_ahead_of_average_muzzle() {
        let rig = TurretRig::for_turret(&turret()).unwrap();
        let target = rig.bone(TurretRig::TARGET).unwrap();
        // Muzzles average to (0.5, 2, 4); size is 1.5.
        assert_eq!(target.head, Vec3::new(0.5, 2.0, 19.0));
        assert_eq!(target.tail, Vec3::new(0.5, 2.0, 20.5));
        assert_eq!(target.parent, Some(TurretRig::BASE));
    }

    #[test]
    fn test_target_without_muzzles() {
        let mut turret = turret();
        turret.muzzles.clear();
        let rig = TurretRig::for_turret(&turret).unwrap();
        assert_eq!(
            rig.bone(TurretRig::TARGET).unwrap().head,
            Vec3::new(0.0, 1.5, 15.5)
        );
    }

    #[test]
    fn test_coaxial_has_no_rig() {
        let mut turret = turret();
        turret.coaxial = true;
        assert!(TurretRig::for_turret(&turret).is_none());
    }

    #[test]
    fn test_limits_and_translate() {
        let mut rig = TurretRig::for_turret(&turret()).unwrap();
        assert!((rig.elevation_limits.0 + 85f32.to_radians()).abs() < 1e-6);
        assert!((rig.elevation_limits.1 - 15f32.to_radians()).abs() < 1e-6);

        rig.translate(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(rig.bones[0].head, Vec3::new(1.0, 0.0, 0.0));
    }
}

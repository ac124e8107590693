//! Type code → reference shape lookup.

use super::ShapeResolution;
use crate::error::{MesherError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// The eight reference shape families a block can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKey {
    Cube,
    Edge,
    Corner1,
    Corner2,
    Corner3,
    TwistedCorner1,
    TwistedCorner2,
    FlatCorner,
}

impl ShapeKey {
    pub const ALL: [ShapeKey; 8] = [
        ShapeKey::Cube,
        ShapeKey::Edge,
        ShapeKey::Corner1,
        ShapeKey::Corner2,
        ShapeKey::Corner3,
        ShapeKey::TwistedCorner1,
        ShapeKey::TwistedCorner2,
        ShapeKey::FlatCorner,
    ];

    /// Display name as used by the game.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKey::Cube => "Cube",
            ShapeKey::Edge => "Edge",
            ShapeKey::Corner1 => "Corner 1",
            ShapeKey::Corner2 => "Corner 2",
            ShapeKey::Corner3 => "Corner 3",
            ShapeKey::TwistedCorner1 => "Twisted Corner 1",
            ShapeKey::TwistedCorner2 => "Twisted Corner 2",
            ShapeKey::FlatCorner => "Flat Corner",
        }
    }
}

impl std::fmt::Display for ShapeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Type codes per shape, covering every material-independent variant
/// (plain, glass, hologram, stone tiers, wreckage, ...).
pub const SHAPE_TABLE: [(ShapeKey, &[i32]); 8] = [
    (
        ShapeKey::Cube,
        &[
            1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 22, 50, 51, 52,
            53, 54, 55, 56, 57, 58, 60, 61, 121, 122, 150, 170, 180, 190, 510, 520, 600, 650, 700,
        ],
    ),
    (
        ShapeKey::Edge,
        &[21, 23, 100, 104, 114, 123, 151, 171, 181, 185, 191, 511, 521, 601, 651, 701],
    ),
    (
        ShapeKey::Corner1,
        &[101, 105, 115, 124, 152, 172, 182, 186, 192, 512, 522, 702],
    ),
    (
        ShapeKey::Corner2,
        &[102, 106, 116, 125, 153, 173, 183, 187, 193, 513, 523, 703],
    ),
    (
        ShapeKey::Corner3,
        &[103, 107, 117, 126, 154, 174, 184, 188, 194, 514, 524, 704],
    ),
    (
        ShapeKey::TwistedCorner1,
        &[108, 110, 118, 128, 155, 175, 195, 197, 199, 515, 525, 705],
    ),
    (
        ShapeKey::TwistedCorner2,
        &[109, 111, 119, 129, 156, 176, 196, 198, 200, 516, 526, 706],
    ),
    (
        ShapeKey::FlatCorner,
        &[112, 113, 120, 127, 157, 177, 201, 202, 203, 517, 527, 707],
    ),
];

static SHAPES_BY_CODE: LazyLock<HashMap<i32, ShapeKey>> = LazyLock::new(|| {
    SHAPE_TABLE
        .iter()
        .flat_map(|(key, codes)| codes.iter().map(move |&code| (code, *key)))
        .collect()
});

/// Look up the shape of a block type code.
pub fn resolve_shape(type_code: i32, policy: ShapeResolution) -> Result<ShapeKey> {
    match (SHAPES_BY_CODE.get(&type_code), policy) {
        (Some(key), _) => Ok(*key),
        (None, ShapeResolution::Lenient) => {
            tracing::warn!(type_code, "unknown block type, using Cube");
            Ok(ShapeKey::Cube)
        }
        (None, ShapeResolution::Strict) => Err(MesherError::UnknownShape(type_code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_shape_table_is_disjoint() {
        let mut seen = HashSet::new();
        for (key, codes) in SHAPE_TABLE.iter() {
            for code in codes.iter() {
                assert!(seen.insert(*code), "type {code} listed twice (again under {key})");
            }
        }
        assert_eq!(seen.len(), SHAPES_BY_CODE.len());
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(resolve_shape(1, ShapeResolution::Strict).unwrap(), ShapeKey::Cube);
        assert_eq!(resolve_shape(100, ShapeResolution::Strict).unwrap(), ShapeKey::Edge);
        assert_eq!(resolve_shape(101, ShapeResolution::Strict).unwrap(), ShapeKey::Corner1);
        assert_eq!(resolve_shape(183, ShapeResolution::Strict).unwrap(), ShapeKey::Corner2);
        assert_eq!(resolve_shape(194, ShapeResolution::Strict).unwrap(), ShapeKey::Corner3);
        assert_eq!(
            resolve_shape(705, ShapeResolution::Strict).unwrap(),
            ShapeKey::TwistedCorner1
        );
        assert_eq!(
            resolve_shape(156, ShapeResolution::Strict).unwrap(),
            ShapeKey::TwistedCorner2
        );
        assert_eq!(resolve_shape(527, ShapeResolution::Strict).unwrap(), ShapeKey::FlatCorner);
    }

    #[test]
    fn test_unknown_code_strict() {
        for _ in 0..3 {
            match resolve_shape(99999, ShapeResolution::Strict) {
                Err(MesherError::UnknownShape(99999)) => {}
                other => panic!("unexpected result: {other:?}"),
            }
        }
        assert!(resolve_shape(0, ShapeResolution::Strict).is_err());
        assert!(resolve_shape(-1, ShapeResolution::Strict).is_err());
    }

    #[test]
    fn test_unknown_code_lenient() {
        for _ in 0..3 {
            assert_eq!(
                resolve_shape(99999, ShapeResolution::Lenient).unwrap(),
                ShapeKey::Cube
            );
        }
        // Known codes are unaffected by the policy.
        assert_eq!(resolve_shape(21, ShapeResolution::Lenient).unwrap(), ShapeKey::Edge);
    }
}

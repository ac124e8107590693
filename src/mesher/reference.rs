//! The eight reference polyhedra blocks are stretched from.
//!
//! Every shape lives in the unit cube `[0,1]^3`. Faces are listed as flat
//! vertex-index loops with a matching vertex count per face.

use crate::catalog::ShapeKey;

/// A constant polyhedron in the unit cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceShape {
    pub name: &'static str,
    pub vertices: &'static [[f32; 3]],
    pub faces: &'static [u32],
    pub offsets: &'static [u32],
}

pub const HEXAHEDRON: ReferenceShape = ReferenceShape {
    name: "hexahedron",
    vertices: &[
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 1.0, 1.0],
        [1.0, 1.0, 1.0],
        [1.0, 1.0, 0.0],
    ],
    faces: &[
        0, 3, 2, 1, //
        4, 5, 6, 7, //
        0, 1, 5, 4, //
        2, 3, 7, 6, //
        1, 2, 6, 5, //
        0, 4, 7, 3,
    ],
    offsets: &[4, 4, 4, 4, 4, 4],
};

pub const WEDGE: ReferenceShape = ReferenceShape {
    name: "wedge",
    vertices: &[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
        [1.0, 1.0, 1.0],
    ],
    faces: &[
        0, 1, 2, 3, //
        0, 3, 5, 4, //
        1, 4, 5, 2, //
        2, 5, 3, //
        0, 4, 1,
    ],
    offsets: &[4, 4, 4, 3, 3],
};

const PYRAMID_FACES: &[u32] = &[
    0, 3, 2, 1, //
    0, 1, 4, //
    0, 4, 3, //
    1, 2, 4, //
    2, 3, 4,
];

pub const PYRAMID_1: ReferenceShape = ReferenceShape {
    name: "pyramid_1",
    vertices: &[
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
    ],
    faces: PYRAMID_FACES,
    offsets: &[4, 3, 3, 3, 3],
};

pub const PYRAMID_2: ReferenceShape = ReferenceShape {
    name: "pyramid_2",
    vertices: &[
        [0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
    ],
    faces: PYRAMID_FACES,
    offsets: &[4, 3, 3, 3, 3],
};

pub const TETRAHEDRON_1: ReferenceShape = ReferenceShape {
    name: "tetrahedron_1",
    vertices: &[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
    ],
    faces: &[
        0, 2, 1, //
        0, 2, 3, //
        0, 3, 1, //
        1, 3, 2,
    ],
    offsets: &[3, 3, 3, 3],
};

const TWISTED_FACES: &[u32] = &[
    0, 1, 3, //
    0, 2, 1, //
    0, 3, 2, //
    1, 2, 3,
];

pub const TETRAHEDRON_2: ReferenceShape = ReferenceShape {
    name: "tetrahedron_2",
    vertices: &[
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [0.0, 1.0, 0.0],
    ],
    faces: TWISTED_FACES,
    offsets: &[3, 3, 3, 3],
};

pub const TETRAHEDRON_3: ReferenceShape = ReferenceShape {
    name: "tetrahedron_3",
    vertices: &[
        [1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
    ],
    faces: TWISTED_FACES,
    offsets: &[3, 3, 3, 3],
};

pub const POLYHEDRON: ReferenceShape = ReferenceShape {
    name: "polyhedron",
    vertices: &[
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 1.0],
        [1.0, 1.0, 0.0],
    ],
    faces: &[
        0, 3, 2, 1, //
        0, 4, 6, 3, //
        2, 3, 6, 5, //
        0, 1, 4, //
        1, 2, 5, //
        4, 5, 6, //
        1, 5, 4,
    ],
    offsets: &[4, 4, 4, 3, 3, 3, 3],
};

impl ShapeKey {
    /// The reference polyhedron generated for this shape.
    pub fn reference(&self) -> &'static ReferenceShape {
        match self {
            ShapeKey::Cube => &HEXAHEDRON,
            ShapeKey::Edge => &WEDGE,
            ShapeKey::Corner1 => &TETRAHEDRON_1,
            ShapeKey::Corner2 => &POLYHEDRON,
            ShapeKey::Corner3 => &PYRAMID_1,
            ShapeKey::FlatCorner => &PYRAMID_2,
            ShapeKey::TwistedCorner1 => &TETRAHEDRON_2,
            ShapeKey::TwistedCorner2 => &TETRAHEDRON_3,
        }
    }
}

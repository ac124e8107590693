//! Shared types used throughout the library.

mod color;
mod direction;
mod orientation;

pub use color::Color;
pub use direction::{axis_conversion, SignedAxis};
pub use orientation::{Orientation, OrientationFault};

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl BoundingBox {
    pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: impl Iterator<Item = [f32; 3]>) -> Option<Self> {
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        let mut has_points = false;

        for p in points {
            has_points = true;
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }

        if has_points {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let mut out = *self;
        for i in 0..3 {
            out.min[i] = out.min[i].min(other.min[i]);
            out.max[i] = out.max[i].max(other.max[i]);
        }
        out
    }

    /// The same box moved by `offset`.
    pub fn translated(&self, offset: [f32; 3]) -> BoundingBox {
        let offset = Vec3::from(offset);
        BoundingBox::new(
            (Vec3::from(self.min) + offset).to_array(),
            (Vec3::from(self.max) + offset).to_array(),
        )
    }

    pub fn dimensions(&self) -> [f32; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    pub fn center(&self) -> [f32; 3] {
        ((Vec3::from(self.min) + Vec3::from(self.max)) * 0.5).to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        let bounds = BoundingBox::from_points(
            [[0.0, 1.0, -2.0], [3.0, -1.0, 2.0], [1.0, 0.0, 0.0]].into_iter(),
        )
        .unwrap();
        assert_eq!(bounds.min, [0.0, -1.0, -2.0]);
        assert_eq!(bounds.max, [3.0, 1.0, 2.0]);
        assert_eq!(bounds.dimensions(), [3.0, 2.0, 4.0]);
        assert_eq!(bounds.center(), [1.5, 0.0, 0.0]);
    }

    #[test]
    fn test_bounds_empty_and_union() {
        assert!(BoundingBox::from_points(std::iter::empty()).is_none());

        let a = BoundingBox::new([0.0; 3], [1.0; 3]);
        let b = BoundingBox::new([-1.0, 0.5, 0.5], [0.5, 2.0, 0.5]);
        let u = a.union(&b);
        assert_eq!(u.min, [-1.0, 0.0, 0.0]);
        assert_eq!(u.max, [1.0, 2.0, 1.0]);

        let moved = a.translated([0.0, 1.5, -1.0]);
        assert_eq!(moved.min, [0.0, 1.5, -1.0]);
        assert_eq!(moved.max, [1.0, 2.5, 0.0]);
    }
}

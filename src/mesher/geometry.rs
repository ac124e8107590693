//! Polygon mesh fragments.

use crate::types::BoundingBox;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// An indexed polygon mesh.
///
/// `faces` is the flat list of vertex indices of all polygons, and
/// `offsets[n]` is the number of vertices of polygon `n`. A well-formed
/// fragment satisfies `sum(offsets) == faces.len()` and every index is
/// below `vertices.len()`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Vertex positions.
    pub vertices: Vec<[f32; 3]>,
    /// Polygon vertex indices, polygons back to back.
    pub faces: Vec<u32>,
    /// Vertex count per polygon.
    pub offsets: Vec<u32>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the fragment has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of polygons.
    pub fn face_count(&self) -> usize {
        self.offsets.len()
    }

    /// Check the offset and index invariants.
    pub fn is_well_formed(&self) -> bool {
        let total: usize = self.offsets.iter().map(|&n| n as usize).sum();
        total == self.faces.len()
            && self
                .faces
                .iter()
                .all(|&i| (i as usize) < self.vertices.len())
    }

    /// Index into `faces` where each polygon starts.
    pub fn loop_starts(&self) -> Vec<u32> {
        self.offsets
            .iter()
            .scan(0u32, |start, &count| {
                let current = *start;
                *start += count;
                Some(current)
            })
            .collect()
    }

    /// Iterate polygons as slices of vertex indices.
    pub fn polygons(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.offsets.iter().scan(0usize, |start, &count| {
            let begin = *start;
            *start += count as usize;
            self.faces.get(begin..*start)
        })
    }

    /// Translate all vertices by an offset.
    pub fn translate(&mut self, offset: [f32; 3]) {
        for vertex in &mut self.vertices {
            vertex[0] += offset[0];
            vertex[1] += offset[1];
            vertex[2] += offset[2];
        }
    }

    /// Transform all vertices as points.
    pub fn transform(&mut self, matrix: &Mat4) {
        for vertex in &mut self.vertices {
            *vertex = matrix.transform_point3(Vec3::from(*vertex)).to_array();
        }
    }

    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.vertices.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_and_triangle() -> Fragment {
        Fragment {
            vertices: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.5, 0.5, 1.0],
            ],
            faces: vec![0, 1, 2, 3, 0, 1, 4],
            offsets: vec![4, 3],
        }
    }

    #[test]
    fn test_fragment_invariants() {
        let fragment = quad_and_triangle();
        assert!(fragment.is_well_formed());
        assert_eq!(fragment.face_count(), 2);
        assert_eq!(fragment.loop_starts(), vec![0, 4]);

        let polygons: Vec<&[u32]> = fragment.polygons().collect();
        assert_eq!(polygons, vec![&[0, 1, 2, 3][..], &[0, 1, 4][..]]);

        let mut broken = fragment.clone();
        broken.faces.push(9);
        assert!(!broken.is_well_formed());
    }

    #[test]
    fn test_translate_and_transform() {
        let mut fragment = quad_and_triangle();
        fragment.translate([1.0, 2.0, 3.0]);
        assert_eq!(fragment.vertices[0], [1.0, 2.0, 3.0]);

        fragment.transform(&Mat4::from_scale(Vec3::splat(2.0)));
        assert_eq!(fragment.vertices[0], [2.0, 4.0, 6.0]);

        let bounds = fragment.bounds().unwrap();
        assert_eq!(bounds.min, [2.0, 4.0, 6.0]);
        assert_eq!(bounds.max, [4.0, 6.0, 8.0]);
    }
}

//! Joining fragments into one mesh.

use super::geometry::Fragment;

/// Running state of a concatenation.
#[derive(Debug, Default)]
struct Accumulator {
    fragment: Fragment,
    face_counts: Vec<usize>,
    vertex_count: u32,
}

impl Accumulator {
    fn push(mut self, next: &Fragment) -> Self {
        let base = self.vertex_count;
        self.fragment.vertices.extend_from_slice(&next.vertices);
        self.fragment
            .faces
            .extend(next.faces.iter().map(|&index| index + base));
        self.fragment.offsets.extend_from_slice(&next.offsets);
        self.face_counts.push(next.offsets.len());
        self.vertex_count += next.vertices.len() as u32;
        self
    }
}

/// Concatenate fragments in order, rebasing each fragment's face indices
/// past the vertices already appended.
///
/// Also returns the number of faces each input contributed, so per-fragment
/// attributes can be repeated over the right faces.
pub fn concatenate<'a>(
    fragments: impl IntoIterator<Item = &'a Fragment>,
) -> (Fragment, Vec<usize>) {
    let acc = fragments
        .into_iter()
        .fold(Accumulator::default(), Accumulator::push);
    (acc.fragment, acc.face_counts)
}

/// Repeat one value per fragment over that fragment's faces.
pub fn per_face<T: Clone>(values: &[T], face_counts: &[usize]) -> Vec<T> {
    values
        .iter()
        .zip(face_counts)
        .flat_map(|(value, &count)| std::iter::repeat(value.clone()).take(count))
        .collect()
}

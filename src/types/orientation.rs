//! Block orientation codes and their rotation matrices.
//!
//! A block stores two codes in `0..=5`, `look` and `up`. Each code names a
//! signed world axis: `code / 2` is the axis (0 = X, 1 = Y, 2 = Z) and the
//! low bit is the sign (0 = negative, 1 = positive). The reference shape's
//! local X axis is mapped onto `look`, its local Y axis onto `up`, and the
//! local Z axis onto whichever signed axis completes a right-handed frame.

use super::SignedAxis;
use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason an orientation has no rotation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationFault {
    /// A code lies outside `0..=5`.
    OutOfRange,
    /// `look` and `up` name the same axis.
    Degenerate,
}

impl fmt::Display for OrientationFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrientationFault::OutOfRange => write!(f, "orientation code out of range 0..=5"),
            OrientationFault::Degenerate => write!(f, "look and up share an axis"),
        }
    }
}

/// The `(look, up)` orientation pair of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orientation {
    pub look: i32,
    pub up: i32,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Orientation {
    /// Look along +X with +Y up: the unrotated reference frame.
    pub const IDENTITY: Orientation = Orientation { look: 1, up: 3 };

    pub fn new(look: i32, up: i32) -> Self {
        Self { look, up }
    }

    /// All 24 orientations that decode to a rotation.
    pub fn all_valid() -> impl Iterator<Item = Orientation> {
        (0..6).flat_map(|look| {
            (0..6)
                .map(move |up| Orientation { look, up })
                .filter(|o| o.look / 2 != o.up / 2)
        })
    }

    /// Signed axis the reference shape's local X maps to.
    pub fn look_axis(&self) -> Option<SignedAxis> {
        SignedAxis::from_code(self.look)
    }

    /// Signed axis the reference shape's local Y maps to.
    pub fn up_axis(&self) -> Option<SignedAxis> {
        SignedAxis::from_code(self.up)
    }

    /// Check that both codes are in range and name distinct axes.
    pub fn validate(&self) -> Result<(), OrientationFault> {
        if !(0..6).contains(&self.look) || !(0..6).contains(&self.up) {
            return Err(OrientationFault::OutOfRange);
        }
        if self.look / 2 == self.up / 2 {
            return Err(OrientationFault::Degenerate);
        }
        Ok(())
    }

    /// Decode into a proper rotation matrix.
    ///
    /// With `i = look / 2`, `j = up / 2`, `k = 3 - i - j` and signs
    /// `u`, `v` taken from the low bits, the matrix has `R[i][0] = u`,
    /// `R[j][1] = v` and `R[k][2] = u * v * s(i < j) * s(k != 1)`, where
    /// `s(b)` is `+1` for true and `-1` for false. Every other entry is 0.
    pub fn rotation(&self) -> Result<Mat3, OrientationFault> {
        self.validate()?;

        let sign = |b: bool| if b { 1.0f32 } else { -1.0 };

        let i = (self.look / 2) as usize;
        let j = (self.up / 2) as usize;
        let k = 3 - i - j;
        let u = sign(self.look % 2 == 1);
        let v = sign(self.up % 2 == 1);
        let w = u * v * sign(i < j) * sign(k != 1);

        let mut cols = [Vec3::ZERO; 3];
        cols[0][i] = u;
        cols[1][j] = v;
        cols[2][k] = w;

        Ok(Mat3::from_cols(cols[0], cols[1], cols[2]))
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(look={}, up={})", self.look, self.up)
    }
}

//! Signed world axes and axis-convention conversion.

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

/// One of the six signed coordinate axes.
///
/// Declaration order matches the orientation code order used by design
/// files: code `2 * axis + 1` is positive, `2 * axis` is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignedAxis {
    #[serde(rename = "-x")]
    NegX,
    #[serde(rename = "x")]
    PosX,
    #[serde(rename = "-y")]
    NegY,
    #[serde(rename = "y")]
    PosY,
    #[serde(rename = "-z")]
    NegZ,
    #[serde(rename = "z")]
    PosZ,
}

impl SignedAxis {
    /// All six axes in orientation code order.
    pub const ALL: [SignedAxis; 6] = [
        SignedAxis::NegX,
        SignedAxis::PosX,
        SignedAxis::NegY,
        SignedAxis::PosY,
        SignedAxis::NegZ,
        SignedAxis::PosZ,
    ];

    /// Decode an orientation code (`0..=5`).
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code).ok().and_then(|c| Self::ALL.get(c).copied())
    }

    /// The orientation code for this axis.
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Axis index, 0 = X, 1 = Y, 2 = Z.
    pub fn index(&self) -> usize {
        (*self as usize) / 2
    }

    pub fn is_positive(&self) -> bool {
        (*self as usize) % 2 == 1
    }

    /// Get the unit vector for this axis.
    pub fn unit_vector(&self) -> [f32; 3] {
        match self {
            SignedAxis::NegX => [-1.0, 0.0, 0.0],
            SignedAxis::PosX => [1.0, 0.0, 0.0],
            SignedAxis::NegY => [0.0, -1.0, 0.0],
            SignedAxis::PosY => [0.0, 1.0, 0.0],
            SignedAxis::NegZ => [0.0, 0.0, -1.0],
            SignedAxis::PosZ => [0.0, 0.0, 1.0],
        }
    }

    /// Parse from string (case-insensitive), e.g. `"x"`, `"+Y"`, `"-z"`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "x" | "+x" => Some(SignedAxis::PosX),
            "-x" => Some(SignedAxis::NegX),
            "y" | "+y" => Some(SignedAxis::PosY),
            "-y" => Some(SignedAxis::NegY),
            "z" | "+z" => Some(SignedAxis::PosZ),
            "-z" => Some(SignedAxis::NegZ),
            _ => None,
        }
    }
}

impl std::fmt::Display for SignedAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignedAxis::NegX => write!(f, "-x"),
            SignedAxis::PosX => write!(f, "x"),
            SignedAxis::NegY => write!(f, "-y"),
            SignedAxis::PosY => write!(f, "y"),
            SignedAxis::NegZ => write!(f, "-z"),
            SignedAxis::PosZ => write!(f, "z"),
        }
    }
}

/// Rotation taking a `(forward, up)` axis convention to another one.
///
/// The returned matrix maps `from_forward` onto `to_forward` and `from_up`
/// onto `to_up`. Returns `None` when either pair shares an axis.
pub fn axis_conversion(
    from_forward: SignedAxis,
    from_up: SignedAxis,
    to_forward: SignedAxis,
    to_up: SignedAxis,
) -> Option<Mat3> {
    if from_forward.index() == from_up.index() || to_forward.index() == to_up.index() {
        return None;
    }

    let frame = |forward: SignedAxis, up: SignedAxis| {
        let f = Vec3::from(forward.unit_vector());
        let u = Vec3::from(up.unit_vector());
        Mat3::from_cols(f, u, f.cross(u))
    };

    // Frames are orthonormal, so the inverse is the transpose.
    Some(frame(to_forward, to_up) * frame(from_forward, from_up).transpose())
}

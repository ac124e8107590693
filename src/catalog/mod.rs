//! Static block tables.
//!
//! Design files identify block shapes and materials by integer codes. This
//! module maps type codes to reference shapes and display categories, and
//! material codes to materials. The tables are read-only and built on
//! first use.

pub mod categories;
pub mod materials;
pub mod shapes;

pub use categories::{resolve_category, Category};
pub use materials::{resolve_material, Material, MATERIALS};
pub use shapes::{resolve_shape, ShapeKey};

use serde::{Deserialize, Serialize};

/// What to do with a type code that no table lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeResolution {
    /// Fail with an unknown-shape or unknown-category error.
    #[default]
    Strict,
    /// Fall back to [`ShapeKey::Cube`] and [`Category::TheRest`].
    Lenient,
}

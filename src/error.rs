//! Error types for the design mesher.

use thiserror::Error;

/// Result type alias using MesherError.
pub type Result<T> = std::result::Result<T, MesherError>;

/// Broad classification of a [`MesherError`].
///
/// Lets callers tell malformed input apart from unsupported designs when
/// reporting to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or unexpected XML structure.
    Parse,
    /// A type, category or material code that no table knows.
    Lookup,
    /// A valid design using a feature that is not implemented.
    Unsupported,
    /// Reading or writing files.
    Io,
    /// Encoding a mesh into an output format.
    Export,
}

/// Main error type for design parsing and meshing.
#[derive(Error, Debug)]
pub enum MesherError {
    /// The document is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read or write JSON data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required child element is absent.
    #[error("<{parent}> is missing required element <{element}>")]
    MissingElement { parent: String, element: String },

    /// A required attribute is absent.
    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    /// An attribute is present but does not parse as the expected type.
    #[error("<{element}> attribute '{attribute}' has invalid value '{value}'")]
    InvalidAttribute {
        element: String,
        attribute: String,
        value: String,
    },

    /// An element has a different tag than the parser expects.
    #[error("expected <{expected}>, found <{found}>")]
    UnexpectedElement { expected: String, found: String },

    /// An `<item>` could not be turned into a block.
    #[error("malformed block (item index {index}): {reason}")]
    MalformedBlock { index: i32, reason: String },

    /// The element handed to the turret parser is not a turret design.
    #[error("not a turret: found <{0}>")]
    NotATurret(String),

    /// The element handed to the ship parser is not a ship design.
    #[error("not a ship design: found <{0}>")]
    NotAShipDesign(String),

    /// The document root is neither a ship nor a turret design.
    #[error("invalid file format: unsupported root element <{0}>")]
    InvalidFileFormat(String),

    /// Block type code with no reference shape.
    #[error("unresolvable shape for type index {0}")]
    UnknownShape(i32),

    /// Block type code with no display category.
    #[error("unresolvable category for type index {0}")]
    UnknownCategory(i32),

    /// Material code outside the material table.
    #[error("unknown material index {0}")]
    UnknownMaterial(i32),

    /// A color attribute that is not a hex color.
    #[error("invalid hex color '{0}'")]
    InvalidColor(String),

    /// The design uses a feature this crate does not implement.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// Writing text output failed.
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Failed to export mesh.
    #[error("Export error: {0}")]
    Export(String),
}

impl MesherError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MesherError::Xml(_)
            | MesherError::MissingElement { .. }
            | MesherError::MissingAttribute { .. }
            | MesherError::InvalidAttribute { .. }
            | MesherError::UnexpectedElement { .. }
            | MesherError::MalformedBlock { .. }
            | MesherError::NotATurret(_)
            | MesherError::NotAShipDesign(_)
            | MesherError::InvalidFileFormat(_)
            | MesherError::InvalidColor(_) => ErrorKind::Parse,
            MesherError::UnknownShape(_)
            | MesherError::UnknownCategory(_)
            | MesherError::UnknownMaterial(_) => ErrorKind::Lookup,
            MesherError::NotImplemented(_) => ErrorKind::Unsupported,
            MesherError::Io(_) => ErrorKind::Io,
            MesherError::Json(_) | MesherError::Fmt(_) | MesherError::Export(_) => {
                ErrorKind::Export
            }
        }
    }
}

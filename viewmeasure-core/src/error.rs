//! Error types for viewmeasure

use std::fmt;
use thiserror::Error;

/// Why a selection could not be turned into a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// More than two objects selected while area calculation is off
    TooManyObjects,
    /// The selection only maps to an area query, but area calculation is off
    AreaDisabled,
    /// Area requested on an edit-mode selection without any selected face
    NoSelectedFaces,
    /// None of the selected objects carries mesh data
    NoMeshObjects,
    /// Edit mode without an active mesh object
    NotMeshEditMode,
    /// The host is not in object or mesh edit mode
    UnsupportedMode,
}

impl fmt::Display for UnsupportedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::TooManyObjects => "more than two objects selected",
            Self::AreaDisabled => "area calculation is disabled",
            Self::NoSelectedFaces => "no faces selected",
            Self::NoMeshObjects => "no mesh objects selected",
            Self::NotMeshEditMode => "active object is not an editable mesh",
            Self::UnsupportedMode => "interaction mode is not supported",
        };
        f.write_str(text)
    }
}

/// Main error type for viewmeasure operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Selection not supported: {0}")]
    Unsupported(UnsupportedReason),

    #[error("Object '{name}' has no mesh data")]
    NotAMesh { name: String },

    #[error("Transform is not invertible")]
    DegenerateTransform,

    #[error("Invalid face {face}: {reason}")]
    InvalidFace { face: usize, reason: String },

    #[error("Non-finite input: {0}")]
    NonFiniteInput(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl Error {
    /// Create an invalid face error
    pub fn invalid_face(face: usize, reason: impl Into<String>) -> Self {
        Self::InvalidFace {
            face,
            reason: reason.into(),
        }
    }

    /// Whether this error only means "nothing to show" for the host
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_) | Self::NotAMesh { .. })
    }
}

/// Result type alias for viewmeasure operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Unsupported(UnsupportedReason::TooManyObjects);
        assert!(err.to_string().contains("more than two objects"));

        let err = Error::NotAMesh { name: "Camera".to_string() };
        assert!(err.to_string().contains("Camera"));

        let err = Error::invalid_face(7, "vertex index 12 out of range");
        assert!(err.to_string().contains("face 7"));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_unsupported_classification() {
        assert!(Error::Unsupported(UnsupportedReason::AreaDisabled).is_unsupported());
        assert!(Error::NotAMesh { name: "Lamp".into() }.is_unsupported());
        assert!(!Error::DegenerateTransform.is_unsupported());
        assert!(!Error::invalid_face(0, "bad").is_unsupported());
    }
}

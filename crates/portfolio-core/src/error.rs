//! Error type for submission construction.
//!
//! The factory is the only fallible operation in this crate, so [`Error`]
//! only covers the two ways it can reject its input. An empty or missing
//! project kind is not an error; see [`crate::ProjectFactory::create`].

use crate::kind::ProjectKind;

/// Failure modes of [`crate::ProjectFactory`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The kind tag is non-empty but names no known project type.
    #[error("Unsupported project type: {0}")]
    UnsupportedProjectType(String),

    /// A parameter does not have the shape the matched variant needs.
    #[error("Invalid parameter [{kind} {slot}]: expected {expected}, found {found}")]
    InvalidParameter {
        /// Variant being constructed.
        kind: ProjectKind,
        /// Which parameter was rejected (`param1` or `param2`).
        slot: &'static str,
        /// Human-readable description of the accepted shape.
        expected: &'static str,
        /// What was supplied instead.
        found: String,
    },
}

impl Error {
    /// Convenience constructor for [`Error::InvalidParameter`].
    pub fn invalid_parameter(
        kind: ProjectKind,
        slot: &'static str,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Error::InvalidParameter {
            kind,
            slot,
            expected,
            found: found.into(),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

//! Loosely-typed factory parameters.
//!
//! Gallery entries arrive from hard-coded data or a configuration file, so
//! the two variant-specific parameters are not typed until the factory has
//! matched the project kind. [`Param`] carries whatever scalar was supplied
//! and lets the factory reject the wrong shape explicitly.

use serde::{Deserialize, Serialize};

/// A scalar parameter of unknown intent.
///
/// Deserializes untagged, so `180` becomes [`Param::Int`] and `"4K"` becomes
/// [`Param::Text`]. A parameter that was not supplied at all is `None` at the
/// use site rather than a variant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Param {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Param {
    /// Name of the shape, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Text(_) => "string",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

/// Shape name for an optional parameter; absent is reported as `nothing`.
pub fn shape_of(param: Option<&Param>) -> &'static str {
    param.map_or("nothing", Param::type_name)
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Param {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Param {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Param {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

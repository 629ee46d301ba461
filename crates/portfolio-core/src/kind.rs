//! Project kind tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The closed set of submission kinds the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Video,
    Image,
    Motion,
}

impl ProjectKind {
    /// All kinds, in tag order.
    pub const ALL: [ProjectKind; 3] = [Self::Video, Self::Image, Self::Motion];

    /// Canonical upper-case tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Video => "VIDEO",
            Self::Image => "IMAGE",
            Self::Motion => "MOTION",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ProjectKind {
    type Err = Error;

    /// Case-insensitive match against the canonical tags. The input is not
    /// trimmed, and the error carries the tag exactly as given.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "VIDEO" => Ok(Self::Video),
            "IMAGE" => Ok(Self::Image),
            "MOTION" => Ok(Self::Motion),
            _ => Err(Error::UnsupportedProjectType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("video".parse::<ProjectKind>().unwrap(), ProjectKind::Video);
        assert_eq!("Image".parse::<ProjectKind>().unwrap(), ProjectKind::Image);
        assert_eq!("MoTiOn".parse::<ProjectKind>().unwrap(), ProjectKind::Motion);
    }

    #[test]
    fn parse_does_not_trim() {
        let err = " video".parse::<ProjectKind>().unwrap_err();
        assert_eq!(err, Error::UnsupportedProjectType(" video".into()));
    }

    #[test]
    fn unknown_tag_keeps_original_spelling() {
        let err = "Audio".parse::<ProjectKind>().unwrap_err();
        assert_eq!(err, Error::UnsupportedProjectType("Audio".into()));
    }

    #[test]
    fn display_round_trips_through_tag() {
        for kind in ProjectKind::ALL {
            assert_eq!(kind.to_string().parse::<ProjectKind>().unwrap(), kind);
        }
    }
}

//! Project factory: type tag plus raw parameters to a typed [`Submission`].

use crate::error::{Error, Result};
use crate::kind::ProjectKind;
use crate::param::{shape_of, Param};
use crate::submission::{ImageProject, MotionGraphicProject, Submission, VideoProject};

/// Single construction entry point for submissions.
///
/// Which of `param1`/`param2` is read, and as what, depends on the kind:
///
/// | kind   | `param1`                 | `param2`                         |
/// |--------|--------------------------|----------------------------------|
/// | VIDEO  | duration seconds (int)   | resolution (string)              |
/// | IMAGE  | format (string)          | side length, width = height (int)|
/// | MOTION | software used (string)   | ignored                          |
pub struct ProjectFactory;

impl ProjectFactory {
    /// Build a submission.
    ///
    /// Returns `Ok(None)` when `kind` is missing or empty; that is a soft
    /// "nothing to build", not a failure. A non-empty unknown tag fails with
    /// [`Error::UnsupportedProjectType`] and a parameter of the wrong shape
    /// with [`Error::InvalidParameter`].
    pub fn create(
        kind: Option<&str>,
        title: &str,
        student_name: &str,
        param1: Option<Param>,
        param2: Option<Param>,
    ) -> Result<Option<Submission>> {
        let tag = match kind {
            Some(tag) if !tag.is_empty() => tag,
            _ => return Ok(None),
        };

        let submission = match tag.parse::<ProjectKind>()? {
            ProjectKind::Video => {
                let duration = require_u32(ProjectKind::Video, "param1", param1.as_ref())?;
                let resolution = require_text(ProjectKind::Video, "param2", param2.as_ref())?;
                VideoProject::new(title, student_name, duration, resolution).into()
            }
            ProjectKind::Image => {
                let format = require_text(ProjectKind::Image, "param1", param1.as_ref())?;
                let side = require_u32(ProjectKind::Image, "param2", param2.as_ref())?;
                ImageProject::new(title, student_name, format, side, side).into()
            }
            ProjectKind::Motion => {
                let software = require_text(ProjectKind::Motion, "param1", param1.as_ref())?;
                MotionGraphicProject::new(title, student_name, software).into()
            }
        };

        Ok(Some(submission))
    }
}

fn require_u32(kind: ProjectKind, slot: &'static str, param: Option<&Param>) -> Result<u32> {
    const EXPECTED: &str = "non-negative integer";

    let value = param
        .and_then(Param::as_int)
        .ok_or_else(|| Error::invalid_parameter(kind, slot, EXPECTED, shape_of(param)))?;

    u32::try_from(value)
        .map_err(|_| Error::invalid_parameter(kind, slot, EXPECTED, value.to_string()))
}

fn require_text(kind: ProjectKind, slot: &'static str, param: Option<&Param>) -> Result<String> {
    param
        .and_then(Param::as_text)
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_parameter(kind, slot, "string", shape_of(param)))
}

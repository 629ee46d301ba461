//! Submission variants and the shared [`Showcase`] capability.
//!
//! Each variant is immutable once built: fields are private and only read
//! back through accessors, so everything a variant renders is a pure
//! function of its constructor inputs and the [`Labels`] in use.

use serde::Serialize;
use std::io::{self, Write};

use crate::kind::ProjectKind;
use crate::labels::{Labels, TemplateContext};

/// What every submission can do in the gallery.
pub trait Showcase {
    /// One-line summary of the submission.
    fn info_line(&self, labels: &Labels) -> String;

    /// One-line simulated playback or viewing message.
    fn play_line(&self, labels: &Labels) -> String;

    /// Write [`Showcase::info_line`] followed by a newline.
    fn display_info(&self, labels: &Labels, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.info_line(labels))
    }

    /// Write [`Showcase::play_line`] followed by a newline.
    fn play_or_view(&self, labels: &Labels, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.play_line(labels))
    }
}

// ---------------------------------------------------------------------------
// Video
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoProject {
    title: String,
    student_name: String,
    duration_seconds: u32,
    resolution: String,
}

impl VideoProject {
    pub fn new(
        title: impl Into<String>,
        student_name: impl Into<String>,
        duration_seconds: u32,
        resolution: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            student_name: student_name.into(),
            duration_seconds,
            resolution: resolution.into(),
        }
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    pub fn resolution(&self) -> &str {
        &self.resolution
    }

    /// Whole minutes and leftover seconds, truncating.
    pub fn minutes_seconds(&self) -> (u32, u32) {
        (self.duration_seconds / 60, self.duration_seconds % 60)
    }
}

impl Showcase for VideoProject {
    fn info_line(&self, labels: &Labels) -> String {
        let (minutes, seconds) = self.minutes_seconds();
        TemplateContext::new()
            .with_var("title", &self.title)
            .with_var("student", &self.student_name)
            .with_var("minutes", minutes)
            .with_var("seconds", seconds)
            .with_var("resolution", &self.resolution)
            .substitute(&labels.video_info)
    }

    fn play_line(&self, labels: &Labels) -> String {
        TemplateContext::new()
            .with_var("title", &self.title)
            .with_var("resolution", &self.resolution)
            .substitute(&labels.video_play)
    }
}

// ---------------------------------------------------------------------------
// Image
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageProject {
    title: String,
    student_name: String,
    format: String,
    width: u32,
    height: u32,
}

impl ImageProject {
    pub fn new(
        title: impl Into<String>,
        student_name: impl Into<String>,
        format: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            title: title.into(),
            student_name: student_name.into(),
            format: format.into(),
            width,
            height,
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Showcase for ImageProject {
    fn info_line(&self, labels: &Labels) -> String {
        TemplateContext::new()
            .with_var("title", &self.title)
            .with_var("student", &self.student_name)
            .with_var("format", &self.format)
            .with_var("width", self.width)
            .with_var("height", self.height)
            .substitute(&labels.image_info)
    }

    fn play_line(&self, labels: &Labels) -> String {
        TemplateContext::new()
            .with_var("title", &self.title)
            .with_var("width", self.width)
            .with_var("height", self.height)
            .substitute(&labels.image_play)
    }
}

// ---------------------------------------------------------------------------
// Motion graphic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MotionGraphicProject {
    title: String,
    student_name: String,
    software_used: String,
}

impl MotionGraphicProject {
    pub fn new(
        title: impl Into<String>,
        student_name: impl Into<String>,
        software_used: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            student_name: student_name.into(),
            software_used: software_used.into(),
        }
    }

    pub fn software_used(&self) -> &str {
        &self.software_used
    }
}

impl Showcase for MotionGraphicProject {
    fn info_line(&self, labels: &Labels) -> String {
        TemplateContext::new()
            .with_var("title", &self.title)
            .with_var("student", &self.student_name)
            .with_var("software", &self.software_used)
            .substitute(&labels.motion_info)
    }

    fn play_line(&self, labels: &Labels) -> String {
        TemplateContext::new()
            .with_var("title", &self.title)
            .with_var("software", &self.software_used)
            .substitute(&labels.motion_play)
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// A single catalog entry, one of the three closed variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Submission {
    Video(VideoProject),
    Image(ImageProject),
    Motion(MotionGraphicProject),
}

impl Submission {
    pub fn kind(&self) -> ProjectKind {
        match self {
            Self::Video(_) => ProjectKind::Video,
            Self::Image(_) => ProjectKind::Image,
            Self::Motion(_) => ProjectKind::Motion,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Video(v) => &v.title,
            Self::Image(i) => &i.title,
            Self::Motion(m) => &m.title,
        }
    }

    pub fn student_name(&self) -> &str {
        match self {
            Self::Video(v) => &v.student_name,
            Self::Image(i) => &i.student_name,
            Self::Motion(m) => &m.student_name,
        }
    }

    fn as_showcase(&self) -> &dyn Showcase {
        match self {
            Self::Video(v) => v,
            Self::Image(i) => i,
            Self::Motion(m) => m,
        }
    }
}

impl Showcase for Submission {
    fn info_line(&self, labels: &Labels) -> String {
        self.as_showcase().info_line(labels)
    }

    fn play_line(&self, labels: &Labels) -> String {
        self.as_showcase().play_line(labels)
    }
}

impl From<VideoProject> for Submission {
    fn from(v: VideoProject) -> Self {
        Self::Video(v)
    }
}

impl From<ImageProject> for Submission {
    fn from(i: ImageProject) -> Self {
        Self::Image(i)
    }
}

impl From<MotionGraphicProject> for Submission {
    fn from(m: MotionGraphicProject) -> Self {
        Self::Motion(m)
    }
}

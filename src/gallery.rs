//! Gallery driver: build every submission up front, then show them in order.
//!
//! Construction is all-or-nothing. [`Gallery::build`] stops at the first
//! factory error and returns no gallery at all, so the display phase either
//! sees every entry or never runs.

use portfolio_core::{Labels, Param, ProjectFactory, Showcase, Submission};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::config::Config;

/// One raw gallery entry, as written in code or configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EntrySpec {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub param1: Option<Param>,
    #[serde(default)]
    pub param2: Option<Param>,
}

impl EntrySpec {
    pub fn new(
        kind: &str,
        title: &str,
        student_name: &str,
        param1: impl Into<Param>,
        param2: Option<Param>,
    ) -> Self {
        Self {
            kind: Some(kind.to_string()),
            title: title.to_string(),
            student_name: student_name.to_string(),
            param1: Some(param1.into()),
            param2,
        }
    }

    fn create(&self) -> portfolio_core::Result<Option<Submission>> {
        ProjectFactory::create(
            self.kind.as_deref(),
            &self.title,
            &self.student_name,
            self.param1.clone(),
            self.param2.clone(),
        )
    }
}

/// The fixed demonstration sequence shown when no gallery is configured.
pub fn demonstration_entries() -> Vec<EntrySpec> {
    vec![
        EntrySpec::new(
            "VIDEO",
            "فيلم وثائقي عن غزة",
            "أحمد محمد",
            180u32,
            Some("1080p".into()),
        ),
        EntrySpec::new(
            "IMAGE",
            "تصميم شعار الجامعة",
            "سارة علي",
            "PNG",
            Some(2000u32.into()),
        ),
        EntrySpec::new(
            "MOTION",
            "إعلان توعوي عن البيئة",
            "محمود حسن",
            "After Effects",
            None,
        ),
        EntrySpec::new(
            "VIDEO",
            "موشن جرافيك ثلاثي الأبعاد",
            "ليلى خالد",
            45u32,
            Some("4K".into()),
        ),
    ]
}

/// Insertion-ordered submissions, built once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Gallery {
    submissions: Vec<Submission>,
}

impl Gallery {
    /// Run the factory over every entry, short-circuiting on the first error.
    ///
    /// Entries without a kind produce no submission and are skipped.
    pub fn build(entries: &[EntrySpec]) -> portfolio_core::Result<Self> {
        let mut submissions = Vec::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            match entry.create()? {
                Some(submission) => submissions.push(submission),
                None => tracing::debug!("gallery[{}] ({:?}) has no kind; skipped", i, entry.title),
            }
        }

        tracing::debug!("Built gallery with {} submissions", submissions.len());
        Ok(Self { submissions })
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// Info line, play line and delimiter for each submission in order.
    pub fn show(&self, labels: &Labels, out: &mut dyn Write) -> io::Result<()> {
        for submission in &self.submissions {
            submission.display_info(labels, out)?;
            submission.play_or_view(labels, out)?;
            writeln!(out, "{}", labels.delimiter)?;
        }
        Ok(())
    }
}

/// What a showcase run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseReport {
    /// Submissions written to the output sink.
    pub displayed: usize,
    /// Whether gallery construction was aborted by a factory error.
    pub build_failed: bool,
}

/// Print the header, the gallery (or one failure line) and the closing line.
///
/// A construction failure is reported on `err` and otherwise swallowed: the
/// closing line is still written and the caller gets `Ok`. Only I/O errors on
/// the sinks are returned.
pub fn run_showcase(
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<ShowcaseReport> {
    let labels = config.labels();
    let entries = config.entries();

    writeln!(out, "{}", labels.header)?;

    let report = match Gallery::build(&entries) {
        Ok(gallery) => {
            writeln!(out, "{}", labels.gallery_heading)?;
            gallery.show(&labels, out)?;
            ShowcaseReport {
                displayed: gallery.len(),
                build_failed: false,
            }
        }
        Err(e) => {
            tracing::debug!("Gallery construction aborted: {}", e);
            writeln!(err, "{}", labels.failure_line(&e))?;
            ShowcaseReport {
                displayed: 0,
                build_failed: true,
            }
        }
    };

    writeln!(out, "{}", labels.closing)?;
    out.flush()?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{Error, Locale, ProjectKind};

    #[test]
    fn demonstration_builds_in_order() {
        let gallery = Gallery::build(&demonstration_entries()).unwrap();

        let kinds: Vec<_> = gallery.submissions().iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ProjectKind::Video,
                ProjectKind::Image,
                ProjectKind::Motion,
                ProjectKind::Video,
            ]
        );
        assert_eq!(gallery.submissions()[3].student_name(), "ليلى خالد");
    }

    #[test]
    fn first_error_aborts_the_whole_build() {
        let mut entries = demonstration_entries();
        entries.insert(
            2,
            EntrySpec::new("AUDIO", "Podcast", "Omar", 60u32, None),
        );
        entries.push(EntrySpec::new("SCULPTURE", "Clay", "Huda", "clay", None));

        let err = Gallery::build(&entries).unwrap_err();
        assert_eq!(err, Error::UnsupportedProjectType("AUDIO".into()));
    }

    #[test]
    fn entries_without_kind_are_skipped() {
        let mut entries = demonstration_entries();
        entries[1].kind = None;
        entries[2].kind = Some(String::new());

        let gallery = Gallery::build(&entries).unwrap();
        assert_eq!(gallery.len(), 2);
    }

    #[test]
    fn show_writes_three_lines_per_submission() {
        let gallery = Gallery::build(&demonstration_entries()).unwrap();
        let labels = Labels::for_locale(Locale::En);

        let mut out = Vec::new();
        gallery.show(&labels, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 12);
        assert!(lines[0].contains("3 minutes 0 seconds"));
        assert!(lines[4].contains("2000x2000"));
        assert!(lines[7].contains("After Effects"));
        assert!(lines[9].contains("0 minutes 45 seconds"));
        for delimiter in lines.iter().skip(2).step_by(3) {
            assert_eq!(*delimiter, labels.delimiter);
        }
    }

    #[test]
    fn empty_gallery_shows_nothing() {
        let mut out = Vec::new();
        Gallery::default()
            .show(&Labels::default(), &mut out)
            .unwrap();
        assert!(out.is_empty());
    }
}

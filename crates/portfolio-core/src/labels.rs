//! Display strings and `{placeholder}` substitution.
//!
//! Every line the showcase prints is a template in [`Labels`]. The shipped
//! presets are selected by [`Locale`]; individual templates can be replaced
//! with [`LabelOverrides`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Error;

/// Variable substitution context for label templates.
///
/// Variables use the `{name}` syntax. Substitution is a single left-to-right
/// pass, so values that themselves contain braces are copied verbatim and
/// never re-expanded. Unknown placeholders are left as written.
///
/// # Example
///
/// ```
/// use portfolio_core::TemplateContext;
///
/// let ctx = TemplateContext::new()
///     .with_var("title", "Logo")
///     .with_var("width", "2000");
///
/// assert_eq!(ctx.substitute("{title}: {width}x{width}"), "Logo: 2000x2000");
/// assert_eq!(ctx.substitute("{missing}"), "{missing}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    vars: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty template context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn with_var(mut self, key: &str, value: impl ToString) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    /// Get a variable value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|s| s.as_str())
    }

    /// Substitute variables in a template.
    pub fn substitute(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let name = &after[..close];
                    match self.get(name) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(name);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Built-in label presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Right-to-left Arabic text of the original showcase.
    #[default]
    Ar,
    En,
}

/// One template per kind of line the showcase prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub header: String,
    pub gallery_heading: String,
    /// Placeholders: `{title}` `{student}` `{minutes}` `{seconds}` `{resolution}`.
    pub video_info: String,
    /// Placeholders: `{title}` `{resolution}`.
    pub video_play: String,
    /// Placeholders: `{title}` `{student}` `{format}` `{width}` `{height}`.
    pub image_info: String,
    /// Placeholders: `{title}` `{width}` `{height}`.
    pub image_play: String,
    /// Placeholders: `{title}` `{student}` `{software}`.
    pub motion_info: String,
    /// Placeholders: `{title}` `{software}`.
    pub motion_play: String,
    pub delimiter: String,
    /// Placeholder: `{error}`.
    pub failure: String,
    /// Placeholder: `{tag}`.
    pub unsupported_type: String,
    /// Placeholders: `{kind}` `{slot}` `{expected}` `{found}`.
    pub invalid_parameter: String,
    pub closing: String,
}

const BANNER: &str = "****************************************************";
const DELIMITER: &str = "----------------------------------------------------";

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ar => Self::arabic(),
            Locale::En => Self::english(),
        }
    }

    pub fn arabic() -> Self {
        Self {
            header: format!(
                "{BANNER}\n   منصة عرض أعمال الطلبة التفاعلية - Student Portfolio   \n{BANNER}"
            ),
            gallery_heading: "\n--- استعراض معرض أعمال الطلبة المتميزين ---".into(),
            video_info: "[مشروع فيديو] العنوان: {title} | الطالب: {student} | المدة: {minutes}د {seconds}ث | الدقة: {resolution}".into(),
            video_play: ">> جاري تشغيل الفيديو بدقة {resolution} للمشروع: {title}".into(),
            image_info: "[مشروع صور] العنوان: {title} | الطالب: {student} | التنسيق: {format} | الأبعاد: {width}x{height}".into(),
            image_play: ">> جاري عرض الصورة بالحجم الكامل ({width}x{height}) للمشروع: {title}".into(),
            motion_info: "[موشن جرافيك] العنوان: {title} | الطالب: {student} | البرنامج المستخدم: {software}".into(),
            motion_play: ">> جاري تشغيل عرض الموشن جرافيك المصمم ببرنامج {software} للمشروع: {title}".into(),
            delimiter: DELIMITER.into(),
            failure: "حدث خطأ أثناء معالجة المشاريع: {error}".into(),
            unsupported_type: "نوع المشروع غير مدعوم: {tag}".into(),
            invalid_parameter: "معامل غير صالح لمشروع {kind} ({slot}): المتوقع {expected}، المُدخل {found}".into(),
            closing: "\nتمت العملية بنجاح. نتمنى لجميع الطلبة التوفيق في مسيرتهم الإبداعية!".into(),
        }
    }

    pub fn english() -> Self {
        Self {
            header: format!("{BANNER}\n   Interactive Student Showcase - Student Portfolio   \n{BANNER}"),
            gallery_heading: "\n--- Browsing the featured student gallery ---".into(),
            video_info: "[Video] Title: {title} | Student: {student} | Duration: {minutes} minutes {seconds} seconds | Resolution: {resolution}".into(),
            video_play: ">> Playing video at {resolution} for project: {title}".into(),
            image_info: "[Image] Title: {title} | Student: {student} | Format: {format} | Dimensions: {width}x{height}".into(),
            image_play: ">> Viewing image at full size ({width}x{height}) for project: {title}".into(),
            motion_info: "[Motion Graphic] Title: {title} | Student: {student} | Software: {software}".into(),
            motion_play: ">> Playing motion graphic made with {software} for project: {title}".into(),
            delimiter: DELIMITER.into(),
            failure: "An error occurred while processing the projects: {error}".into(),
            unsupported_type: "Unsupported project type: {tag}".into(),
            invalid_parameter: "Invalid parameter [{kind} {slot}]: expected {expected}, found {found}".into(),
            closing: "\nAll done. Best of luck to every student on their creative journey!".into(),
        }
    }

    /// Replace every template that `overrides` sets.
    pub fn with_overrides(mut self, overrides: &LabelOverrides) -> Self {
        let slots = [
            (&mut self.header, &overrides.header),
            (&mut self.gallery_heading, &overrides.gallery_heading),
            (&mut self.video_info, &overrides.video_info),
            (&mut self.video_play, &overrides.video_play),
            (&mut self.image_info, &overrides.image_info),
            (&mut self.image_play, &overrides.image_play),
            (&mut self.motion_info, &overrides.motion_info),
            (&mut self.motion_play, &overrides.motion_play),
            (&mut self.delimiter, &overrides.delimiter),
            (&mut self.failure, &overrides.failure),
            (&mut self.unsupported_type, &overrides.unsupported_type),
            (&mut self.invalid_parameter, &overrides.invalid_parameter),
            (&mut self.closing, &overrides.closing),
        ];
        for (slot, value) in slots {
            if let Some(value) = value {
                slot.clone_from(value);
            }
        }
        self
    }

    /// Render a construction error in the configured language.
    pub fn error_text(&self, error: &Error) -> String {
        match error {
            Error::UnsupportedProjectType(tag) => TemplateContext::new()
                .with_var("tag", tag)
                .substitute(&self.unsupported_type),
            Error::InvalidParameter {
                kind,
                slot,
                expected,
                found,
            } => TemplateContext::new()
                .with_var("kind", kind)
                .with_var("slot", slot)
                .with_var("expected", expected)
                .with_var("found", found)
                .substitute(&self.invalid_parameter),
        }
    }

    /// Render the failure line for a construction error.
    pub fn failure_line(&self, error: &Error) -> String {
        TemplateContext::new()
            .with_var("error", self.error_text(error))
            .substitute(&self.failure)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// Optional per-template replacements, typically read from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOverrides {
    pub header: Option<String>,
    pub gallery_heading: Option<String>,
    pub video_info: Option<String>,
    pub video_play: Option<String>,
    pub image_info: Option<String>,
    pub image_play: Option<String>,
    pub motion_info: Option<String>,
    pub motion_play: Option<String>,
    pub delimiter: Option<String>,
    pub failure: Option<String>,
    pub unsupported_type: Option<String>,
    pub invalid_parameter: Option<String>,
    pub closing: Option<String>,
}

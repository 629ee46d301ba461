//! Integration tests for the showcase run.

use portfolio::config::{parse_config, Config};
use portfolio::gallery::{run_showcase, ShowcaseReport};
use portfolio_core::Labels;

fn run(config: &Config) -> (ShowcaseReport, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let report = run_showcase(config, &mut out, &mut err).unwrap();
    (
        report,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn english(gallery: &str) -> Config {
    parse_config(&format!("[display]\nlocale = \"en\"\n{gallery}")).unwrap()
}

#[test]
fn demonstration_displays_four_entries() {
    let (report, out, err) = run(&Config::default());

    assert_eq!(
        report,
        ShowcaseReport {
            displayed: 4,
            build_failed: false,
        }
    );
    assert!(err.is_empty());

    let labels = Labels::arabic();
    assert!(out.starts_with(&labels.header));
    assert!(out.ends_with(&format!("{}\n", labels.closing)));
    assert_eq!(out.lines().filter(|l| *l == labels.delimiter).count(), 4);
}

#[test]
fn english_lines_follow_each_other_in_order() {
    let (_, out, _) = run(&english(""));
    let labels = Labels::english();

    let body: Vec<_> = out
        .lines()
        .skip_while(|l| !l.starts_with("--- Browsing"))
        .skip(1)
        .take(12)
        .collect();

    assert_eq!(
        body[0],
        "[Video] Title: فيلم وثائقي عن غزة | Student: أحمد محمد | Duration: 3 minutes 0 seconds | Resolution: 1080p"
    );
    assert_eq!(body[1], ">> Playing video at 1080p for project: فيلم وثائقي عن غزة");
    assert_eq!(body[2], labels.delimiter);
    assert!(body[3].ends_with("Format: PNG | Dimensions: 2000x2000"));
    assert!(body[7].contains("After Effects"));
    assert!(body[9].contains("0 minutes 45 seconds | Resolution: 4K"));
    assert_eq!(body[11], labels.delimiter);
}

#[test]
fn failed_build_displays_nothing_and_reports_once() {
    let config = english(
        r#"
[[gallery]]
kind = "IMAGE"
title = "Logo"
student_name = "Sara"
param1 = "PNG"
param2 = 2000

[[gallery]]
kind = "VIDEO"
title = "Clip"
student_name = "Layla"
param1 = "forty-five"
param2 = "4K"

[[gallery]]
kind = "AUDIO"
title = "Podcast"
student_name = "Omar"
"#,
    );

    let (report, out, err) = run(&config);

    assert!(report.build_failed);
    assert_eq!(report.displayed, 0);
    assert!(!out.contains("Logo"));
    assert!(!out.contains("Browsing"));
    assert!(out.contains("All done."));
    assert_eq!(err.lines().count(), 1);
    assert!(err.contains("Invalid parameter [VIDEO param1]: expected non-negative integer, found string"));
}

#[test]
fn empty_gallery_still_closes() {
    let config = parse_config("gallery = []").unwrap();
    let (report, out, err) = run(&config);

    assert_eq!(report.displayed, 0);
    assert!(!report.build_failed);
    assert!(err.is_empty());
    assert!(out.contains(&Labels::arabic().closing));
}

#[test]
fn entries_without_kind_are_not_displayed() {
    let config = english(
        r#"
[[gallery]]
title = "Untitled draft"
student_name = "Nour"

[[gallery]]
kind = "motion"
title = "Intro"
student_name = "Mahmoud"
param1 = "Blender"
"#,
    );

    let (report, out, _) = run(&config);

    assert_eq!(report.displayed, 1);
    assert!(!out.contains("Untitled draft"));
    assert!(out.contains("made with Blender for project: Intro"));
}

#[test]
fn label_overrides_apply_to_output() {
    let config = english(
        r#"
[display.labels]
delimiter = "=="
video_play = "PLAY {title} @ {resolution}"
"#,
    );

    let (_, out, _) = run(&config);

    assert!(out.contains("PLAY موشن جرافيك ثلاثي الأبعاد @ 4K"));
    assert_eq!(out.lines().filter(|l| *l == "==").count(), 4);
}

#[test]
fn default_locale_reports_unsupported_type_in_arabic() {
    let config = parse_config(
        r#"
[[gallery]]
kind = "AUDIO"
title = "بودكاست"
student_name = "عمر"
"#,
    )
    .unwrap();

    let (report, _, err) = run(&config);

    assert!(report.build_failed);
    assert_eq!(
        err,
        "حدث خطأ أثناء معالجة المشاريع: نوع المشروع غير مدعوم: AUDIO\n"
    );
}

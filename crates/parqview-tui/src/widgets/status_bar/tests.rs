use super::*;
use crate::widgets::test_support::{draw, row_text};

#[test]
fn info_message_has_3s_ttl() {
    let msg = StatusMessage::info("loaded");
    assert_eq!(msg.ttl, Duration::from_secs(3));
    assert_eq!(msg.level, StatusLevel::Info);
}

#[test]
fn error_message_outlives_info() {
    let msg = StatusMessage::error("boom");
    assert!(msg.ttl > StatusMessage::info("x").ttl);
    assert!(!msg.is_expired());
}

#[test]
fn is_expired_after_ttl() {
    let msg = StatusMessage {
        text: "old".into(),
        level: StatusLevel::Info,
        created_at: Instant::now() - Duration::from_secs(10),
        ttl: Duration::from_secs(3),
    };
    assert!(msg.is_expired());
}

#[test]
fn shows_selected_file_and_help() {
    let theme = Theme::default();
    let buf = draw(60, 2, |frame, area| {
        StatusBarWidget { selected_file: Some("/data/runs.parquet"), message: None, theme: &theme }.render(frame, area)
    });
    assert!(row_text(&buf, 0).starts_with("file: /data/runs.parquet"));
    assert!(row_text(&buf, 1).contains("h/j/k/l"));
}

#[test]
fn message_takes_precedence_over_file() {
    let theme = Theme::default();
    let msg = StatusMessage::error("Malformed input /x: bad footer");
    let buf = draw(60, 2, |frame, area| {
        StatusBarWidget { selected_file: Some("/x"), message: Some(&msg), theme: &theme }.render(frame, area)
    });
    assert!(row_text(&buf, 0).starts_with("Malformed input"));
}

#[test]
fn nothing_selected_yet() {
    let theme = Theme::default();
    let buf = draw(40, 1, |frame, area| {
        StatusBarWidget { selected_file: None, message: None, theme: &theme }.render(frame, area)
    });
    assert!(row_text(&buf, 0).starts_with("no file selected"));
}

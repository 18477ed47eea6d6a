use hydrogen_cooler_tool::feedback::{append_feedback, load_feedback, FeedbackError};
use std::path::PathBuf;

fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "hydrogen_cooler_feedback_{}_{tag}.csv",
        std::process::id()
    ))
}

#[test]
fn append_then_load_round_trip() {
    let path = temp_path("roundtrip");
    let _ = std::fs::remove_file(&path);

    append_feedback(&path, "Hong Gildong", "Very useful tool").expect("first append");
    append_feedback(&path, "Kim, Cheolsu", "needs \"export\" button").expect("second append");

    let entries = load_feedback(&path).expect("load");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "Hong Gildong");
    assert_eq!(entries[0].text, "Very useful tool");
    assert_eq!(entries[1].name, "Kim, Cheolsu");
    assert_eq!(entries[1].text, "needs \"export\" button");
    // Timestamp,Name,Feedback 헤더가 항상 첫 줄
    let raw = std::fs::read_to_string(&path).expect("read raw");
    assert!(raw.starts_with("Timestamp,Name,Feedback\n"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn multi_line_feedback_survives_round_trip() {
    let path = temp_path("multiline");
    let _ = std::fs::remove_file(&path);

    append_feedback(&path, "Lee Younghee", "line one\nline two").expect("append");
    append_feedback(&path, "Park Minsu", "single line").expect("append second");

    let entries = load_feedback(&path).expect("load");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].text, "line one\nline two");
    assert_eq!(entries[1].text, "single line");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn empty_fields_are_rejected_without_touching_the_file() {
    let path = temp_path("empty");
    let _ = std::fs::remove_file(&path);

    let err = append_feedback(&path, "  ", "text").unwrap_err();
    assert!(matches!(err, FeedbackError::EmptyField));
    let err = append_feedback(&path, "name", "").unwrap_err();
    assert!(matches!(err, FeedbackError::EmptyField));
    assert!(!path.exists());
}

#[test]
fn loading_a_missing_file_yields_empty_list() {
    let path = temp_path("missing");
    let _ = std::fs::remove_file(&path);
    let entries = load_feedback(&path).expect("load");
    assert!(entries.is_empty());
}

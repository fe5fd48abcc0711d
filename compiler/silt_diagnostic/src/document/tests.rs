use super::*;
use pretty_assertions::assert_eq;
use silt_ir::{LineCol, Span};

fn range(start: u32) -> SourceRange {
    SourceRange::new(
        Span::new(start, start + 1),
        LineCol::new(1, start + 1),
        LineCol::new(1, start + 2),
    )
}

#[test]
fn test_report_appends_in_insertion_order() {
    let mut doc = SourceDocument::new("a.txt", "a $ b # c");
    let second = doc.error(ErrorCode::E0001, "invalid character '#'", range(6));
    let first = doc.error(ErrorCode::E0001, "invalid character '$'", range(2));
    assert_eq!(doc.messages().len(), 2);
    assert_eq!(second.index(), 0);
    assert_eq!(first.index(), 1);
    let texts: Vec<&str> = doc.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["invalid character '#'", "invalid character '$'"]);
}

#[test]
fn test_sorted_by_position() {
    let mut doc = SourceDocument::new("a.txt", "a $ b # c");
    doc.error(ErrorCode::E0001, "second", range(6));
    doc.error(ErrorCode::E0001, "first", range(2));
    let sorted: Vec<&str> = doc
        .messages()
        .sorted_by_position()
        .into_iter()
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(sorted, vec!["first", "second"]);
}

#[test]
fn test_counts() {
    let mut doc = SourceDocument::new("a.txt", "x");
    doc.report(ErrorCode::E9000, Severity::Warning, "careful", SourceRange::SYNTHETIC);
    doc.report(ErrorCode::E9000, Severity::Info, "fyi", SourceRange::SYNTHETIC);
    assert!(!doc.messages().has_errors());
    doc.error(ErrorCode::E1002, "boom", range(0));
    assert!(doc.messages().has_errors());
    assert_eq!(doc.messages().error_count(), 1);
    assert_eq!(doc.messages().warning_count(), 1);
}

#[test]
fn test_messages_share_filename() {
    let mut doc = SourceDocument::new("shared.txt", "x");
    let id = doc.error(ErrorCode::E1002, "boom", range(0));
    let message = doc.messages().get(id).cloned();
    assert_eq!(message.map(|m| m.filename.to_string()), Some("shared.txt".to_string()));
}

#[test]
fn test_line_text() {
    let doc = SourceDocument::new("a.txt", "one\r\ntwo\nthree");
    assert_eq!(doc.line_text(1), Some("one"));
    assert_eq!(doc.line_text(3), Some("three"));
    assert_eq!(doc.line_text(0), None);
    assert_eq!(doc.line_text(4), None);
}

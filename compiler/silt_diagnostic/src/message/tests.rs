use super::*;
use pretty_assertions::assert_eq;
use silt_ir::{LineCol, Span};

#[test]
fn test_display_includes_position_and_code() {
    let message = Message {
        code: ErrorCode::E0001,
        severity: Severity::Error,
        text: "invalid character '$'".into(),
        range: SourceRange::new(Span::new(7, 8), LineCol::new(2, 3), LineCol::new(2, 4)),
        filename: "calc.txt".into(),
    };
    assert_eq!(
        message.to_string(),
        "calc.txt:2:3 error[E0001]: invalid character '$'"
    );
    assert!(message.is_error());
}

#[test]
fn test_severity_order() {
    assert!(Severity::Info < Severity::Warning);
    assert!(Severity::Warning < Severity::Error);
}

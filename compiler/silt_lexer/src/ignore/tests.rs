use crate::{Lexer, LexerConfig};
use pretty_assertions::assert_eq;
use silt_diagnostic::{ErrorCode, SourceDocument};
use silt_ir::{SharedSymbols, Symbol};

fn names(config: &LexerConfig, source: &str) -> (Vec<String>, Vec<ErrorCode>) {
    let mut lexer = Lexer::new(config, SourceDocument::new("i", source));
    let tokens: Vec<_> = lexer.by_ref().filter(|t| t.is(Symbol::NAME)).collect();
    let names = tokens.iter().map(|t| t.text(source).to_owned()).collect();
    let codes = lexer.document().messages().iter().map(|m| m.code).collect();
    (names, codes)
}

#[test]
fn test_ignore_char_and_str() {
    let mut config = LexerConfig::new(SharedSymbols::new());
    config.ignore_char(' ').ignore_str("...");
    let (names, codes) = names(&config, "a...b c");
    assert_eq!(names, vec!["a", "b", "c"]);
    assert!(codes.is_empty());
}

#[test]
fn test_ignore_predicate() {
    let mut config = LexerConfig::new(SharedSymbols::new());
    config.ignore_predicate(|c| c == ',' || c == ' ');
    let (names, _) = names(&config, "a, b,,c");
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_line_comment_stops_at_line_break() {
    let mut config = LexerConfig::new(SharedSymbols::new());
    config.ignore_whitespace().ignore_line_comment("#");
    let (names, _) = names(&config, "a # b\nc");
    assert_eq!(names, vec!["a", "c"]);
}

#[test]
fn test_unterminated_block_comment() {
    let mut config = LexerConfig::new(SharedSymbols::new());
    config.ignore_whitespace().ignore_block_comment("(*", "*)");
    let (names, codes) = names(&config, "a (* b");
    assert_eq!(names, vec!["a"]);
    assert_eq!(codes, vec![ErrorCode::E0004]);
}

#[test]
fn test_registration_order_wins() {
    // The line comment is registered first, so `//` never reaches the
    // single-slash ignore rule.
    let mut config = LexerConfig::new(SharedSymbols::new());
    config.ignore_line_comment("//").ignore_char('/').ignore_whitespace();
    let (names, _) = names(&config, "a/b//c\nd");
    assert_eq!(names, vec!["a", "b", "d"]);
}

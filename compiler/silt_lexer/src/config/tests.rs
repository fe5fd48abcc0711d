use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_add_symbol_is_idempotent() {
    let mut config = LexerConfig::new(SharedSymbols::new());
    let a = config.add_symbol("+=");
    let b = config.add_symbol("+=");
    assert_eq!(a, b);
    assert_eq!(config.punctuators().len(), 1);
    assert!(config.is_punctuator(a));
    assert!(!config.is_punctuator(Symbol::NAME));
}

#[test]
fn test_symbols_are_shared() {
    let symbols = SharedSymbols::new();
    let mut config = LexerConfig::new(symbols.clone());
    let arrow = config.add_symbol("->");
    assert_eq!(symbols.get("->"), Some(arrow));
}

#[test]
fn test_registration_counts() {
    let mut config = LexerConfig::new(SharedSymbols::new());
    config
        .ignore_whitespace()
        .ignore_line_comment("//")
        .match_number(NumberFormat::default())
        .match_string("\"", "\"")
        .match_boolean(true);
    assert_eq!(config.ignores().len(), 2);
    assert_eq!(config.matchers().len(), 3);
}

//! Delimited string literal matcher.

use silt_diagnostic::ErrorCode;
use silt_ir::{Span, Symbol, Token};

use crate::{Lexer, Matcher};

/// Lexes `open ... close` into a [`Symbol::STRING`] token whose text is the
/// content between the delimiters, escapes still in place.
///
/// With an escape char configured, the char following it never closes the
/// string. An unterminated string runs to end of input and is reported.
#[derive(Clone, Debug)]
pub struct StringMatcher {
    open: Box<str>,
    close: Box<str>,
    escape: Option<char>,
}

impl StringMatcher {
    pub fn new(open: &str, close: &str) -> Self {
        StringMatcher {
            open: open.into(),
            close: close.into(),
            escape: Some('\\'),
        }
    }

    #[must_use]
    pub fn with_escape(mut self, escape: Option<char>) -> Self {
        self.escape = escape;
        self
    }

    pub fn escape(&self) -> Option<char> {
        self.escape
    }
}

impl Default for StringMatcher {
    fn default() -> Self {
        Self::new("\"", "\"")
    }
}

impl Matcher for StringMatcher {
    fn matches(&self, lexer: &Lexer<'_>, _current: char) -> bool {
        !self.open.is_empty() && lexer.is_match(&self.open)
    }

    fn build(&self, lexer: &mut Lexer<'_>) -> Token {
        let mark = lexer.mark();
        lexer.advance_if(&self.open);
        let content_start = lexer.offset();

        loop {
            if lexer.is_at_end() {
                let content = Span::new(content_start, lexer.offset());
                let range = lexer.range_from(mark);
                lexer.report(ErrorCode::E0002, "unterminated string literal", range);
                return lexer.token_from(mark, Symbol::STRING).with_text(content);
            }
            if Some(lexer.current()) == self.escape {
                lexer.advance_by(2);
                continue;
            }
            if lexer.is_match(&self.close) {
                let content = Span::new(content_start, lexer.offset());
                lexer.advance_if(&self.close);
                return lexer.token_from(mark, Symbol::STRING).with_text(content);
            }
            lexer.advance();
        }
    }
}

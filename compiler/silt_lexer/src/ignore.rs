//! Ignore matchers: input that is consumed without producing a token.

use silt_diagnostic::ErrorCode;

use crate::{IgnoreMatcher, Lexer};

/// Any Unicode whitespace, line breaks included.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceIgnore;

impl IgnoreMatcher for WhitespaceIgnore {
    fn matches(&self, _lexer: &Lexer<'_>, current: char) -> bool {
        current.is_whitespace()
    }

    fn advance(&self, lexer: &mut Lexer<'_>) {
        lexer.advance_while(char::is_whitespace);
    }
}

/// A fixed string, skipped one occurrence at a time.
#[derive(Clone, Debug)]
pub struct StrIgnore {
    text: Box<str>,
}

impl StrIgnore {
    pub fn new(text: impl Into<Box<str>>) -> Self {
        StrIgnore { text: text.into() }
    }
}

impl IgnoreMatcher for StrIgnore {
    fn matches(&self, lexer: &Lexer<'_>, _current: char) -> bool {
        !self.text.is_empty() && lexer.is_match(&self.text)
    }

    fn advance(&self, lexer: &mut Lexer<'_>) {
        lexer.advance_if(&self.text);
    }
}

/// A run of chars satisfying a predicate.
pub struct PredicateIgnore {
    predicate: Box<dyn Fn(char) -> bool + Send + Sync>,
}

impl PredicateIgnore {
    pub fn new(predicate: impl Fn(char) -> bool + Send + Sync + 'static) -> Self {
        PredicateIgnore {
            predicate: Box::new(predicate),
        }
    }
}

impl IgnoreMatcher for PredicateIgnore {
    fn matches(&self, _lexer: &Lexer<'_>, current: char) -> bool {
        (self.predicate)(current)
    }

    fn advance(&self, lexer: &mut Lexer<'_>) {
        lexer.advance_while(&self.predicate);
    }
}

/// `start` up to, not including, the next line break.
#[derive(Clone, Debug)]
pub struct LineCommentIgnore {
    start: Box<str>,
}

impl LineCommentIgnore {
    pub fn new(start: &str) -> Self {
        LineCommentIgnore {
            start: start.into(),
        }
    }
}

impl IgnoreMatcher for LineCommentIgnore {
    fn matches(&self, lexer: &Lexer<'_>, _current: char) -> bool {
        !self.start.is_empty() && lexer.is_match(&self.start)
    }

    fn advance(&self, lexer: &mut Lexer<'_>) {
        lexer.advance_if(&self.start);
        lexer.advance_while(|c| c != '\n' && c != '\r');
    }
}

/// `open ... close`, possibly spanning lines. Not nested.
#[derive(Clone, Debug)]
pub struct BlockCommentIgnore {
    open: Box<str>,
    close: Box<str>,
}

impl BlockCommentIgnore {
    pub fn new(open: &str, close: &str) -> Self {
        BlockCommentIgnore {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl IgnoreMatcher for BlockCommentIgnore {
    fn matches(&self, lexer: &Lexer<'_>, _current: char) -> bool {
        !self.open.is_empty() && lexer.is_match(&self.open)
    }

    fn advance(&self, lexer: &mut Lexer<'_>) {
        let mark = lexer.mark();
        lexer.advance_if(&self.open);
        while !lexer.is_at_end() {
            if lexer.advance_if(&self.close) {
                return;
            }
            lexer.advance();
        }
        let range = lexer.range_from(mark);
        lexer.report(ErrorCode::E0004, "unterminated block comment", range);
    }
}

#[cfg(test)]
mod tests;

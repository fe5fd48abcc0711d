//! Lexer output.

use crate::{LineCol, SourceRange, Span, Symbol};

/// A lexed unit.
///
/// `span` covers every consumed character; `text` covers the payload, which
/// differs only for literals such as strings whose delimiters are not part of
/// their value. Both are empty for SOF, EOF and substituted sentinels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub symbol: Symbol,
    pub span: Span,
    pub text: Span,
    pub start: LineCol,
    pub end: LineCol,
}

impl Token {
    #[inline]
    pub const fn new(symbol: Symbol, span: Span, start: LineCol, end: LineCol) -> Self {
        Token {
            symbol,
            span,
            text: span,
            start,
            end,
        }
    }

    /// Zero-width token at a position.
    #[inline]
    pub const fn empty(symbol: Symbol, offset: u32, at: LineCol) -> Self {
        Token::new(symbol, Span::point(offset), at, at)
    }

    #[inline]
    #[must_use]
    pub const fn with_text(mut self, text: Span) -> Self {
        self.text = text;
        self
    }

    #[inline]
    pub const fn range(&self) -> SourceRange {
        SourceRange::new(self.span, self.start, self.end)
    }

    /// Payload text within `source`.
    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.text.slice(source)
    }

    #[inline]
    pub fn is(&self, symbol: Symbol) -> bool {
        self.symbol == symbol
    }
}

//! Source locations.
//!
//! A [`Span`] is a compact byte range; [`LineCol`] is a human-facing position;
//! a [`SourceRange`] pairs the two so diagnostics can be rendered without
//! re-scanning the source.

use std::fmt;

/// Error when creating a span from a range that exceeds `u32::MAX`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    #[error("span start {0} (0x{0:X}) exceeds u32::MAX")]
    StartTooLarge(usize),
    #[error("span end {0} (0x{0:X}) exceeds u32::MAX")]
    EndTooLarge(usize),
}

/// Byte range into a source buffer, end exclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Span used for synthesized nodes and range-less messages.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Try to create a span from a byte range.
    #[inline]
    pub fn try_from_range(range: std::ops::Range<usize>) -> Result<Self, SpanError> {
        let start =
            u32::try_from(range.start).map_err(|_| SpanError::StartTooLarge(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError::EndTooLarge(range.end))?;
        Ok(Span { start, end })
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Zero-length span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub const fn to_range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Slice `source` by this span, or `""` when out of bounds.
    pub fn slice(self, source: &str) -> &str {
        source.get(self.to_range()).unwrap_or("")
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<std::ops::Range<u32>> for Span {
    fn from(range: std::ops::Range<u32>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// One-based line and column. Columns count characters, not bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

impl LineCol {
    pub const START: LineCol = LineCol { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        LineCol { line, column }
    }

    /// Position reached after reading `text` from `self`. Line breaks are
    /// counted the way the lexer counts them: `\n`, `\r\n` and lone `\r`.
    #[must_use]
    pub fn advance_over(self, text: &str) -> LineCol {
        let mut at = self;
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' | '\r' => {
                    at.line += 1;
                    at.column = 1;
                }
                _ => at.column += 1,
            }
        }
        at
    }
}

impl Default for LineCol {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span together with the line/column of both of its ends.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct SourceRange {
    pub span: Span,
    pub start: LineCol,
    pub end: LineCol,
}

impl SourceRange {
    /// Range attached to messages that have no location.
    pub const SYNTHETIC: SourceRange = SourceRange {
        span: Span::DUMMY,
        start: LineCol::START,
        end: LineCol::START,
    };

    #[inline]
    pub const fn new(span: Span, start: LineCol, end: LineCol) -> Self {
        SourceRange { span, start, end }
    }

    /// Zero-width range at a single position.
    #[inline]
    pub const fn point(offset: u32, at: LineCol) -> Self {
        SourceRange {
            span: Span::point(offset),
            start: at,
            end: at,
        }
    }

    /// Smallest range covering both `self` and `other`.
    #[must_use]
    pub fn merge(self, other: SourceRange) -> SourceRange {
        let (start, start_pos) = if other.span.start < self.span.start {
            (other.span.start, other.start)
        } else {
            (self.span.start, self.start)
        };
        let (end, end_pos) = if other.span.end > self.span.end {
            (other.span.end, other.end)
        } else {
            (self.span.end, self.end)
        };
        SourceRange {
            span: Span::new(start, end),
            start: start_pos,
            end: end_pos,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl fmt::Debug for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-{:?}", self.start, self.end)
    }
}

//! Leaf parselets: names and literals.

use silt_diagnostic::ErrorCode;
use silt_ir::{Literal, NodeId, NodeKind, SourceRange, Span, Token};
use silt_lexer::unescape;

use crate::{ParseSession, PrefixParselet};

/// Identifier as a [`NodeKind::Name`]. The spelling goes into the tree's
/// name table, never the grammar's symbols.
#[derive(Copy, Clone, Debug, Default)]
pub struct NameParselet;

impl PrefixParselet for NameParselet {
    fn parse(&self, session: &mut ParseSession<'_>, token: Token) -> NodeId {
        session.name_node(&token)
    }
}

/// Why a number token has no value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    /// `0x` or `0b` without digits. The lexer reports this one.
    #[error("number literal has no digits")]
    NoDigits,
    #[error("number literal '{0}' is out of range")]
    OutOfRange(String),
    #[error("invalid number literal '{0}'")]
    Malformed(String),
}

/// Convert number token text into a literal.
///
/// `0x`/`0b` literals are unsigned, or signed when negated. A fraction or
/// exponent makes a float, a leading `-` a signed integer, and anything
/// else is unsigned. Digit separators are dropped first.
pub fn parse_number(
    text: &str,
    fraction_separator: char,
    digit_separator: Option<char>,
) -> Result<Literal, NumberError> {
    let cleaned: String = text
        .chars()
        .filter(|&c| Some(c) != digit_separator)
        .collect();
    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    let radix = match digits.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let body = &digits[2..];
        if body.is_empty() {
            return Err(NumberError::NoDigits);
        }
        let value = u64::from_str_radix(body, radix)
            .map_err(|_| NumberError::OutOfRange(text.to_owned()))?;
        if !negative {
            return Ok(Literal::Unsigned(value));
        }
        return i64::try_from(-i128::from(value))
            .map(Literal::Signed)
            .map_err(|_| NumberError::OutOfRange(text.to_owned()));
    }

    let is_float = digits.contains(fraction_separator) || digits.contains(['e', 'E']);
    if is_float {
        let normalized = cleaned.replace(fraction_separator, ".");
        return normalized
            .parse::<f64>()
            .map(Literal::Float)
            .map_err(|_| NumberError::Malformed(text.to_owned()));
    }

    if !digits.bytes().all(|b| b.is_ascii_digit()) || digits.is_empty() {
        return Err(NumberError::Malformed(text.to_owned()));
    }
    if negative {
        cleaned
            .parse::<i64>()
            .map(Literal::Signed)
            .map_err(|_| NumberError::OutOfRange(text.to_owned()))
    } else {
        digits
            .parse::<u64>()
            .map(Literal::Unsigned)
            .map_err(|_| NumberError::OutOfRange(text.to_owned()))
    }
}

/// Number token as a [`Literal`]. Must agree with the lexer's
/// `NumberMatcher` on separators.
#[derive(Copy, Clone, Debug)]
pub struct NumberParselet {
    fraction_separator: char,
    digit_separator: Option<char>,
}

impl NumberParselet {
    pub fn new() -> Self {
        NumberParselet {
            fraction_separator: '.',
            digit_separator: Some('_'),
        }
    }

    #[must_use]
    pub fn with_fraction_separator(mut self, separator: char) -> Self {
        self.fraction_separator = separator;
        self
    }

    #[must_use]
    pub fn with_digit_separator(mut self, separator: Option<char>) -> Self {
        self.digit_separator = separator;
        self
    }
}

impl Default for NumberParselet {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixParselet for NumberParselet {
    fn parse(&self, session: &mut ParseSession<'_>, token: Token) -> NodeId {
        let text = session.text(&token);
        match parse_number(text, self.fraction_separator, self.digit_separator) {
            Ok(literal) => session.alloc(NodeKind::Literal(literal), token.range()),
            Err(NumberError::NoDigits) => session.invalid(&token),
            Err(err) => session.invalid_with_error(&token, ErrorCode::E0003, err.to_string()),
        }
    }
}

/// Boolean token; `true` in any ASCII case is true.
#[derive(Copy, Clone, Debug, Default)]
pub struct BooleanParselet;

impl PrefixParselet for BooleanParselet {
    fn parse(&self, session: &mut ParseSession<'_>, token: Token) -> NodeId {
        let value = session.text(&token).eq_ignore_ascii_case("true");
        session.alloc(NodeKind::Literal(Literal::Bool(value)), token.range())
    }
}

/// String token with its escapes resolved. Each bad escape is reported at
/// its own position and attached to the literal.
#[derive(Copy, Clone, Debug)]
pub struct StringParselet {
    escape: Option<char>,
}

impl StringParselet {
    pub fn new() -> Self {
        StringParselet { escape: Some('\\') }
    }

    /// Escape char, `None` to take content verbatim. Must agree with the
    /// lexer's `StringMatcher`.
    #[must_use]
    pub fn with_escape(mut self, escape: Option<char>) -> Self {
        self.escape = escape;
        self
    }
}

impl Default for StringParselet {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixParselet for StringParselet {
    fn parse(&self, session: &mut ParseSession<'_>, token: Token) -> NodeId {
        let content = session.text(&token);
        let Some(escape) = self.escape else {
            let value = content.to_owned();
            return session.alloc(NodeKind::Literal(Literal::Str(value)), token.range());
        };

        let unescaped = unescape(content, escape);
        let opening = Span::new(token.span.start, token.text.start).slice(session.source());
        let content_start = token.start.advance_over(opening);
        let located: Vec<(SourceRange, String)> = unescaped
            .errors
            .iter()
            .map(|err| {
                let before = content.get(..err.offset as usize).unwrap_or("");
                let start = content_start.advance_over(before);
                let end = start.advance_over(&err.sequence);
                let offset = token.text.start + err.offset;
                let span = Span::new(offset, offset + err.len);
                let text = format!("invalid escape sequence '{}'", err.sequence);
                (SourceRange::new(span, start, end), text)
            })
            .collect();

        let node = session.alloc(
            NodeKind::Literal(Literal::Str(unescaped.value)),
            token.range(),
        );
        for (range, text) in located {
            let message = session.error(ErrorCode::E0005, text, range);
            session.ast_mut().attach_message(node, message);
        }
        node
    }
}

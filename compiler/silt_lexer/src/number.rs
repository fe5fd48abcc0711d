//! Numeric literal matcher.

use bitflags::bitflags;
use silt_diagnostic::ErrorCode;
use silt_ir::{Symbol, Token};

use crate::{Lexer, Matcher};

bitflags! {
    /// Literal forms a [`NumberMatcher`] accepts beyond plain decimal digits.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct NumberFormat: u8 {
        /// `0x1F`
        const HEX = 1 << 0;
        /// `0b1010`
        const BINARY = 1 << 1;
        /// `1.5`
        const FLOAT = 1 << 2;
        /// `1e5`, `2.5E-3`
        const EXPONENT = 1 << 3;
        /// `-42`: a `-` directly followed by a digit belongs to the literal.
        const NEGATIVE = 1 << 4;
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::all()
    }
}

/// Lexes numeric literals into [`Symbol::NUMBER`] tokens.
///
/// The token text is the literal as written, separators included; turning it
/// into a value is the parser's job.
#[derive(Clone, Debug)]
pub struct NumberMatcher {
    format: NumberFormat,
    fraction_separator: char,
    digit_separator: Option<char>,
}

impl NumberMatcher {
    pub fn new(format: NumberFormat) -> Self {
        NumberMatcher {
            format,
            fraction_separator: '.',
            digit_separator: Some('_'),
        }
    }

    #[must_use]
    pub fn with_fraction_separator(mut self, separator: char) -> Self {
        self.fraction_separator = separator;
        self
    }

    /// Char allowed between digits, `None` to disallow.
    #[must_use]
    pub fn with_digit_separator(mut self, separator: Option<char>) -> Self {
        self.digit_separator = separator;
        self
    }

    pub fn format(&self) -> NumberFormat {
        self.format
    }

    fn digits(&self, lexer: &mut Lexer<'_>, is_digit: impl Fn(char) -> bool) -> usize {
        let separator = self.digit_separator;
        let mut digits = 0;
        lexer.advance_while(|c| {
            if is_digit(c) {
                digits += 1;
                true
            } else {
                Some(c) == separator && digits > 0
            }
        });
        digits
    }

    fn radix_prefix(&self, lexer: &Lexer<'_>) -> Option<u32> {
        let skip = usize::from(lexer.current() == '-');
        if lexer.peek(skip) != '0' {
            return None;
        }
        match lexer.peek(skip + 1) {
            'x' | 'X' if self.format.contains(NumberFormat::HEX) => Some(16),
            'b' | 'B' if self.format.contains(NumberFormat::BINARY) => Some(2),
            _ => None,
        }
    }
}

impl Default for NumberMatcher {
    fn default() -> Self {
        Self::new(NumberFormat::default())
    }
}

impl Matcher for NumberMatcher {
    fn matches(&self, lexer: &Lexer<'_>, current: char) -> bool {
        current.is_ascii_digit()
            || (current == '-'
                && self.format.contains(NumberFormat::NEGATIVE)
                && lexer.peek(1).is_ascii_digit())
    }

    fn build(&self, lexer: &mut Lexer<'_>) -> Token {
        let mark = lexer.mark();
        if lexer.current() == '-' {
            lexer.advance();
        }

        if let Some(radix) = self.radix_prefix(lexer) {
            lexer.advance_by(2);
            if self.digits(lexer, |c| c.is_digit(radix)) == 0 {
                let range = lexer.range_from(mark);
                let kind = if radix == 16 { "hexadecimal" } else { "binary" };
                lexer.report(
                    ErrorCode::E0003,
                    format!("{kind} literal has no digits"),
                    range,
                );
            }
            return lexer.token_from(mark, Symbol::NUMBER);
        }

        self.digits(lexer, |c| c.is_ascii_digit());

        if self.format.contains(NumberFormat::FLOAT)
            && lexer.current() == self.fraction_separator
            && lexer.peek(1).is_ascii_digit()
        {
            lexer.advance();
            self.digits(lexer, |c| c.is_ascii_digit());
        }

        if self.format.contains(NumberFormat::EXPONENT) && matches!(lexer.current(), 'e' | 'E') {
            let signed = matches!(lexer.peek(1), '+' | '-');
            let first_digit = if signed { lexer.peek(2) } else { lexer.peek(1) };
            if first_digit.is_ascii_digit() {
                lexer.advance_by(if signed { 2 } else { 1 });
                self.digits(lexer, |c| c.is_ascii_digit());
            }
        }

        lexer.token_from(mark, Symbol::NUMBER)
    }
}

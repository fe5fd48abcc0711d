//! `true` / `false` literal matcher.

use silt_ir::{Symbol, Token};

use crate::{Lexer, Matcher};

/// Lexes `true` and `false` into [`Symbol::BOOLEAN`] tokens. A following
/// identifier char means the word is a name (`trueish`), not a literal.
#[derive(Clone, Copy, Debug, Default)]
pub struct BooleanMatcher {
    ignore_case: bool,
}

impl BooleanMatcher {
    pub fn new(ignore_case: bool) -> Self {
        BooleanMatcher { ignore_case }
    }

    fn word_len(&self, lexer: &Lexer<'_>) -> Option<usize> {
        ["true", "false"].into_iter().find_map(|word| {
            let found = if self.ignore_case {
                lexer.is_match_ignore_case(word)
            } else {
                lexer.is_match(word)
            };
            let boundary = lexer.peek(word.len());
            (found && !(boundary.is_alphanumeric() || boundary == '_')).then_some(word.len())
        })
    }
}

impl Matcher for BooleanMatcher {
    fn matches(&self, lexer: &Lexer<'_>, current: char) -> bool {
        matches!(current, 't' | 'f' | 'T' | 'F') && self.word_len(lexer).is_some()
    }

    fn build(&self, lexer: &mut Lexer<'_>) -> Token {
        let mark = lexer.mark();
        lexer.advance_by(self.word_len(lexer).unwrap_or(0));
        lexer.token_from(mark, Symbol::BOOLEAN)
    }
}

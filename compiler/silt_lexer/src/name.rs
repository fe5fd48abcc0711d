//! Identifier scanning policies.

use crate::{Lexer, NameAdvancer};

/// Letter or `_`, then letters, digits and `_`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultNameAdvancer;

impl NameAdvancer for DefaultNameAdvancer {
    fn is_name_start(&self, c: char) -> bool {
        c.is_alphabetic() || c == '_'
    }

    fn advance(&self, lexer: &mut Lexer<'_>) {
        lexer.advance_while(|c| c.is_alphanumeric() || c == '_');
    }
}

/// Name policy built from a start predicate and a continuation predicate,
/// e.g. to allow `-` inside names.
pub struct PredicateNameAdvancer {
    start: Box<dyn Fn(char) -> bool + Send + Sync>,
    part: Box<dyn Fn(char) -> bool + Send + Sync>,
}

impl PredicateNameAdvancer {
    pub fn new(
        start: impl Fn(char) -> bool + Send + Sync + 'static,
        part: impl Fn(char) -> bool + Send + Sync + 'static,
    ) -> Self {
        PredicateNameAdvancer {
            start: Box::new(start),
            part: Box::new(part),
        }
    }
}

impl NameAdvancer for PredicateNameAdvancer {
    fn is_name_start(&self, c: char) -> bool {
        (self.start)(c)
    }

    fn advance(&self, lexer: &mut Lexer<'_>) {
        lexer.advance();
        lexer.advance_while(&self.part);
    }
}

//! Extension points of the lexer.
//!
//! All three traits are object safe and `Send + Sync`, so a configured
//! grammar can be shared between threads.

use silt_ir::Token;

use crate::Lexer;

/// Recognizes a literal and builds its token.
pub trait Matcher: Send + Sync {
    /// Whether a literal starts at the cursor. `current` is the char under it.
    fn matches(&self, lexer: &Lexer<'_>, current: char) -> bool;

    /// Consume the literal and return its token. Only called after
    /// [`Matcher::matches`] returned `true`.
    fn build(&self, lexer: &mut Lexer<'_>) -> Token;
}

/// Recognizes input that produces no token.
pub trait IgnoreMatcher: Send + Sync {
    fn matches(&self, lexer: &Lexer<'_>, current: char) -> bool;

    /// Consume the ignored input. Must advance at least one char, otherwise
    /// the lexer moves on to the next ignore matcher.
    fn advance(&self, lexer: &mut Lexer<'_>);
}

/// Identifier scanning policy.
pub trait NameAdvancer: Send + Sync {
    fn is_name_start(&self, c: char) -> bool;

    /// Consume a name starting at the cursor.
    fn advance(&self, lexer: &mut Lexer<'_>);
}

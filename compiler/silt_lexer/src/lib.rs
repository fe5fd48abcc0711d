//! Silt lexer.
//!
//! A [`Lexer`] turns source text into [`Token`](silt_ir::Token)s one call at
//! a time, driven by a grammar-supplied [`LexerConfig`]:
//!
//! 1. ignore matchers (whitespace, comments) discard input
//! 2. literal matchers (numbers, strings, booleans) build tokens
//! 3. punctuators are tried longest first
//! 4. names are scanned by the configured [`NameAdvancer`]; a name spelled
//!    like a registered keyword becomes that keyword's symbol
//! 5. anything else is reported as an invalid character
//!
//! Lexical problems are recorded in the document's diagnostics; the lexer
//! never fails.

mod boolean;
mod config;
mod escape;
mod ignore;
mod lexer;
mod matcher;
mod name;
mod number;
mod string;

pub use boolean::BooleanMatcher;
pub use config::LexerConfig;
pub use escape::{unescape, InvalidEscape, Unescaped};
pub use ignore::{
    BlockCommentIgnore, LineCommentIgnore, PredicateIgnore, StrIgnore, WhitespaceIgnore,
};
pub use lexer::{Lexer, Mark};
pub use matcher::{IgnoreMatcher, Matcher, NameAdvancer};
pub use name::{DefaultNameAdvancer, PredicateNameAdvancer};
pub use number::{NumberFormat, NumberMatcher};
pub use string::StringMatcher;

//! Silt parser.
//!
//! A Pratt (top-down operator precedence) engine whose grammar is data:
//!
//! - a [`Grammar`] fills a [`LexerConfig`](silt_lexer::LexerConfig) and a
//!   [`ParserDefinition`] once, when the [`Parser`] is built
//! - the definition maps symbols to prefix, infix/postfix and statement
//!   parselets; infix parselets carry a [`BindingPower`]
//! - [`Parser::parse`] runs a [`ParseSession`] over one source buffer and
//!   returns a [`TranslationUnit`]
//!
//! # Error Handling
//!
//! Parsing does not fail. Missing parselets and unexpected tokens are
//! reported to the document and replaced by Invalid nodes or sentinel
//! tokens; blocks resynchronize per [`RecoveryPolicy`].
//!
//! ```text
//! struct Calc;
//!
//! impl Grammar for Calc {
//!     fn init_lexer(&self, lexer: &mut LexerConfig) {
//!         lexer.ignore_whitespace().match_number(NumberFormat::default());
//!     }
//!
//!     fn init_parser(&self, def: &mut ParserDefinition) {
//!         def.add_names().add_common_literals().add_arithmetic_operators();
//!     }
//! }
//!
//! let unit = Parser::new(&Calc).parse("1 + 2 * 3", "calc.txt");
//! assert_eq!(unit.dump(), "(block (stmt (+ 1 (* 2 3))))");
//! ```

mod binding_power;
mod definition;
mod parselet;
pub mod parselets;
mod parser;
mod recovery;
mod session;
mod unit;

pub use binding_power::BindingPower;
pub use definition::{IntoSymbol, ParserDefinition};
pub use parselet::{
    InfixFn, InfixParselet, PrefixFn, PrefixParselet, StatementFn, StatementParselet,
};
pub use parser::{Grammar, Parser, ParserOptions};
pub use recovery::{synchronize, RecoveryPolicy, RecoverySet};
pub use session::ParseSession;
pub use unit::TranslationUnit;

#[cfg(test)]
mod tests;

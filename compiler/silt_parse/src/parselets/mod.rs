//! Built-in parselets.
//!
//! Grammars usually reach these through the [`ParserDefinition`] helpers
//! (`infix_left`, `group`, `call`, ...) rather than constructing them.
//!
//! [`ParserDefinition`]: crate::ParserDefinition

mod block;
mod call;
mod group;
mod lambda;
mod literal;
mod operator;

pub use block::BlockParselet;
pub use call::CallParselet;
pub use group::GroupParselet;
pub use lambda::LambdaParselet;
pub use literal::{
    parse_number, BooleanParselet, NameParselet, NumberError, NumberParselet, StringParselet,
};
pub use operator::{
    BinaryOperatorParselet, PostfixOperatorParselet, PrefixOperatorParselet, TernaryParselet,
};

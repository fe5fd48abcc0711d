//! Statement blocks.

use silt_ir::{NodeId, Symbol, Token};

use crate::{ParseSession, PrefixParselet};

/// Statements from the opening token up to `terminator`, e.g. `{ a; b }`
/// or a whole file from SOF to EOF.
#[derive(Copy, Clone, Debug)]
pub struct BlockParselet {
    terminator: Symbol,
    separator: Option<Symbol>,
    wrap_expressions: bool,
}

impl BlockParselet {
    pub fn new(terminator: Symbol, separator: Option<Symbol>) -> Self {
        BlockParselet {
            terminator,
            separator,
            wrap_expressions: false,
        }
    }

    /// Wrap bare expressions in expression statements.
    #[must_use]
    pub fn wrap_expressions(mut self, wrap: bool) -> Self {
        self.wrap_expressions = wrap;
        self
    }
}

impl PrefixParselet for BlockParselet {
    fn parse(&self, session: &mut ParseSession<'_>, token: Token) -> NodeId {
        session.parse_block_contents(
            token.range(),
            self.separator,
            self.terminator,
            self.wrap_expressions,
        )
    }
}

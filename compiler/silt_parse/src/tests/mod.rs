//! Parser engine tests.
//!
//! - `expressions`: literals, operators, precedence and associativity
//! - `errors`: diagnostics and block recovery
//! - `properties`: property tests over generated operator chains
//! - `grammar`: top-level modes, statements and registration

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod expressions;
mod properties;

use crate::{BindingPower, Grammar, Parser, ParserDefinition, ParserOptions, TranslationUnit};
use silt_ir::Symbol;
use silt_lexer::{LexerConfig, NumberFormat};

/// Expression grammar with a `;`-separated top-level block. Negative number
/// literals are on, so `a -1` lexes as `a` then the literal `-1` and is
/// rejected, while `a - 1` subtracts.
#[derive(Default)]
pub(crate) struct TestGrammar {
    pub options: ParserOptions,
}

impl Grammar for TestGrammar {
    fn init_lexer(&self, lexer: &mut LexerConfig) {
        lexer
            .ignore_whitespace()
            .match_boolean(true)
            .match_string("'", "'")
            .match_number(NumberFormat::default())
            .ignore_line_comment("//")
            .ignore_block_comment("/*", "*/");
    }

    fn init_parser(&self, def: &mut ParserDefinition) {
        def.add_names();
        def.call("(", ")", ",");
        def.ternary("?", ":", BindingPower::CONDITIONAL);

        def.add_arithmetic_operators()
            .add_bit_operators()
            .add_logical_operators()
            .add_common_literals()
            .add_common_assignment_operators();

        def.prefix("not");
        def.postfix("!");
        def.postfix(".");
        def.infix_right("^", BindingPower::EXPONENT);
        def.infix_left("->", BindingPower::PRODUCT);

        def.block("{", "}", Some(";"), true);
        def.block(Symbol::SOF, Symbol::EOF, Some(";"), false);
    }

    fn options(&self) -> ParserOptions {
        self.options.clone()
    }
}

/// Names and arithmetic only, with no SOF block.
pub(crate) struct ExprGrammar {
    pub options: ParserOptions,
}

impl Grammar for ExprGrammar {
    fn init_lexer(&self, lexer: &mut LexerConfig) {
        lexer
            .ignore_whitespace()
            .match_number(NumberFormat::default() - NumberFormat::NEGATIVE);
    }

    fn init_parser(&self, def: &mut ParserDefinition) {
        def.add_names().add_common_literals().add_arithmetic_operators();
    }

    fn options(&self) -> ParserOptions {
        self.options.clone()
    }
}

pub(crate) fn parse(source: &str) -> TranslationUnit {
    Parser::new(&TestGrammar::default()).parse(source, "test.txt")
}

/// Dump of a parse that must not report anything.
pub(crate) fn dump_ok(source: &str) -> String {
    let unit = parse(source);
    assert!(
        unit.messages().is_empty(),
        "unexpected messages for {source:?}: {:?}",
        unit.messages().as_slice()
    );
    unit.dump()
}

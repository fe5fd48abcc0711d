//! Operator parselets.

use silt_ir::{NodeId, NodeKind, Symbol, Token};

use crate::{BindingPower, InfixParselet, ParseSession, PrefixParselet};

/// `op operand`. The operand is parsed at the operator's binding power, so
/// `-a * b` is `(-a) * b` while `-a!` is `-(a!)`.
#[derive(Copy, Clone, Debug)]
pub struct PrefixOperatorParselet {
    binding_power: BindingPower,
}

impl PrefixOperatorParselet {
    pub fn new(binding_power: BindingPower) -> Self {
        PrefixOperatorParselet { binding_power }
    }
}

impl PrefixParselet for PrefixOperatorParselet {
    fn parse(&self, session: &mut ParseSession<'_>, token: Token) -> NodeId {
        let operand = session.parse_expression_with(self.binding_power);
        let range = session.range_from(token.range());
        session.alloc(
            NodeKind::Prefix {
                op: token.symbol,
                operand,
            },
            range,
        )
    }
}

/// `operand op`.
#[derive(Copy, Clone, Debug)]
pub struct PostfixOperatorParselet {
    binding_power: BindingPower,
}

impl PostfixOperatorParselet {
    pub fn new(binding_power: BindingPower) -> Self {
        PostfixOperatorParselet { binding_power }
    }
}

impl InfixParselet for PostfixOperatorParselet {
    fn parse(&self, session: &mut ParseSession<'_>, left: NodeId, token: Token) -> NodeId {
        let range = session.range_from(session.ast().range(left));
        session.alloc(
            NodeKind::Postfix {
                op: token.symbol,
                operand: left,
            },
            range,
        )
    }

    fn binding_power(&self) -> BindingPower {
        self.binding_power
    }
}

/// `left op right`.
#[derive(Copy, Clone, Debug)]
pub struct BinaryOperatorParselet {
    binding_power: BindingPower,
    right_associative: bool,
}

impl BinaryOperatorParselet {
    pub fn left(binding_power: BindingPower) -> Self {
        BinaryOperatorParselet {
            binding_power,
            right_associative: false,
        }
    }

    pub fn right(binding_power: BindingPower) -> Self {
        BinaryOperatorParselet {
            binding_power,
            right_associative: true,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        self.right_associative
    }
}

impl InfixParselet for BinaryOperatorParselet {
    fn parse(&self, session: &mut ParseSession<'_>, left: NodeId, token: Token) -> NodeId {
        // An equal-power operator on the right only continues this operand
        // when the threshold sits below our own power.
        let threshold = if self.right_associative {
            self.binding_power.minus_one()
        } else {
            self.binding_power
        };
        let right = session.parse_expression_with(threshold);
        let range = session.range_from(session.ast().range(left));
        session.alloc(
            NodeKind::Binary {
                left,
                op: token.symbol,
                right,
            },
            range,
        )
    }

    fn binding_power(&self) -> BindingPower {
        self.binding_power
    }
}

/// `condition ? then : else`. The else branch chains to the right, so
/// `a ? b : c ? d : e` nests in the else branch.
#[derive(Copy, Clone, Debug)]
pub struct TernaryParselet {
    second: Symbol,
    binding_power: BindingPower,
}

impl TernaryParselet {
    pub fn new(second: Symbol, binding_power: BindingPower) -> Self {
        TernaryParselet {
            second,
            binding_power,
        }
    }
}

impl InfixParselet for TernaryParselet {
    fn parse(&self, session: &mut ParseSession<'_>, left: NodeId, _token: Token) -> NodeId {
        let then_branch = session.parse_expression();
        session.consume_expected(self.second);
        let else_branch = session.parse_expression_with(self.binding_power.minus_one());
        let range = session.range_from(session.ast().range(left));
        session.alloc(
            NodeKind::Ternary {
                condition: left,
                then_branch,
                else_branch,
            },
            range,
        )
    }

    fn binding_power(&self) -> BindingPower {
        self.binding_power
    }
}

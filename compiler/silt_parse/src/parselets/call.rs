//! Call expressions.

use silt_ir::{NodeId, NodeKind, Symbol, Token};

use crate::{BindingPower, InfixParselet, ParseSession};

/// `callee open arg (separator arg)* close`, e.g. `f(a, b)`.
#[derive(Copy, Clone, Debug)]
pub struct CallParselet {
    close: Symbol,
    separator: Symbol,
    binding_power: BindingPower,
}

impl CallParselet {
    pub fn new(close: Symbol, separator: Symbol) -> Self {
        CallParselet {
            close,
            separator,
            binding_power: BindingPower::CALL,
        }
    }

    #[must_use]
    pub fn with_binding_power(mut self, binding_power: BindingPower) -> Self {
        self.binding_power = binding_power;
        self
    }
}

impl InfixParselet for CallParselet {
    fn parse(&self, session: &mut ParseSession<'_>, left: NodeId, _token: Token) -> NodeId {
        let args = session.parse_separated(self.separator, self.close, BindingPower::NONE);
        let range = session.range_from(session.ast().range(left));
        session.alloc(NodeKind::Call { callee: left, args }, range)
    }

    fn binding_power(&self) -> BindingPower {
        self.binding_power
    }
}

//! Lambda expressions.

use silt_diagnostic::ErrorCode;
use silt_ir::{NodeId, NodeKind, Token};

use crate::{BindingPower, InfixParselet, ParseSession};

/// `params arrow body`. The parameters are a name, a parenthesized name or
/// a tuple of names such as `(a, b)`. The body extends as far right as
/// possible.
#[derive(Copy, Clone, Debug)]
pub struct LambdaParselet {
    binding_power: BindingPower,
}

impl LambdaParselet {
    pub fn new(binding_power: BindingPower) -> Self {
        LambdaParselet { binding_power }
    }
}

fn is_name(session: &ParseSession<'_>, node: NodeId) -> bool {
    matches!(session.ast().kind(node), NodeKind::Name(_))
}

/// Parameter nodes named by `left`, or `None` if it is not a parameter list.
/// A tuple's items become the parameters themselves.
fn parameters(session: &ParseSession<'_>, left: NodeId) -> Option<Vec<NodeId>> {
    match session.ast().kind(left) {
        NodeKind::Name(_) => Some(vec![left]),
        NodeKind::Group(inner) if is_name(session, *inner) => Some(vec![left]),
        NodeKind::Tuple(items) if items.iter().all(|&item| is_name(session, item)) => {
            Some(items.clone())
        }
        _ => None,
    }
}

impl InfixParselet for LambdaParselet {
    fn parse(&self, session: &mut ParseSession<'_>, left: NodeId, _token: Token) -> NodeId {
        let params = parameters(session, left);
        let body = session.parse_expression_with(self.binding_power.minus_one());
        let range = session.range_from(session.ast().range(left));
        let valid = params.is_some();
        let node = session.alloc(
            NodeKind::Lambda {
                params: params.unwrap_or_else(|| vec![left]),
                body,
            },
            range,
        );
        if !valid {
            let param_range = session.ast().range(left);
            let message = session.error(
                ErrorCode::E1005,
                "lambda parameters must be names",
                param_range,
            );
            session.ast_mut().attach_message(left, message);
        }
        node
    }

    fn binding_power(&self) -> BindingPower {
        self.binding_power
    }
}

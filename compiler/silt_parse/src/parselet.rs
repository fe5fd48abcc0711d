//! Parselet traits and closure adapters.
//!
//! A parselet is invoked with the token that selected it already consumed.
//! Parselets never fail: problems are reported through the session and an
//! Invalid node is returned in place of the construct.

use silt_ir::{NodeId, Token};

use crate::{BindingPower, ParseSession};

/// Parses a construct that starts with its token: literals, names, prefix
/// operators, groups, blocks.
pub trait PrefixParselet: Send + Sync {
    fn parse(&self, session: &mut ParseSession<'_>, token: Token) -> NodeId;
}

/// Parses a construct that continues an already-parsed left operand: binary
/// and postfix operators, calls, ternaries.
pub trait InfixParselet: Send + Sync {
    fn parse(&self, session: &mut ParseSession<'_>, left: NodeId, token: Token) -> NodeId;

    fn binding_power(&self) -> BindingPower;
}

/// Parses a construct only valid in statement position, e.g. `let`.
pub trait StatementParselet: Send + Sync {
    fn parse(&self, session: &mut ParseSession<'_>, token: Token) -> NodeId;
}

/// Prefix parselet backed by a closure.
pub struct PrefixFn<F>(pub F);

impl<F> PrefixParselet for PrefixFn<F>
where
    F: Fn(&mut ParseSession<'_>, Token) -> NodeId + Send + Sync,
{
    fn parse(&self, session: &mut ParseSession<'_>, token: Token) -> NodeId {
        (self.0)(session, token)
    }
}

/// Infix parselet backed by a closure.
pub struct InfixFn<F> {
    pub binding_power: BindingPower,
    pub parse: F,
}

impl<F> InfixParselet for InfixFn<F>
where
    F: Fn(&mut ParseSession<'_>, NodeId, Token) -> NodeId + Send + Sync,
{
    fn parse(&self, session: &mut ParseSession<'_>, left: NodeId, token: Token) -> NodeId {
        (self.parse)(session, left, token)
    }

    fn binding_power(&self) -> BindingPower {
        self.binding_power
    }
}

/// Statement parselet backed by a closure.
pub struct StatementFn<F>(pub F);

impl<F> StatementParselet for StatementFn<F>
where
    F: Fn(&mut ParseSession<'_>, Token) -> NodeId + Send + Sync,
{
    fn parse(&self, session: &mut ParseSession<'_>, token: Token) -> NodeId {
        (self.0)(session, token)
    }
}

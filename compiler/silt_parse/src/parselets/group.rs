//! Parenthesized expressions and tuples.

use silt_ir::{NodeId, NodeKind, Symbol, Token};

use crate::{BindingPower, ParseSession, PrefixParselet};

/// `open expression close`.
///
/// By default the inner expression is returned as is, with its range
/// widened over the delimiters; [`GroupParselet::wrapped`] keeps an explicit
/// [`NodeKind::Group`] instead. With a separator, `()`, `(a,)` and
/// `(a, b)` become [`NodeKind::Tuple`]s while `(a)` stays a group.
#[derive(Copy, Clone, Debug)]
pub struct GroupParselet {
    close: Symbol,
    separator: Option<Symbol>,
    wrap: bool,
}

impl GroupParselet {
    pub fn new(close: Symbol) -> Self {
        GroupParselet {
            close,
            separator: None,
            wrap: false,
        }
    }

    #[must_use]
    pub fn wrapped(mut self) -> Self {
        self.wrap = true;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: Symbol) -> Self {
        self.separator = Some(separator);
        self
    }
}

impl PrefixParselet for GroupParselet {
    fn parse(&self, session: &mut ParseSession<'_>, token: Token) -> NodeId {
        if self.separator.is_some() && session.matches(self.close) {
            let range = session.range_from(token.range());
            return session.alloc(NodeKind::Tuple(Vec::new()), range);
        }

        let inner = session.parse_expression();

        if let Some(separator) = self.separator {
            if session.matches(separator) {
                let mut items = vec![inner];
                items.extend(session.parse_separated(separator, self.close, BindingPower::NONE));
                let range = session.range_from(token.range());
                return session.alloc(NodeKind::Tuple(items), range);
            }
        }

        session.consume_expected(self.close);
        let range = session.range_from(token.range());
        if self.wrap {
            session.alloc(NodeKind::Group(inner), range)
        } else {
            session.ast_mut().set_range(inner, range);
            inner
        }
    }
}

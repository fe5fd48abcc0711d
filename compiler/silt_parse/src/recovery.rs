//! Error recovery for the parser.
//!
//! Provides symbol sets and synchronization for continuing a block after a
//! statement failed to parse.

use silt_ir::Symbol;
use smallvec::SmallVec;
use tracing::debug;

use crate::ParseSession;

/// What a block does after a statement produced an error.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RecoveryPolicy {
    /// Skip tokens, without further diagnostics, until the block's separator,
    /// its terminator or end of input.
    #[default]
    SkipToBoundary,
    /// Continue with the next token as if nothing happened. One bad token
    /// may then cascade into several diagnostics.
    None,
}

/// Small set of symbols to synchronize on. Grammars register symbols at
/// runtime, so this is a list rather than a bitset over a fixed enum.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecoverySet(SmallVec<[Symbol; 4]>);

impl RecoverySet {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, symbol: Symbol) -> Self {
        if !self.0.contains(&symbol) {
            self.0.push(symbol);
        }
        self
    }

    #[must_use]
    pub fn with_opt(self, symbol: Option<Symbol>) -> Self {
        match symbol {
            Some(symbol) => self.with(symbol),
            None => self,
        }
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0.contains(&symbol)
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.0
    }
}

/// Consume tokens until the lookahead is in `recovery` or at EOF.
///
/// Returns `true` if a recovery token was found, `false` if EOF was reached.
pub fn synchronize(session: &mut ParseSession<'_>, recovery: &RecoverySet) -> bool {
    let mut skipped = 0usize;
    let found = loop {
        let next = session.lookahead(0);
        if recovery.contains(next.symbol) {
            break true;
        }
        if next.is(Symbol::EOF) {
            break false;
        }
        session.consume();
        skipped += 1;
    };
    if skipped > 0 {
        debug!(skipped, found, "recovery skipped tokens");
    }
    found
}

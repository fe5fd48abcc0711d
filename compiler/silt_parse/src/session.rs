//! Per-parse engine state.
//!
//! A [`ParseSession`] owns the lexer (and through it the document), the
//! lookahead buffer and the AST under construction. Parselets receive it
//! mutably and use it to consume tokens, recurse into expressions and
//! report problems.

use std::collections::VecDeque;

use silt_diagnostic::{ErrorCode, Severity, SourceDocument};
use silt_ir::{Ast, LineCol, MessageId, NodeId, NodeKind, SharedSymbols, SourceRange, Symbol, Token};
use silt_lexer::Lexer;
use silt_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::recovery::{synchronize, RecoverySet};
use crate::{BindingPower, Parser, ParserDefinition, ParserOptions, RecoveryPolicy};

/// Mutable state of one parse.
pub struct ParseSession<'p> {
    parser: &'p Parser,
    lexer: Lexer<'p>,
    lookahead: VecDeque<Token>,
    ast: Ast,
    previous: Token,
}

impl<'p> ParseSession<'p> {
    pub(crate) fn new(parser: &'p Parser, document: SourceDocument) -> Self {
        ParseSession {
            parser,
            lexer: Lexer::new(parser.lexer_config(), document),
            lookahead: VecDeque::new(),
            ast: Ast::new(),
            previous: Token::empty(Symbol::SOF, 0, LineCol::START),
        }
    }

    pub(crate) fn finish(self) -> (Ast, SourceDocument) {
        (self.ast, self.lexer.into_document())
    }

    pub fn definition(&self) -> &'p ParserDefinition {
        self.parser.definition()
    }

    pub fn options(&self) -> &'p ParserOptions {
        self.parser.options()
    }

    pub fn symbols(&self) -> &'p SharedSymbols {
        self.parser.symbols()
    }

    pub fn document(&self) -> &SourceDocument {
        self.lexer.document()
    }

    pub fn source(&self) -> &str {
        self.lexer.source()
    }

    /// Payload text of a token.
    pub fn text(&self, token: &Token) -> &str {
        token.text(self.lexer.source())
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn ast_mut(&mut self) -> &mut Ast {
        &mut self.ast
    }

    pub fn alloc(&mut self, kind: NodeKind, range: SourceRange) -> NodeId {
        self.ast.alloc(kind, range)
    }

    /// Name node for an identifier token, interned in this parse's tree.
    pub fn name_node(&mut self, token: &Token) -> NodeId {
        let name = self.ast.intern_name(token.text(self.lexer.source()));
        self.ast.alloc(NodeKind::Name(name), token.range())
    }

    /// Invalid node standing in for `token`.
    pub fn invalid(&mut self, token: &Token) -> NodeId {
        self.ast.alloc(NodeKind::Invalid(token.symbol), token.range())
    }

    /// The most recently consumed token.
    pub fn previous(&self) -> Token {
        self.previous
    }

    /// Range from `start` through the most recently consumed token.
    pub fn range_from(&self, start: SourceRange) -> SourceRange {
        start.merge(self.previous.range())
    }

    pub fn error_count(&self) -> usize {
        self.lexer.document().messages().error_count()
    }

    // Lookahead

    fn fill(&mut self, n: usize) {
        while self.lookahead.len() <= n {
            let token = self.lexer.next_token();
            if token.is(Symbol::INVALID) {
                // Already reported by the lexer; step over the bad char.
                self.lexer.skip_invalid();
            }
            self.lookahead.push_back(token);
        }
    }

    /// The `n`th unconsumed token, lexing as far ahead as needed. Past the
    /// end of input this is EOF.
    pub fn lookahead(&mut self, n: usize) -> Token {
        self.fill(n);
        self.lookahead[n]
    }

    /// Remove and return the next token.
    pub fn consume(&mut self) -> Token {
        self.fill(0);
        let token = self
            .lookahead
            .pop_front()
            .unwrap_or_else(|| Token::empty(Symbol::EOF, self.lexer.offset(), self.lexer.line_col()));
        trace!(symbol = ?token.symbol, span = ?token.span, "consume");
        self.previous = token;
        token
    }

    /// Consume `n` tokens.
    pub fn consume_many(&mut self, n: usize) -> Vec<Token> {
        (0..n).map(|_| self.consume()).collect()
    }

    pub fn is_match(&mut self, symbol: Symbol) -> bool {
        self.lookahead(0).is(symbol)
    }

    pub fn is_match_at(&mut self, symbol: Symbol, n: usize) -> bool {
        self.lookahead(n).is(symbol)
    }

    /// Whether the next tokens are exactly `symbols`, in order.
    pub fn is_match_seq(&mut self, symbols: &[Symbol]) -> bool {
        symbols
            .iter()
            .enumerate()
            .all(|(n, &symbol)| self.is_match_at(symbol, n))
    }

    /// Consume the next token if it is `symbol`.
    pub fn matches(&mut self, symbol: Symbol) -> bool {
        if self.is_match(symbol) {
            self.consume();
            true
        } else {
            false
        }
    }

    /// Consume the next token if it is any of `symbols`, returning which.
    pub fn matches_any(&mut self, symbols: &[Symbol]) -> Option<Symbol> {
        let next = self.lookahead(0).symbol;
        if symbols.contains(&next) {
            self.consume();
            Some(next)
        } else {
            None
        }
    }

    /// Consume a token of kind `expected`.
    ///
    /// On a mismatch nothing is consumed: an "expected X, found Y" error is
    /// reported and a zero-width Invalid token at the lookahead position is
    /// returned instead. An Invalid lookahead was already reported by the
    /// lexer and is not reported twice.
    pub fn consume_expected(&mut self, expected: Symbol) -> Token {
        let next = self.lookahead(0);
        if next.is(expected) {
            return self.consume();
        }
        if !next.is(Symbol::INVALID) {
            let text = format!(
                "expected {}, found {}",
                self.describe_symbol(expected),
                self.describe_token(&next)
            );
            self.error(ErrorCode::E1001, text, next.range());
        }
        Token::empty(Symbol::INVALID, next.span.start, next.start)
    }

    /// How a symbol is named in diagnostics.
    pub fn describe_symbol(&self, symbol: Symbol) -> String {
        if symbol == Symbol::EOF {
            "end of input".to_owned()
        } else {
            self.symbols().describe(symbol)
        }
    }

    pub fn describe_token(&self, token: &Token) -> String {
        self.describe_symbol(token.symbol)
    }

    // Diagnostics

    /// Record an error against the document.
    pub fn error(&mut self, code: ErrorCode, text: impl Into<String>, range: SourceRange) -> MessageId {
        self.lexer.document_mut().error(code, text, range)
    }

    /// Record a grammar-level message anchored to `node` and attach it.
    pub fn report(&mut self, node: NodeId, severity: Severity, text: impl Into<String>) -> MessageId {
        let range = self.ast.range(node);
        let id = self
            .lexer
            .document_mut()
            .report(ErrorCode::E9000, severity, text, range);
        self.ast.attach_message(node, id);
        id
    }

    /// Invalid node for `token` carrying a fresh error.
    pub fn invalid_with_error(&mut self, token: &Token, code: ErrorCode, text: impl Into<String>) -> NodeId {
        let message = self.error(code, text, token.range());
        let node = self.invalid(token);
        self.ast.attach_message(node, message);
        node
    }

    // Expressions

    /// Parse an expression that accepts every registered operator.
    pub fn parse_expression(&mut self) -> NodeId {
        self.parse_expression_with(BindingPower::NONE)
    }

    /// Parse an expression, continuing only through operators that bind
    /// tighter than `min`.
    pub fn parse_expression_with(&mut self, min: BindingPower) -> NodeId {
        ensure_sufficient_stack(|| self.parse_expression_inner(min))
    }

    fn parse_expression_inner(&mut self, min: BindingPower) -> NodeId {
        let definition = self.definition();
        let token = self.consume();
        let mut left = self.parse_prefix(token);

        loop {
            let next = self.lookahead(0);
            if definition.binding_power(next.symbol) <= min {
                break;
            }
            let token = self.consume();
            let Some(parselet) = definition.infix_parselet(token.symbol) else {
                debug!(symbol = ?token.symbol, "no infix parselet");
                let text = format!("could not parse {}", self.describe_token(&token));
                self.error(ErrorCode::E1003, text, token.range());
                break;
            };
            left = parselet.parse(self, left, token);
        }

        left
    }

    fn parse_prefix(&mut self, token: Token) -> NodeId {
        if token.is(Symbol::EOF) {
            return self.invalid_with_error(
                &token,
                ErrorCode::E1002,
                "expected expression, found end of input",
            );
        }
        if token.is(Symbol::INVALID) {
            return self.invalid(&token);
        }
        match self.definition().prefix_parselet(token.symbol) {
            Some(parselet) => parselet.parse(self, token),
            None => {
                debug!(symbol = ?token.symbol, "no prefix parselet");
                let text = format!(
                    "could not parse prefix {}",
                    self.describe_token(&token)
                );
                self.invalid_with_error(&token, ErrorCode::E1002, text)
            }
        }
    }

    // Statements

    /// Parse a statement: a registered statement parselet for the lookahead,
    /// otherwise an expression, wrapped in an expression statement when
    /// `wrap` is set.
    pub fn parse_statement(&mut self, wrap: bool) -> NodeId {
        let next = self.lookahead(0);
        if let Some(parselet) = self.definition().statement_parselet(next.symbol) {
            let token = self.consume();
            return ensure_sufficient_stack(|| parselet.parse(self, token));
        }
        let expression = self.parse_expression();
        if wrap {
            let range = self.ast.range(expression);
            self.alloc(NodeKind::ExprStmt(expression), range)
        } else {
            expression
        }
    }

    /// Parse statements up to `terminator` into a block node whose range
    /// starts at `open`.
    ///
    /// Separators are optional before the terminator and repeated ones are
    /// skipped. Input skipped while recovering from a bad statement becomes
    /// one Invalid child. The block always ends at end of input; a missing
    /// terminator is reported.
    pub fn parse_block_contents(
        &mut self,
        open: SourceRange,
        separator: Option<Symbol>,
        terminator: Symbol,
        wrap: bool,
    ) -> NodeId {
        let mut children = Vec::new();

        loop {
            if let Some(separator) = separator {
                while self.matches(separator) {}
            }
            if self.matches(terminator) {
                break;
            }
            let next = self.lookahead(0);
            if next.is(Symbol::EOF) {
                let text = format!(
                    "expected {} before end of input",
                    self.describe_symbol(terminator)
                );
                self.error(ErrorCode::E1004, text, next.range());
                break;
            }

            let errors_before = self.error_count();
            children.push(self.parse_statement(wrap));
            let failed = self.error_count() > errors_before;

            let Some(separator) = separator else {
                continue;
            };
            // EOF is reported as a missing terminator at the top of the loop.
            if self.matches(separator) || self.is_match(terminator) || self.is_match(Symbol::EOF) {
                continue;
            }
            let next = self.lookahead(0);
            if !failed && !next.is(Symbol::INVALID) {
                let text = format!(
                    "expected {} or {}, found {}",
                    self.describe_symbol(separator),
                    self.describe_symbol(terminator),
                    self.describe_token(&next)
                );
                self.error(ErrorCode::E1001, text, next.range());
            }
            if self.options().recovery == RecoveryPolicy::SkipToBoundary {
                let boundary = RecoverySet::new().with(separator).with(terminator);
                children.push(self.skip_to_boundary(&boundary));
            }
        }

        let range = self.range_from(open);
        self.alloc(
            NodeKind::Block {
                children,
                separator,
                terminator,
            },
            range,
        )
    }

    /// Skip to `boundary` and stand in an Invalid node for what was skipped.
    /// The lookahead must not already be in `boundary` or at EOF.
    fn skip_to_boundary(&mut self, boundary: &RecoverySet) -> NodeId {
        let first = self.lookahead(0);
        synchronize(self, boundary);
        let range = first.range().merge(self.previous.range());
        self.alloc(NodeKind::Invalid(first.symbol), range)
    }

    // Sequences

    /// Parse `item (separator item)* terminator`, consuming the terminator.
    /// A trailing separator is allowed; an empty list is just the terminator.
    pub fn parse_separated(
        &mut self,
        separator: Symbol,
        terminator: Symbol,
        bp: BindingPower,
    ) -> Vec<NodeId> {
        let mut items = Vec::new();
        loop {
            if self.matches(terminator) {
                break;
            }
            let next = self.lookahead(0);
            if next.is(Symbol::EOF) {
                let text = format!(
                    "expected {} before end of input",
                    self.describe_symbol(terminator)
                );
                self.error(ErrorCode::E1004, text, next.range());
                break;
            }
            items.push(self.parse_expression_with(bp));
            if !self.matches(separator) {
                self.consume_expected(terminator);
                break;
            }
        }
        items
    }

    /// Parse separated items until one of `terminators` is next. The
    /// terminator is left unconsumed.
    pub fn parse_separated_until(
        &mut self,
        separator: Symbol,
        bp: BindingPower,
        terminators: &[Symbol],
    ) -> Vec<NodeId> {
        let mut items = Vec::new();
        loop {
            let next = self.lookahead(0);
            if terminators.contains(&next.symbol) || next.is(Symbol::EOF) {
                break;
            }
            items.push(self.parse_expression_with(bp));
            if !self.matches(separator) {
                break;
            }
        }
        items
    }

    /// Parse juxtaposed expressions until one of `terminators` is next,
    /// which is left unconsumed.
    pub fn parse_list(&mut self, bp: BindingPower, terminators: &[Symbol]) -> Vec<NodeId> {
        let mut items = Vec::new();
        loop {
            let next = self.lookahead(0);
            if terminators.contains(&next.symbol) || next.is(Symbol::EOF) {
                break;
            }
            items.push(self.parse_expression_with(bp));
        }
        items
    }
}

impl std::fmt::Debug for ParseSession<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseSession")
            .field("lookahead", &self.lookahead)
            .field("nodes", &self.ast.len())
            .field("previous", &self.previous)
            .finish_non_exhaustive()
    }
}

//! Parselet registry.
//!
//! A [`ParserDefinition`] maps symbols to prefix, infix/postfix and
//! statement parselets. Grammars fill it once from
//! [`Grammar::init_parser`](crate::Grammar::init_parser); it is read-only
//! while parsing.
//!
//! Symbols can be named by spelling (`"+"`, `"let"`) or by [`Symbol`].
//! Every spelling used here is registered with the lexer as a punctuator
//! when the parser is built; spellings starting with `#` name abstract kinds
//! such as `"#name"` and are never lexed.

use rustc_hash::FxHashMap;
use silt_ir::{NodeId, SharedSymbols, Symbol, Token};

use crate::parselets::{
    BinaryOperatorParselet, BlockParselet, BooleanParselet, CallParselet, GroupParselet,
    LambdaParselet, NameParselet, NumberParselet, PostfixOperatorParselet,
    PrefixOperatorParselet, StringParselet, TernaryParselet,
};
use crate::{
    BindingPower, InfixFn, InfixParselet, ParseSession, PrefixFn, PrefixParselet, StatementFn,
    StatementParselet,
};

/// Anything that names a symbol in a [`ParserDefinition`].
pub trait IntoSymbol {
    fn into_symbol(self, definition: &mut ParserDefinition) -> Symbol;
}

impl IntoSymbol for Symbol {
    fn into_symbol(self, definition: &mut ParserDefinition) -> Symbol {
        let name = definition.symbols.name(self);
        definition.note_spelling(name);
        self
    }
}

impl IntoSymbol for &str {
    fn into_symbol(self, definition: &mut ParserDefinition) -> Symbol {
        let symbol = definition.symbols.intern(self);
        definition.note_spelling(self);
        symbol
    }
}

/// Symbol-keyed parselet tables.
pub struct ParserDefinition {
    symbols: SharedSymbols,
    prefix: FxHashMap<Symbol, Box<dyn PrefixParselet>>,
    infix: FxHashMap<Symbol, Box<dyn InfixParselet>>,
    statements: FxHashMap<Symbol, Box<dyn StatementParselet>>,
    spellings: Vec<String>,
}

impl ParserDefinition {
    pub fn new(symbols: SharedSymbols) -> Self {
        ParserDefinition {
            symbols,
            prefix: FxHashMap::default(),
            infix: FxHashMap::default(),
            statements: FxHashMap::default(),
            spellings: Vec::new(),
        }
    }

    pub fn symbols(&self) -> &SharedSymbols {
        &self.symbols
    }

    /// Resolve a symbol, registering its spelling as a punctuator.
    pub fn symbol(&mut self, symbol: impl IntoSymbol) -> Symbol {
        symbol.into_symbol(self)
    }

    fn note_spelling(&mut self, text: &str) {
        if text.is_empty() || text.starts_with('#') {
            return;
        }
        if !self.spellings.iter().any(|s| s == text) {
            self.spellings.push(text.to_owned());
        }
    }

    /// Spellings the lexer must know, in registration order.
    pub fn punctuator_spellings(&self) -> impl Iterator<Item = &str> {
        self.spellings.iter().map(String::as_str)
    }

    pub fn prefix_parselet(&self, symbol: Symbol) -> Option<&dyn PrefixParselet> {
        self.prefix.get(&symbol).map(|p| &**p)
    }

    pub fn infix_parselet(&self, symbol: Symbol) -> Option<&dyn InfixParselet> {
        self.infix.get(&symbol).map(|p| &**p)
    }

    pub fn statement_parselet(&self, symbol: Symbol) -> Option<&dyn StatementParselet> {
        self.statements.get(&symbol).map(|p| &**p)
    }

    /// Binding power of the infix parselet for `symbol`, or
    /// [`BindingPower::NONE`] when there is none.
    pub fn binding_power(&self, symbol: Symbol) -> BindingPower {
        self.infix
            .get(&symbol)
            .map_or(BindingPower::NONE, |p| p.binding_power())
    }

    // Raw registration

    /// Register a prefix parselet, replacing any previous one for the symbol.
    pub fn register_prefix(
        &mut self,
        symbol: impl IntoSymbol,
        parselet: impl PrefixParselet + 'static,
    ) -> Symbol {
        let symbol = self.symbol(symbol);
        self.prefix.insert(symbol, Box::new(parselet));
        symbol
    }

    /// Register an infix or postfix parselet, replacing any previous one.
    pub fn register_infix(
        &mut self,
        symbol: impl IntoSymbol,
        parselet: impl InfixParselet + 'static,
    ) -> Symbol {
        let symbol = self.symbol(symbol);
        self.infix.insert(symbol, Box::new(parselet));
        symbol
    }

    pub fn register_statement(
        &mut self,
        symbol: impl IntoSymbol,
        parselet: impl StatementParselet + 'static,
    ) -> Symbol {
        let symbol = self.symbol(symbol);
        self.statements.insert(symbol, Box::new(parselet));
        symbol
    }

    pub fn prefix_fn<F>(&mut self, symbol: impl IntoSymbol, parse: F) -> Symbol
    where
        F: Fn(&mut ParseSession<'_>, Token) -> NodeId + Send + Sync + 'static,
    {
        self.register_prefix(symbol, PrefixFn(parse))
    }

    pub fn infix_fn<F>(
        &mut self,
        symbol: impl IntoSymbol,
        binding_power: BindingPower,
        parse: F,
    ) -> Symbol
    where
        F: Fn(&mut ParseSession<'_>, NodeId, Token) -> NodeId + Send + Sync + 'static,
    {
        self.register_infix(
            symbol,
            InfixFn {
                binding_power,
                parse,
            },
        )
    }

    pub fn statement_fn<F>(&mut self, symbol: impl IntoSymbol, parse: F) -> Symbol
    where
        F: Fn(&mut ParseSession<'_>, Token) -> NodeId + Send + Sync + 'static,
    {
        self.register_statement(symbol, StatementFn(parse))
    }

    // Common shapes

    /// Unary prefix operator at [`BindingPower::PREFIX`].
    pub fn prefix(&mut self, symbol: impl IntoSymbol) -> Symbol {
        self.prefix_with(symbol, BindingPower::PREFIX)
    }

    /// Unary prefix operator whose operand is parsed at `binding_power`.
    pub fn prefix_with(&mut self, symbol: impl IntoSymbol, binding_power: BindingPower) -> Symbol {
        self.register_prefix(symbol, PrefixOperatorParselet::new(binding_power))
    }

    /// Unary postfix operator at [`BindingPower::POSTFIX`].
    pub fn postfix(&mut self, symbol: impl IntoSymbol) -> Symbol {
        self.postfix_with(symbol, BindingPower::POSTFIX)
    }

    pub fn postfix_with(&mut self, symbol: impl IntoSymbol, binding_power: BindingPower) -> Symbol {
        self.register_infix(symbol, PostfixOperatorParselet::new(binding_power))
    }

    /// Left-associative binary operator: `a @ b @ c` is `(a @ b) @ c`.
    pub fn infix_left(&mut self, symbol: impl IntoSymbol, binding_power: BindingPower) -> Symbol {
        self.register_infix(symbol, BinaryOperatorParselet::left(binding_power))
    }

    /// Right-associative binary operator: `a @ b @ c` is `a @ (b @ c)`.
    pub fn infix_right(&mut self, symbol: impl IntoSymbol, binding_power: BindingPower) -> Symbol {
        self.register_infix(symbol, BinaryOperatorParselet::right(binding_power))
    }

    /// `condition first then second else`, e.g. `a ? b : c`.
    pub fn ternary(
        &mut self,
        first: impl IntoSymbol,
        second: impl IntoSymbol,
        binding_power: BindingPower,
    ) -> Symbol {
        let second = self.symbol(second);
        self.register_infix(first, TernaryParselet::new(second, binding_power))
    }

    /// Parenthesized expression that leaves no node of its own.
    pub fn group(&mut self, open: impl IntoSymbol, close: impl IntoSymbol) -> Symbol {
        let close = self.symbol(close);
        self.register_prefix(open, GroupParselet::new(close))
    }

    /// Parenthesized expression kept as an explicit group node.
    pub fn group_wrapped(&mut self, open: impl IntoSymbol, close: impl IntoSymbol) -> Symbol {
        let close = self.symbol(close);
        self.register_prefix(open, GroupParselet::new(close).wrapped())
    }

    /// Parenthesized expression that becomes a tuple when its items are
    /// separated, e.g. a lambda parameter list `(a, b)`.
    pub fn tuple(
        &mut self,
        open: impl IntoSymbol,
        close: impl IntoSymbol,
        separator: impl IntoSymbol,
    ) -> Symbol {
        let close = self.symbol(close);
        let separator = self.symbol(separator);
        self.register_prefix(open, GroupParselet::new(close).with_separator(separator))
    }

    /// `callee(arg, ...)` at [`BindingPower::CALL`].
    pub fn call(
        &mut self,
        open: impl IntoSymbol,
        close: impl IntoSymbol,
        separator: impl IntoSymbol,
    ) -> Symbol {
        let close = self.symbol(close);
        let separator = self.symbol(separator);
        self.register_infix(open, CallParselet::new(close, separator))
    }

    /// `param -> body`, `(param) -> body` or, with [`tuple`](Self::tuple)
    /// grouping, `(a, b) -> body`.
    pub fn lambda(&mut self, arrow: impl IntoSymbol) -> Symbol {
        self.register_infix(arrow, LambdaParselet::new(BindingPower::ASSIGNMENT))
    }

    /// Statements from `start` up to `terminator`, optionally separated.
    /// With `wrap_expressions`, bare expressions become expression statements.
    pub fn block(
        &mut self,
        start: impl IntoSymbol,
        terminator: impl IntoSymbol,
        separator: Option<&str>,
        wrap_expressions: bool,
    ) -> Symbol {
        let terminator = self.symbol(terminator);
        let separator = separator.map(|s| self.symbol(s));
        self.register_prefix(
            start,
            BlockParselet::new(terminator, separator).wrap_expressions(wrap_expressions),
        )
    }

    // Operator bundles

    /// Prefix `+ -`, grouping `( )`, `+ -` at SUM and `* /` at PRODUCT.
    pub fn add_arithmetic_operators(&mut self) -> &mut Self {
        self.prefix("+");
        self.prefix("-");
        self.group("(", ")");
        self.infix_left("+", BindingPower::SUM);
        self.infix_left("-", BindingPower::SUM);
        self.infix_left("*", BindingPower::PRODUCT);
        self.infix_left("/", BindingPower::PRODUCT);
        self
    }

    /// Prefix `!`, `&&` at PRODUCT and `||` at SUM.
    pub fn add_logical_operators(&mut self) -> &mut Self {
        self.prefix("!");
        self.infix_left("&&", BindingPower::PRODUCT);
        self.infix_left("||", BindingPower::SUM);
        self
    }

    /// Prefix `~`, `& << >>` at PRODUCT and `|` at SUM.
    pub fn add_bit_operators(&mut self) -> &mut Self {
        self.prefix("~");
        self.infix_left("&", BindingPower::PRODUCT);
        self.infix_left("<<", BindingPower::PRODUCT);
        self.infix_left(">>", BindingPower::PRODUCT);
        self.infix_left("|", BindingPower::SUM);
        self
    }

    /// Number, boolean and string literal parselets.
    pub fn add_common_literals(&mut self) -> &mut Self {
        self.register_prefix(Symbol::NUMBER, NumberParselet::new());
        self.register_prefix(Symbol::BOOLEAN, BooleanParselet);
        self.register_prefix(Symbol::STRING, StringParselet::new());
        self
    }

    /// `= += -= *= /=` right-associative at ASSIGNMENT, plus prefix and
    /// postfix `++ --`.
    pub fn add_common_assignment_operators(&mut self) -> &mut Self {
        for op in ["=", "+=", "-=", "*=", "/="] {
            self.infix_right(op, BindingPower::ASSIGNMENT);
        }
        for op in ["++", "--"] {
            self.prefix(op);
            self.postfix(op);
        }
        self
    }

    /// Identifiers as [`Name`](silt_ir::NodeKind::Name) nodes.
    pub fn add_names(&mut self) -> &mut Self {
        self.register_prefix(Symbol::NAME, NameParselet);
        self
    }
}

impl std::fmt::Debug for ParserDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserDefinition")
            .field("prefix", &self.prefix.len())
            .field("infix", &self.infix.len())
            .field("statements", &self.statements.len())
            .finish_non_exhaustive()
    }
}

//! Grammar-supplied lexer configuration.

use silt_ir::{PunctuatorSet, SharedSymbols, Symbol};

use crate::{
    BlockCommentIgnore, BooleanMatcher, DefaultNameAdvancer, IgnoreMatcher, LineCommentIgnore,
    Matcher, NameAdvancer, NumberFormat, NumberMatcher, PredicateIgnore, StrIgnore,
    StringMatcher, WhitespaceIgnore,
};

/// Matchers, ignore rules, punctuators and the name policy of a grammar.
///
/// Built once when a parser is constructed and read-only afterwards.
/// Registration order of matchers and ignore rules is significant: the first
/// one that matches wins.
pub struct LexerConfig {
    symbols: SharedSymbols,
    punctuators: PunctuatorSet,
    matchers: Vec<Box<dyn Matcher>>,
    ignores: Vec<Box<dyn IgnoreMatcher>>,
    name_advancer: Box<dyn NameAdvancer>,
}

impl LexerConfig {
    pub fn new(symbols: SharedSymbols) -> Self {
        LexerConfig {
            symbols,
            punctuators: PunctuatorSet::new(),
            matchers: Vec::new(),
            ignores: Vec::new(),
            name_advancer: Box::new(DefaultNameAdvancer),
        }
    }

    pub fn symbols(&self) -> &SharedSymbols {
        &self.symbols
    }

    pub fn punctuators(&self) -> &PunctuatorSet {
        &self.punctuators
    }

    pub fn matchers(&self) -> &[Box<dyn Matcher>] {
        &self.matchers
    }

    pub fn ignores(&self) -> &[Box<dyn IgnoreMatcher>] {
        &self.ignores
    }

    pub fn name_advancer(&self) -> &dyn NameAdvancer {
        &*self.name_advancer
    }

    /// Register a punctuator spelled `text` and return its symbol.
    /// Registering the same spelling twice is a no-op.
    pub fn add_symbol(&mut self, text: &str) -> Symbol {
        let symbol = self.symbols.intern(text);
        self.punctuators.insert(symbol, text, false);
        symbol
    }

    pub fn add_symbols(&mut self, texts: &[&str]) -> &mut Self {
        for text in texts {
            self.add_symbol(text);
        }
        self
    }

    /// Register a keyword matched regardless of ASCII case, e.g. `AND`/`and`.
    pub fn add_keyword_ignore_case(&mut self, text: &str) -> Symbol {
        let symbol = self.symbols.intern(text);
        self.punctuators.insert(symbol, text, true);
        symbol
    }

    pub fn is_punctuator(&self, symbol: Symbol) -> bool {
        self.punctuators.is_punctuator(symbol)
    }

    pub fn add_matcher(&mut self, matcher: impl Matcher + 'static) -> &mut Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    pub fn add_ignore(&mut self, ignore: impl IgnoreMatcher + 'static) -> &mut Self {
        self.ignores.push(Box::new(ignore));
        self
    }

    pub fn use_name_advancer(&mut self, advancer: impl NameAdvancer + 'static) -> &mut Self {
        self.name_advancer = Box::new(advancer);
        self
    }

    pub fn ignore_whitespace(&mut self) -> &mut Self {
        self.add_ignore(WhitespaceIgnore)
    }

    pub fn ignore_char(&mut self, c: char) -> &mut Self {
        self.add_ignore(StrIgnore::new(c.to_string()))
    }

    pub fn ignore_str(&mut self, text: &str) -> &mut Self {
        self.add_ignore(StrIgnore::new(text))
    }

    pub fn ignore_predicate(
        &mut self,
        predicate: impl Fn(char) -> bool + Send + Sync + 'static,
    ) -> &mut Self {
        self.add_ignore(PredicateIgnore::new(predicate))
    }

    pub fn ignore_line_comment(&mut self, start: &str) -> &mut Self {
        self.add_ignore(LineCommentIgnore::new(start))
    }

    pub fn ignore_block_comment(&mut self, open: &str, close: &str) -> &mut Self {
        self.add_ignore(BlockCommentIgnore::new(open, close))
    }

    pub fn match_number(&mut self, format: NumberFormat) -> &mut Self {
        self.add_matcher(NumberMatcher::new(format))
    }

    pub fn match_number_with(&mut self, matcher: NumberMatcher) -> &mut Self {
        self.add_matcher(matcher)
    }

    pub fn match_string(&mut self, open: &str, close: &str) -> &mut Self {
        self.add_matcher(StringMatcher::new(open, close))
    }

    pub fn match_string_with(&mut self, matcher: StringMatcher) -> &mut Self {
        self.add_matcher(matcher)
    }

    pub fn match_boolean(&mut self, ignore_case: bool) -> &mut Self {
        self.add_matcher(BooleanMatcher::new(ignore_case))
    }
}

impl std::fmt::Debug for LexerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexerConfig")
            .field("punctuators", &self.punctuators.len())
            .field("matchers", &self.matchers.len())
            .field("ignores", &self.ignores.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;

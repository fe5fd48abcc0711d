//! Grammar hooks and the parser entry point.

use silt_diagnostic::{ErrorCode, SourceDocument};
use silt_ir::{SharedSymbols, Symbol};
use silt_lexer::LexerConfig;
use tracing::debug;

use crate::{ParseSession, ParserDefinition, RecoveryPolicy, TranslationUnit};

/// A language built on the engine.
///
/// Both hooks run once, when a [`Parser`] is constructed. Every spelling
/// used in `init_parser` is added to the lexer's punctuators afterwards, so
/// `init_lexer` only needs the matchers, ignore rules and extra keywords.
pub trait Grammar {
    fn init_lexer(&self, lexer: &mut LexerConfig);

    fn init_parser(&self, definition: &mut ParserDefinition);

    fn options(&self) -> ParserOptions {
        ParserOptions::default()
    }
}

/// Behavioral switches of a parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserOptions {
    /// Parse the input as a statement sequence rather than one expression.
    /// Ignored when the grammar registers a prefix parselet for SOF.
    pub statements_at_top_level: bool,
    /// Report input left over after the root construct.
    pub enforce_eof: bool,
    pub recovery: RecoveryPolicy,
}

impl ParserOptions {
    #[must_use]
    pub fn with_statements_at_top_level(mut self, enabled: bool) -> Self {
        self.statements_at_top_level = enabled;
        self
    }

    #[must_use]
    pub fn with_enforce_eof(mut self, enabled: bool) -> Self {
        self.enforce_eof = enabled;
        self
    }

    #[must_use]
    pub fn with_recovery(mut self, recovery: RecoveryPolicy) -> Self {
        self.recovery = recovery;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            statements_at_top_level: true,
            enforce_eof: true,
            recovery: RecoveryPolicy::default(),
        }
    }
}

/// A configured parser. Immutable once built; every [`Parser::parse`] call
/// runs in its own session.
pub struct Parser {
    symbols: SharedSymbols,
    lexer_config: LexerConfig,
    definition: ParserDefinition,
    options: ParserOptions,
}

impl Parser {
    pub fn new<G: Grammar + ?Sized>(grammar: &G) -> Self {
        let symbols = SharedSymbols::new();

        let mut lexer_config = LexerConfig::new(symbols.clone());
        grammar.init_lexer(&mut lexer_config);

        let mut definition = ParserDefinition::new(symbols.clone());
        grammar.init_parser(&mut definition);
        for spelling in definition.punctuator_spellings() {
            lexer_config.add_symbol(spelling);
        }

        debug!(
            punctuators = lexer_config.punctuators().len(),
            symbols = symbols.len(),
            "parser built"
        );

        Parser {
            symbols,
            lexer_config,
            definition,
            options: grammar.options(),
        }
    }

    pub fn symbols(&self) -> &SharedSymbols {
        &self.symbols
    }

    pub fn lexer_config(&self) -> &LexerConfig {
        &self.lexer_config
    }

    pub fn definition(&self) -> &ParserDefinition {
        &self.definition
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse `source`. Never fails: problems are messages in the returned
    /// unit's document.
    #[tracing::instrument(level = "debug", skip_all, fields(filename = %filename))]
    pub fn parse(&self, source: impl Into<String>, filename: &str) -> TranslationUnit {
        let document = SourceDocument::new(filename, source);
        let mut session = ParseSession::new(self, document);

        let root = if self.definition.prefix_parselet(Symbol::SOF).is_some() {
            session.parse_expression()
        } else {
            let sof = session.consume();
            if self.options.statements_at_top_level {
                session.parse_block_contents(sof.range(), None, Symbol::EOF, true)
            } else {
                session.parse_expression()
            }
        };

        if self.options.enforce_eof {
            let next = session.lookahead(0);
            if !next.is(Symbol::EOF) {
                let text = format!("unexpected trailing {}", session.describe_token(&next));
                session.error(ErrorCode::E1006, text, next.range());
            }
        }

        let (ast, document) = session.finish();
        debug!(
            nodes = ast.len(),
            errors = document.messages().error_count(),
            "parse finished"
        );
        TranslationUnit::new(ast, root, document, self.symbols.clone())
    }
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("lexer_config", &self.lexer_config)
            .field("definition", &self.definition)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

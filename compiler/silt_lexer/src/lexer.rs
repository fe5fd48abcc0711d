//! Character cursor and token production.

use silt_diagnostic::{ErrorCode, SourceDocument};
use silt_ir::{LineCol, MessageId, SourceRange, Span, Symbol, Token};
use tracing::trace;

use crate::LexerConfig;

/// Saved cursor position, used to build tokens and ranges.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mark {
    pub offset: u32,
    pub at: LineCol,
}

/// Lexer over one document.
///
/// The lexer owns the document for the duration of a parse so matchers can
/// report into its diagnostics; [`Lexer::into_document`] hands it back.
pub struct Lexer<'c> {
    config: &'c LexerConfig,
    document: SourceDocument,
    offset: usize,
    line: u32,
    column: u32,
    started: bool,
    finished: bool,
}

impl<'c> Lexer<'c> {
    pub fn new(config: &'c LexerConfig, document: SourceDocument) -> Self {
        Lexer {
            config,
            document,
            offset: 0,
            line: 1,
            column: 1,
            started: false,
            finished: false,
        }
    }

    pub fn config(&self) -> &'c LexerConfig {
        self.config
    }

    pub fn document(&self) -> &SourceDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut SourceDocument {
        &mut self.document
    }

    pub fn into_document(self) -> SourceDocument {
        self.document
    }

    pub fn source(&self) -> &str {
        self.document.source()
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &str {
        self.document.source().get(self.offset..).unwrap_or("")
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.document.source().len()
    }

    /// Char under the cursor, `'\0'` at end of input.
    #[inline]
    pub fn current(&self) -> char {
        self.peek(0)
    }

    /// The `n`th char after the cursor (`peek(0)` is the current one), or
    /// `'\0'` past the end.
    pub fn peek(&self, n: usize) -> char {
        self.rest().chars().nth(n).unwrap_or('\0')
    }

    /// Whether the input at the cursor starts with `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.rest().starts_with(text)
    }

    /// Like [`Lexer::is_match`] but ignoring ASCII case.
    pub fn is_match_ignore_case(&self, text: &str) -> bool {
        self.rest()
            .get(..text.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(text))
    }

    #[inline]
    pub fn offset(&self) -> u32 {
        u32::try_from(self.offset).unwrap_or(u32::MAX)
    }

    #[inline]
    pub fn line_col(&self) -> LineCol {
        LineCol::new(self.line, self.column)
    }

    pub fn mark(&self) -> Mark {
        Mark {
            offset: self.offset(),
            at: self.line_col(),
        }
    }

    /// Consume one char, keeping line and column current. `\n`, `\r\n` and a
    /// lone `\r` each end a line.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.offset += c.len_utf8();
        let ends_line = c == '\n' || (c == '\r' && self.current() != '\n');
        if ends_line {
            self.line += 1;
            self.column = 1;
        } else if c != '\r' {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume up to `n` chars.
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consume chars while `predicate` holds. Returns how many were consumed.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while !self.is_at_end() && predicate(self.current()) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Consume `text` if the input starts with it.
    pub fn advance_if(&mut self, text: &str) -> bool {
        if self.is_match(text) {
            self.advance_by(text.chars().count());
            true
        } else {
            false
        }
    }

    pub fn range_from(&self, mark: Mark) -> SourceRange {
        SourceRange::new(
            Span::new(mark.offset, self.offset()),
            mark.at,
            self.line_col(),
        )
    }

    /// Token of kind `symbol` covering everything consumed since `mark`.
    pub fn token_from(&self, mark: Mark, symbol: Symbol) -> Token {
        Token::new(
            symbol,
            Span::new(mark.offset, self.offset()),
            mark.at,
            self.line_col(),
        )
    }

    /// Record an error against the document.
    pub fn report(&mut self, code: ErrorCode, text: impl Into<String>, range: SourceRange) -> MessageId {
        self.document.error(code, text, range)
    }

    /// Skip the char an Invalid token was produced for.
    pub fn skip_invalid(&mut self) {
        self.advance();
    }

    /// Produce the next token.
    ///
    /// The first call yields SOF. Once input is exhausted every call yields a
    /// zero-width EOF. An unrecognized char is reported once and returned as
    /// an Invalid token covering it; the cursor is left on that char, so the
    /// caller decides whether to [`skip_invalid`](Lexer::skip_invalid).
    pub fn next_token(&mut self) -> Token {
        if !self.started {
            self.started = true;
            return Token::empty(Symbol::SOF, self.offset(), self.line_col());
        }

        let config = self.config;
        'scan: while !self.is_at_end() {
            let current = self.current();

            for ignore in config.ignores() {
                if ignore.matches(self, current) {
                    let before = self.offset;
                    ignore.advance(self);
                    if self.offset > before {
                        continue 'scan;
                    }
                }
            }

            for matcher in config.matchers() {
                if matcher.matches(self, current) {
                    let before = self.offset;
                    let token = matcher.build(self);
                    // A matcher that consumed nothing would be asked again forever.
                    if self.offset > before {
                        trace!(symbol = ?token.symbol, span = ?token.span, "literal");
                        return token;
                    }
                }
            }

            let mark = self.mark();
            let advancer = config.name_advancer();
            let punctuator = config
                .punctuators()
                .iter()
                .filter(|p| !p.text.starts_with(|c| advancer.is_name_start(c)))
                .find(|p| p.is_prefix_of(self.rest()))
                .map(|p| (p.symbol, p.char_len));
            if let Some((symbol, len)) = punctuator {
                self.advance_by(len);
                let token = self.token_from(mark, symbol);
                trace!(symbol = ?token.symbol, span = ?token.span, "punctuator");
                return token;
            }

            if advancer.is_name_start(current) {
                advancer.advance(self);
                if self.offset() == mark.offset {
                    self.advance();
                }
                let word = Span::new(mark.offset, self.offset()).slice(self.source());
                let symbol = config
                    .punctuators()
                    .find_spelling(word)
                    .unwrap_or(Symbol::NAME);
                let token = self.token_from(mark, symbol);
                trace!(symbol = ?token.symbol, span = ?token.span, "name");
                return token;
            }

            let end = LineCol::new(self.line, self.column + 1);
            let width = u32::try_from(current.len_utf8()).unwrap_or(1);
            let span = Span::new(mark.offset, mark.offset + width);
            let range = SourceRange::new(span, mark.at, end);
            self.report(
                ErrorCode::E0001,
                format!("invalid character {current:?}"),
                range,
            );
            trace!(span = ?span, "invalid character");
            return Token::new(Symbol::INVALID, span, mark.at, end);
        }

        Token::empty(Symbol::EOF, self.offset(), self.line_col())
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Tokens up to and including the first EOF. Invalid characters are
    /// skipped after their token is yielded.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is(Symbol::INVALID) {
            self.skip_invalid();
        }
        self.finished = token.is(Symbol::EOF);
        Some(token)
    }
}

//! Silt: grammar-driven Pratt parsing.
//!
//! This crate bundles the silt crates behind one dependency:
//!
//! - [`ir`]: spans, symbols, tokens and the AST arena
//! - [`diagnostic`]: messages, documents and terminal rendering
//! - [`lexer`]: the configurable lexer and its matchers
//! - [`parse`]: parselets, grammars and the parser engine
//!
//! Most users implement [`Grammar`], build a [`Parser`] once and call
//! [`Parser::parse`] per source buffer.

use std::sync::Once;

pub use silt_diagnostic as diagnostic;
pub use silt_ir as ir;
pub use silt_lexer as lexer;
pub use silt_parse as parse;

pub use silt_diagnostic::{ColorMode, ErrorCode, Message, Severity, SourceDocument, TerminalEmitter};
pub use silt_ir::{Ast, Literal, Name, NodeId, NodeKind, Symbol, Visitor};
pub use silt_lexer::{LexerConfig, NumberFormat};
pub use silt_parse::{
    BindingPower, Grammar, ParseSession, Parser, ParserDefinition, ParserOptions,
    RecoveryPolicy, TranslationUnit,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=silt_parse=debug`, or
/// `RUST_LOG=silt_lexer=trace` to see every token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if installed.is_err() {
                tracing::debug!("a global subscriber was already installed");
            }
        }
    });
}

/// Render every message of `unit` with source snippets, in position order,
/// followed by a summary line when anything was reported.
pub fn render_messages(unit: &TranslationUnit, mode: ColorMode) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    emitter.emit_document(unit.document());
    let messages = unit.messages();
    if !messages.is_empty() {
        emitter.emit_summary(messages.error_count(), messages.warning_count());
    }
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

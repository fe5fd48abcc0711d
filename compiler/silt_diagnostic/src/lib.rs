//! Diagnostics for silt.
//!
//! Every lexer and parser failure becomes a [`Message`] appended to the
//! [`SourceDocument`] being parsed; nothing in the parse path returns an
//! error or panics on malformed input.

mod document;
mod emitter;
mod error_code;
mod message;

pub use document::{Diagnostics, SourceDocument};
pub use emitter::{ColorMode, TerminalEmitter};
pub use error_code::{ErrorCode, UnknownErrorCode};
pub use message::{Message, Severity};

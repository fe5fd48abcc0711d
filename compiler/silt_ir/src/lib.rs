//! Silt IR - shared parsing substrate
//!
//! This crate contains the data structures every other silt crate agrees on:
//! - Spans, line/column positions and source ranges
//! - Interned symbols, per-tree identifier names and the punctuator set
//! - Tokens produced by the lexer
//! - The arena-allocated AST, its visitor and an S-expression dump
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: token kinds are `Symbol(u32)`, identifiers are
//!   `Name(u32)` in the tree that uses them
//! - **Flatten Everything**: nodes refer to each other by `NodeId(u32)`
//! - **Observe, don't own**: parent links are ids, never owning references

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod ids;
mod name;
mod punctuator;
mod span;
mod symbol;
mod token;
pub mod visitor;

pub use ast::{dump, Ast, Literal, NodeKind};
pub use ids::{MessageId, NodeId};
pub use name::{Name, NameTable};
pub use punctuator::{Punctuator, PunctuatorSet};
pub use span::{LineCol, SourceRange, Span, SpanError};
pub use symbol::{InternError, SharedSymbols, Symbol, SymbolTable};
pub use token::Token;
pub use visitor::{walk_node, Visitor};

static_assert_size!(Span, 8);
static_assert_size!(Symbol, 4);
static_assert_size!(Name, 4);
static_assert_size!(NodeId, 4);
static_assert_size!(Token, 36);

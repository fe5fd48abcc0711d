//! Parse results.

use silt_diagnostic::{Diagnostics, Message, SourceDocument};
use silt_ir::{dump, Ast, NodeId, SharedSymbols};

/// Root node, the tree it lives in, and the document with every message
/// reported while parsing.
#[derive(Clone, Debug)]
pub struct TranslationUnit {
    ast: Ast,
    root: NodeId,
    document: SourceDocument,
    symbols: SharedSymbols,
}

impl TranslationUnit {
    pub(crate) fn new(
        ast: Ast,
        root: NodeId,
        document: SourceDocument,
        symbols: SharedSymbols,
    ) -> Self {
        TranslationUnit {
            ast,
            root,
            document,
            symbols,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    pub fn document(&self) -> &SourceDocument {
        &self.document
    }

    pub fn source(&self) -> &str {
        self.document.source()
    }

    pub fn symbols(&self) -> &SharedSymbols {
        &self.symbols
    }

    pub fn messages(&self) -> &Diagnostics {
        self.document.messages()
    }

    pub fn has_errors(&self) -> bool {
        self.messages().has_errors()
    }

    /// Messages attached to `node`.
    pub fn node_messages(&self, node: NodeId) -> impl Iterator<Item = &Message> + '_ {
        self.ast
            .messages(node)
            .iter()
            .filter_map(|&id| self.messages().get(id))
    }

    /// The whole tree as an S-expression.
    pub fn dump(&self) -> String {
        self.dump_node(self.root)
    }

    pub fn dump_node(&self, node: NodeId) -> String {
        dump(&self.ast, &self.symbols, node)
    }

    /// Split into the tree and the document.
    pub fn into_parts(self) -> (Ast, NodeId, SourceDocument) {
        (self.ast, self.root, self.document)
    }
}

//! AST visitor.
//!
//! Override [`Visitor::visit_node`] to act on nodes; call [`walk_node`] from
//! the override to keep descending. The visitor may mutate its own state but
//! never the tree.
//!
//! ```text
//! struct CountNames(usize);
//!
//! impl Visitor for CountNames {
//!     fn visit_node(&mut self, ast: &Ast, id: NodeId) {
//!         if matches!(ast.kind(id), NodeKind::Name(_)) {
//!             self.0 += 1;
//!         }
//!         walk_node(self, ast, id);
//!     }
//! }
//! ```

use crate::{Ast, NodeId};

pub trait Visitor {
    fn visit_node(&mut self, ast: &Ast, id: NodeId) {
        walk_node(self, ast, id);
    }
}

/// Visit every child of `id` in source order.
pub fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, ast: &Ast, id: NodeId) {
    for child in ast.children(id) {
        visitor.visit_node(ast, child);
    }
}

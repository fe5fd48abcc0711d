//! S-expression rendering of a tree.
//!
//! ```text
//! a + b * -c!   =>   (+ a (* b (- (c !))))
//! ```

use super::{Ast, Literal, NodeKind};
use crate::{NodeId, SymbolTable};
use std::fmt::Write;

/// Render `root` and its descendants as an S-expression.
pub fn dump(ast: &Ast, symbols: &SymbolTable, root: NodeId) -> String {
    let mut out = String::new();
    write_node(&mut out, ast, symbols, root);
    out
}

fn write_list(out: &mut String, ast: &Ast, symbols: &SymbolTable, head: &str, items: &[NodeId]) {
    out.push('(');
    out.push_str(head);
    for &item in items {
        out.push(' ');
        write_node(out, ast, symbols, item);
    }
    out.push(')');
}

fn write_node(out: &mut String, ast: &Ast, symbols: &SymbolTable, id: NodeId) {
    match ast.kind(id) {
        NodeKind::Invalid(_) => out.push_str("<invalid>"),
        NodeKind::Literal(literal) => write_literal(out, literal),
        NodeKind::Name(name) => out.push_str(ast.name(*name)),
        NodeKind::Prefix { op, operand } => {
            write_list(out, ast, symbols, symbols.name(*op), &[*operand]);
        }
        NodeKind::Postfix { op, operand } => {
            out.push('(');
            write_node(out, ast, symbols, *operand);
            out.push(' ');
            out.push_str(symbols.name(*op));
            out.push(')');
        }
        NodeKind::Binary { left, op, right } => {
            write_list(out, ast, symbols, symbols.name(*op), &[*left, *right]);
        }
        NodeKind::Ternary {
            condition,
            then_branch,
            else_branch,
        } => write_list(
            out,
            ast,
            symbols,
            "?:",
            &[*condition, *then_branch, *else_branch],
        ),
        NodeKind::Group(inner) => write_list(out, ast, symbols, "group", &[*inner]),
        NodeKind::Tuple(items) => write_list(out, ast, symbols, "tuple", items),
        NodeKind::Call { callee, args } => {
            out.push_str("(call ");
            write_node(out, ast, symbols, *callee);
            for &arg in args {
                out.push(' ');
                write_node(out, ast, symbols, arg);
            }
            out.push(')');
        }
        NodeKind::Lambda { params, body } => {
            out.push_str("(lambda (");
            for (i, &param) in params.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_node(out, ast, symbols, param);
            }
            out.push_str(") ");
            write_node(out, ast, symbols, *body);
            out.push(')');
        }
        NodeKind::Block { children, .. } => write_list(out, ast, symbols, "block", children),
        NodeKind::ExprStmt(inner) => write_list(out, ast, symbols, "stmt", &[*inner]),
        NodeKind::Tagged { tag, children } => {
            write_list(out, ast, symbols, symbols.name(*tag), children);
        }
    }
}

fn write_literal(out: &mut String, literal: &Literal) {
    // Writing to a String cannot fail.
    let _ = match literal {
        Literal::Unsigned(v) => write!(out, "{v}"),
        Literal::Signed(v) => write!(out, "{v}"),
        Literal::Float(v) => write!(out, "{v:?}"),
        Literal::Str(v) => write!(out, "{v:?}"),
        Literal::Bool(v) => write!(out, "{v}"),
    };
}

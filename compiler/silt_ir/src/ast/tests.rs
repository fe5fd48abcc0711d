use super::*;
use crate::visitor::{walk_node, Visitor};
use crate::{LineCol, Span, SymbolTable};
use pretty_assertions::assert_eq;

fn at(start: u32, end: u32) -> SourceRange {
    SourceRange::new(
        Span::new(start, end),
        LineCol::new(1, start + 1),
        LineCol::new(1, end + 1),
    )
}

/// Builds `a + b * 2` by hand.
fn sample(symbols: &SymbolTable) -> (Ast, NodeId) {
    let mut ast = Ast::new();
    let a = ast.intern_name("a");
    let a = ast.alloc(NodeKind::Name(a), at(0, 1));
    let b = ast.intern_name("b");
    let b = ast.alloc(NodeKind::Name(b), at(4, 5));
    let two = ast.alloc(NodeKind::Literal(Literal::Unsigned(2)), at(8, 9));
    let product = ast.alloc(
        NodeKind::Binary {
            left: b,
            op: symbols.intern("*"),
            right: two,
        },
        at(4, 9),
    );
    let sum = ast.alloc(
        NodeKind::Binary {
            left: a,
            op: symbols.intern("+"),
            right: product,
        },
        at(0, 9),
    );
    (ast, sum)
}

#[test]
fn test_alloc_links_parents() {
    let symbols = SymbolTable::new();
    let (ast, root) = sample(&symbols);
    assert_eq!(ast.parent(root), None);
    let children = ast.children(root);
    assert_eq!(children.len(), 2);
    for child in children {
        assert_eq!(ast.parent(child), Some(root));
    }
}

#[test]
fn test_ancestors_walks_to_root() {
    let symbols = SymbolTable::new();
    let (ast, root) = sample(&symbols);
    let product = ast.children(root)[1];
    let two = ast.children(product)[1];
    assert_eq!(ast.ancestors(two).collect::<Vec<_>>(), vec![product, root]);
}

#[test]
fn test_dump() {
    let symbols = SymbolTable::new();
    let (ast, root) = sample(&symbols);
    assert_eq!(dump(&ast, &symbols, root), "(+ a (* b 2))");
}

#[test]
fn test_dump_literals() {
    let symbols = SymbolTable::new();
    let mut ast = Ast::new();
    let items = vec![
        ast.alloc(NodeKind::Literal(Literal::Signed(-4)), at(0, 2)),
        ast.alloc(NodeKind::Literal(Literal::Float(310_000.0)), at(3, 8)),
        ast.alloc(NodeKind::Literal(Literal::Str("hi\n".into())), at(9, 14)),
        ast.alloc(NodeKind::Literal(Literal::Bool(true)), at(15, 19)),
        ast.alloc(NodeKind::Invalid(crate::Symbol::INVALID), at(20, 21)),
    ];
    let block = ast.alloc(
        NodeKind::Block {
            children: items,
            separator: None,
            terminator: crate::Symbol::EOF,
        },
        at(0, 21),
    );
    assert_eq!(
        dump(&ast, &symbols, block),
        r#"(block -4 310000.0 "hi\n" true <invalid>)"#
    );
}

#[test]
fn test_messages_attach_in_order() {
    let symbols = SymbolTable::new();
    let (mut ast, root) = sample(&symbols);
    ast.attach_message(root, MessageId::from_raw(3));
    ast.attach_message(root, MessageId::from_raw(1));
    assert_eq!(
        ast.messages(root),
        &[MessageId::from_raw(3), MessageId::from_raw(1)]
    );
}

#[test]
fn test_visitor_counts_names() {
    struct CountNames(usize);

    impl Visitor for CountNames {
        fn visit_node(&mut self, ast: &Ast, id: NodeId) {
            if matches!(ast.kind(id), NodeKind::Name(_)) {
                self.0 += 1;
            }
            walk_node(self, ast, id);
        }
    }

    let symbols = SymbolTable::new();
    let (ast, root) = sample(&symbols);
    let mut counter = CountNames(0);
    counter.visit_node(&ast, root);
    assert_eq!(counter.0, 2);
}

#[test]
fn test_names_are_per_tree() {
    let symbols = SymbolTable::new();
    let before = symbols.len();
    let (ast, root) = sample(&symbols);
    let a = ast.children(root)[0];
    let NodeKind::Name(name) = ast.kind(a) else {
        panic!("expected a name, got {:?}", ast.kind(a));
    };
    assert_eq!(ast.name(*name), "a");
    assert_eq!(ast.names().len(), 2);
    assert_eq!(symbols.get("a"), None);
    assert_eq!(symbols.len(), before + 2);
}

use proptest::prelude::*;
use silt_ir::{Ast, LineCol, Literal, NodeId, NodeKind};

use super::{parse, ExprGrammar};
use crate::{Parser, ParserOptions, TranslationUnit};

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,5}".prop_filter("keyword", |s| {
        !matches!(s.as_str(), "not" | "true" | "false")
    })
}

fn fold_left(op: &str, names: &[String]) -> String {
    let mut out = names[0].clone();
    for name in &names[1..] {
        out = format!("({op} {out} {name})");
    }
    out
}

fn fold_right(op: &str, names: &[String]) -> String {
    let mut out = names[names.len() - 1].clone();
    for name in names[..names.len() - 1].iter().rev() {
        out = format!("({op} {name} {out})");
    }
    out
}

fn parse_arith(source: &str) -> TranslationUnit {
    let options = ParserOptions::default().with_statements_at_top_level(false);
    Parser::new(&ExprGrammar { options }).parse(source, "prop.txt")
}

fn eval(ast: &Ast, symbols: &silt_ir::SymbolTable, id: NodeId) -> i128 {
    match ast.kind(id) {
        NodeKind::Literal(Literal::Unsigned(v)) => i128::from(*v),
        NodeKind::Binary { left, op, right } => {
            let (l, r) = (eval(ast, symbols, *left), eval(ast, symbols, *right));
            match symbols.name(*op) {
                "+" => l + r,
                "-" => l - r,
                "*" => l * r,
                other => panic!("unexpected operator {other}"),
            }
        }
        other => panic!("unexpected node {other:?}"),
    }
}

/// Left to right, products before sums.
fn reference(operands: &[u8], ops: &[char]) -> i128 {
    let mut total = 0i128;
    let mut sign = 1i128;
    let mut term = i128::from(operands[0]);
    for (op, &operand) in ops.iter().zip(&operands[1..]) {
        match op {
            '*' => term *= i128::from(operand),
            _ => {
                total += sign * term;
                sign = if *op == '-' { -1 } else { 1 };
                term = i128::from(operand);
            }
        }
    }
    total + sign * term
}

proptest! {
    #[test]
    fn left_associative_operators_chain_left(names in prop::collection::vec(name(), 1..8)) {
        let source = names.join(" * ");
        let unit = parse(&source);
        prop_assert!(unit.messages().is_empty());
        prop_assert_eq!(unit.dump(), format!("(block {})", fold_left("*", &names)));
    }

    #[test]
    fn right_associative_operators_chain_right(names in prop::collection::vec(name(), 1..8)) {
        let source = names.join(" ^ ");
        let unit = parse(&source);
        prop_assert!(unit.messages().is_empty());
        prop_assert_eq!(unit.dump(), format!("(block {})", fold_right("^", &names)));
    }

    #[test]
    fn postfix_operators_nest(count in 1usize..10) {
        let source = format!("a{}", "!".repeat(count));
        let unit = parse(&source);
        let expected = (0..count).fold("a".to_owned(), |inner, _| format!("({inner} !)"));
        prop_assert_eq!(unit.dump(), format!("(block {expected})"));
    }

    #[test]
    fn products_bind_tighter_than_sums(
        operands in prop::collection::vec(0u8..50, 1..10),
        ops in prop::collection::vec(prop::sample::select(vec!['+', '-', '*']), 9),
    ) {
        let ops = &ops[..operands.len() - 1];
        let mut source = operands[0].to_string();
        for (op, operand) in ops.iter().zip(&operands[1..]) {
            source.push_str(&format!(" {op} {operand}"));
        }
        let unit = parse_arith(&source);
        prop_assert!(unit.messages().is_empty(), "{:?}", unit.messages());
        let value = eval(unit.ast(), unit.symbols(), unit.root());
        prop_assert_eq!(value, reference(&operands, ops));
    }

    #[test]
    fn ranges_agree_with_offsets(
        names in prop::collection::vec(name(), 1..6),
        breaks in prop::collection::vec(prop::sample::select(vec![" ", "\n", "\r\n", "  \n "]), 5),
    ) {
        let mut source = names[0].clone();
        for (name, ws) in names[1..].iter().zip(&breaks) {
            source.push_str(ws);
            source.push('+');
            source.push(' ');
            source.push_str(name);
        }
        let unit = parse(&source);
        prop_assert!(unit.messages().is_empty());
        let ast = unit.ast();
        for id in ast.ids() {
            let range = ast.range(id);
            let start = range.span.start as usize;
            let end = range.span.end as usize;
            prop_assert_eq!(range.start, LineCol::START.advance_over(&source[..start]));
            prop_assert_eq!(range.end, LineCol::START.advance_over(&source[..end]));
            if let NodeKind::Name(name) = ast.kind(id) {
                prop_assert_eq!(&source[start..end], ast.name(*name));
            }
        }
    }
}

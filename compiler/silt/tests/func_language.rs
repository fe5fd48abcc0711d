//! A small functional language built on the public surface: `let`
//! bindings, `import`, lambdas, calls and braces blocks, plus an
//! evaluator and a visitor working on the resulting tree.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use silt::ir::{walk_node, LineCol, Name};
use silt::lexer::PredicateNameAdvancer;
use silt::{
    Ast, BindingPower, ColorMode, ErrorCode, Grammar, LexerConfig, Literal, NodeId, NodeKind,
    NumberFormat, Parser, ParserDefinition, Severity, Symbol, TranslationUnit, Visitor,
};

struct FuncLanguage;

impl Grammar for FuncLanguage {
    fn init_lexer(&self, lexer: &mut LexerConfig) {
        lexer
            .ignore_whitespace()
            .ignore_line_comment("#")
            .match_number(NumberFormat::FLOAT)
            .match_string("\"", "\"")
            .match_boolean(false)
            .use_name_advancer(PredicateNameAdvancer::new(
                |c| c.is_alphabetic() || c == '_',
                |c| c.is_alphanumeric() || c == '_' || c == '\'',
            ));
        lexer.add_symbol("()");
    }

    fn init_parser(&self, def: &mut ParserDefinition) {
        def.add_names().add_common_literals().add_arithmetic_operators();
        def.tuple("(", ")", ",");
        def.call("(", ")", ",");
        def.postfix("!");
        def.lambda("->");

        let assign = def.symbol("=");
        def.statement_fn("let", move |session, token| {
            let target = session.consume_expected(Symbol::NAME);
            let name = if target.is(Symbol::NAME) {
                session.name_node(&target)
            } else {
                session.invalid(&target)
            };
            session.consume_expected(assign);
            let value = session.parse_expression();
            let range = session.range_from(token.range());
            session.alloc(
                NodeKind::Tagged {
                    tag: token.symbol,
                    children: vec![name, value],
                },
                range,
            )
        });

        def.prefix_fn("import", |session, token| {
            let path = session.parse_expression_with(BindingPower::CALL);
            let importable = matches!(
                session.ast().kind(path),
                NodeKind::Name(_) | NodeKind::Literal(Literal::Str(_))
            );
            let range = session.range_from(token.range());
            let node = session.alloc(
                NodeKind::Tagged {
                    tag: token.symbol,
                    children: vec![path],
                },
                range,
            );
            if !importable {
                session.report(node, Severity::Error, "import expects a name or a string");
            }
            node
        });

        def.prefix_fn("()", |session, token| {
            session.alloc(
                NodeKind::Tagged {
                    tag: token.symbol,
                    children: Vec::new(),
                },
                token.range(),
            )
        });

        def.block("{", "}", Some(";"), false);
        def.block(Symbol::SOF, Symbol::EOF, Some(";"), false);
    }
}

fn parse(source: &str) -> TranslationUnit {
    Parser::new(&FuncLanguage).parse(source, "sample.func")
}

/// Evaluates arithmetic over `let` bindings. Lambdas are values only as
/// `let` targets, called by name.
struct Evaluator<'u> {
    unit: &'u TranslationUnit,
    env: HashMap<Name, f64>,
    functions: HashMap<Name, NodeId>,
}

impl Evaluator<'_> {
    fn eval(&mut self, id: NodeId) -> f64 {
        let unit = self.unit;
        let ast = unit.ast();
        let symbols = unit.symbols();
        match ast.kind(id) {
            NodeKind::Literal(Literal::Unsigned(v)) => *v as f64,
            NodeKind::Literal(Literal::Signed(v)) => *v as f64,
            NodeKind::Literal(Literal::Float(v)) => *v,
            NodeKind::Name(name) => self.env[name],
            NodeKind::Prefix { op, operand } if symbols.name(*op) == "-" => -self.eval(*operand),
            NodeKind::Binary { left, op, right } => {
                let (l, r) = (self.eval(*left), self.eval(*right));
                match symbols.name(*op) {
                    "+" => l + r,
                    "-" => l - r,
                    "*" => l * r,
                    "/" => l / r,
                    other => panic!("unknown operator {other}"),
                }
            }
            NodeKind::Tagged { tag, children } if symbols.name(*tag) == "let" => {
                let NodeKind::Name(name) = ast.kind(children[0]) else {
                    panic!("let without a name");
                };
                if matches!(ast.kind(children[1]), NodeKind::Lambda { .. }) {
                    self.functions.insert(*name, children[1]);
                    return 0.0;
                }
                let value = self.eval(children[1]);
                self.env.insert(*name, value);
                value
            }
            NodeKind::Call { callee, args } => {
                let NodeKind::Name(function) = ast.kind(*callee) else {
                    panic!("only named functions can be called");
                };
                let NodeKind::Lambda { params, body } = ast.kind(self.functions[function]) else {
                    panic!("not a function");
                };
                assert_eq!(params.len(), args.len(), "arity mismatch");
                let values: Vec<f64> = args.iter().map(|&arg| self.eval(arg)).collect();
                let saved = self.env.clone();
                for (&param, value) in params.iter().zip(values) {
                    let NodeKind::Name(param) = ast.kind(param) else {
                        panic!("parameter is not a name");
                    };
                    self.env.insert(*param, value);
                }
                let result = self.eval(*body);
                self.env = saved;
                result
            }
            NodeKind::Block { children, .. } => {
                let mut last = 0.0;
                for &child in children {
                    last = self.eval(child);
                }
                last
            }
            other => panic!("cannot evaluate {other:?}"),
        }
    }
}

fn evaluate(source: &str) -> f64 {
    let unit = parse(source);
    assert!(!unit.has_errors(), "{}", silt::render_messages(&unit, ColorMode::Never));
    let mut evaluator = Evaluator {
        unit: &unit,
        env: HashMap::new(),
        functions: HashMap::new(),
    };
    evaluator.eval(unit.root())
}

#[test]
fn test_let_bindings() {
    let unit = parse("let x = 2; let y = x * 3 + 1; y");
    assert_eq!(unit.dump(), "(block (let x 2) (let y (+ (* x 3) 1)) y)");
    assert_eq!(evaluate("let x = 2; let y = x * 3 + 1; y"), 7.0);
}

#[test]
fn test_comments_and_floats() {
    assert_eq!(evaluate("# halve it\nlet half = 0.5;\nhalf * 9"), 4.5);
}

#[test]
fn test_lambdas_and_calls() {
    let unit = parse("let inc = x -> x + 1; inc(41)");
    assert!(!unit.has_errors());
    assert_eq!(
        unit.dump(),
        "(block (let inc (lambda (x) (+ x 1))) (call inc 41))"
    );
}

#[test]
fn test_lambda_with_two_parameters() {
    let source = "let add = (a, b) -> a + b; add(2, 3) * 2";
    let unit = parse(source);
    assert!(!unit.has_errors());
    assert_eq!(
        unit.dump(),
        "(block (let add (lambda (a b) (+ a b))) (* (call add 2 3) 2))"
    );
    assert_eq!(evaluate(source), 10.0);
}

#[test]
fn test_lambda_parameters_shadow_bindings() {
    assert_eq!(
        evaluate("let a = 100; let sub = (a, b) -> a - b; sub(7, 2) + a"),
        105.0
    );
}

#[test]
fn test_names_with_primes() {
    let unit = parse("let x' = x");
    assert_eq!(unit.dump(), "(block (let x' x))");
}

#[test]
fn test_import_and_unit() {
    let unit = parse("import math; import \"std/io\"; ()");
    assert!(!unit.has_errors());
    assert_eq!(unit.dump(), "(block (import math) (import \"std/io\") (()))");
}

#[test]
fn test_import_rejects_expressions() {
    let unit = parse("import 1 + 2");
    let messages = unit.messages().as_slice();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].code, ErrorCode::E9000);
    assert_eq!(messages[0].text, "import expects a name or a string");
}

#[test]
fn test_nested_blocks() {
    assert_eq!(evaluate("let a = { let b = 4; b * b }; a - 1"), 15.0);
}

#[test]
fn test_visitor_collects_names() {
    struct Names(Vec<String>);

    impl Visitor for Names {
        fn visit_node(&mut self, ast: &Ast, id: NodeId) {
            if let NodeKind::Name(name) = ast.kind(id) {
                self.0.push(ast.name(*name).to_owned());
            }
            walk_node(self, ast, id);
        }
    }

    let unit = parse("let f = a -> b(a, c!)");
    let mut names = Names(Vec::new());
    names.visit_node(unit.ast(), unit.root());
    assert_eq!(names.0, vec!["f", "a", "b", "a", "c"]);
}

#[test]
fn test_rendered_diagnostics() {
    let unit = parse("let = 1;\nx $ 2");
    let rendered = silt::render_messages(&unit, ColorMode::Never);
    assert_eq!(
        rendered,
        "error[E1001]: expected name, found '='\n  --> sample.func:1:5\n  |\n1 | let = 1;\n  |     ^\n\n\
         error[E0001]: invalid character '$'\n  --> sample.func:2:3\n  |\n2 | x $ 2\n  |   ^\n\n\
         error: 2 errors and 0 warnings reported\n"
    );
    assert_eq!(unit.messages().as_slice()[1].range.start, LineCol::new(2, 3));
}

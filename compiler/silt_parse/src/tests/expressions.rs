use pretty_assertions::assert_eq;

use super::dump_ok;

#[test]
fn test_integer() {
    assert_eq!(dump_ok("42"), "(block 42)");
}

#[test]
fn test_trailing_dot_is_not_a_fraction() {
    assert_eq!(dump_ok("42."), "(block (42 .))");
}

#[test]
fn test_floats() {
    assert_eq!(dump_ok("42.5"), "(block 42.5)");
    assert_eq!(dump_ok("3.1e5"), "(block 310000.0)");
    assert_eq!(dump_ok("-42.5"), "(block -42.5)");
}

#[test]
fn test_negative_integer() {
    assert_eq!(dump_ok("-42"), "(block -42)");
}

#[test]
fn test_hex_after_block_comment() {
    assert_eq!(dump_ok("  /* i need something new*/0xff"), "(block 255)");
}

#[test]
fn test_binary_after_line_comment() {
    assert_eq!(
        dump_ok("// this is a real long number\n0b11111111_11111111_11111111_11111111"),
        "(block 4294967295)"
    );
}

#[test]
fn test_boolean_and_string() {
    assert_eq!(dump_ok("true"), "(block true)");
    assert_eq!(dump_ok("FALSE"), "(block false)");
    assert_eq!(dump_ok("'hello'"), "(block \"hello\")");
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(dump_ok("a = b = c"), "(block (= a (= b c)))");
}

#[test]
fn test_calls() {
    assert_eq!(dump_ok("a(b)"), "(block (call a b))");
    assert_eq!(dump_ok("a(b, c)"), "(block (call a b c))");
    assert_eq!(dump_ok("a(b)(c)"), "(block (call (call a b) c))");
    assert_eq!(dump_ok("a()"), "(block (call a))");
    assert_eq!(dump_ok("a(b) + c(d)"), "(block (+ (call a b) (call c d)))");
}

#[test]
fn test_ternary_inside_call() {
    assert_eq!(
        dump_ok("a(b ? c : d, e + f)"),
        "(block (call a (?: b c d) (+ e f)))"
    );
}

#[test]
fn test_ternary_chains_right() {
    assert_eq!(
        dump_ok("a ? b : c ? d : e"),
        "(block (?: a b (?: c d e)))"
    );
}

#[test]
fn test_postfix_chaining() {
    assert_eq!(dump_ok("a!!!"), "(block (((a !) !) !))");
    assert_eq!(dump_ok("i++"), "(block (i ++))");
}

#[test]
fn test_prefix_binds_looser_than_postfix() {
    assert_eq!(dump_ok("-a!"), "(block (- (a !)))");
    assert_eq!(dump_ok("-a * b"), "(block (* (- a) b))");
    assert_eq!(dump_ok("!a + b"), "(block (+ (! a) b))");
}

#[test]
fn test_nested_prefix() {
    assert_eq!(dump_ok("~!-+a"), "(block (~ (! (- (+ a)))))");
}

#[test]
fn test_keyword_prefix() {
    assert_eq!(dump_ok("not 5"), "(block (not 5))");
    assert_eq!(dump_ok("nothing"), "(block nothing)");
}

#[test]
fn test_left_associative_product() {
    assert_eq!(dump_ok("a * b / c"), "(block (/ (* a b) c))");
    assert_eq!(dump_ok("a -> b"), "(block (-> a b))");
}

#[test]
fn test_mixed_precedence() {
    assert_eq!(
        dump_ok("a = b + c * d ^ e - f / g"),
        "(block (= a (- (+ b (* c (^ d e))) (/ f g))))"
    );
}

#[test]
fn test_group_leaves_no_node() {
    assert_eq!(dump_ok("a + (b + c) + d"), "(block (+ (+ a (+ b c)) d))");
}

#[test]
fn test_statements_separated() {
    assert_eq!(dump_ok("-42.5;13"), "(block -42.5 13)");
    assert_eq!(dump_ok("a;;b;"), "(block a b)");
}

#[test]
fn test_nested_block_wraps_expressions() {
    assert_eq!(
        dump_ok("{ a; b }"),
        "(block (block (stmt a) (stmt b)))"
    );
}

#[test]
fn test_bit_and_logical_operators() {
    assert_eq!(dump_ok("a | b & c"), "(block (| a (& b c)))");
    assert_eq!(dump_ok("a << b >> c"), "(block (>> (<< a b) c))");
    assert_eq!(dump_ok("a || b && c"), "(block (|| a (&& b c)))");
}

#[test]
fn test_compound_assignment() {
    assert_eq!(dump_ok("a += b -= c"), "(block (+= a (-= b c)))");
    assert_eq!(dump_ok("--a"), "(block (-- a))");
}

use super::*;

/// Depth of a string of nested parentheses, computed recursively.
fn nesting(input: &[u8]) -> (usize, &[u8]) {
    ensure_sufficient_stack(|| match input.split_first() {
        Some((b'(', rest)) => {
            let (inner, rest) = nesting(rest);
            let rest = rest.strip_prefix(b")").unwrap_or(rest);
            (inner + 1, rest)
        }
        _ => (0, input),
    })
}

#[test]
fn test_shallow_nesting() {
    assert_eq!(nesting(b"((()))").0, 3);
}

#[test]
fn test_deep_nesting_grows_stack() {
    let depth = 100_000;
    let mut input = vec![b'('; depth];
    input.extend(std::iter::repeat(b')').take(depth));
    assert_eq!(nesting(&input).0, depth);
}

#[test]
fn test_passes_result_through() {
    let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("stop"));
    assert_eq!(result, Err("stop"));
}

#[test]
fn test_remaining_stack_is_reported() {
    if cfg!(any(target_os = "linux", target_os = "macos", target_os = "windows")) {
        assert!(remaining_stack().is_some_and(|bytes| bytes > 0));
    }
}

//! Stack growth for recursive descent.
//!
//! Pratt parsing recurses once per nesting level, so `((((a))))` or a long
//! chain of right-associative operators can exhaust a thread's stack. Wrap
//! each recursive entry point in [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn parse_expression_with(&mut self, min_bp: u32) -> NodeId {
//!     ensure_sufficient_stack(|| self.parse_expression_inner(min_bp))
//! }
//! ```
//!
//! On wasm32 the closure is called directly.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Bytes of stack left on the current segment, when the platform reports it.
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests;

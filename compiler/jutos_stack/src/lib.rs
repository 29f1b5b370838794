//! Stack growth for deeply nested programs.
//!
//! Both the parser (nested expressions and blocks) and the evaluator
//! (nested expressions and language-level recursion) descend recursively.
//! Every recursive entry point goes through [`ensure_sufficient_stack`], which
//! switches to a freshly allocated stack segment when the current one runs
//! low. On wasm32 the call is a plain passthrough.
//!
//! The evaluator still enforces its own call-depth limit; this crate only
//! makes sure the host stack is never the first thing to give out.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
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

/// Bytes of stack left on the current segment, when the platform can tell.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}

//! Stack growth for deeply nested descriptors.
//!
//! Declaring-type chains and generic argument lists have no depth limit, so
//! both the parser and the identifier resolver recurse through inputs of
//! arbitrary depth. Recursive entry points wrap their bodies in
//! [`ensure_sufficient_stack`], which grows the stack on native targets and is
//! a passthrough on WASM.

/// If less than this much stack remains, grow before recursing (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

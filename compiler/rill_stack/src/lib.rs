//! Stack safety for deep recursion.
//!
//! Tree teardown is already iterative, but parsing and evaluating a
//! deeply nested expression still recurse once per nesting level. Wrapping
//! those recursive calls in [`ensure_sufficient_stack`] grows the stack on
//! demand instead of overflowing it.
//!
//! - **Native targets**: uses the `stacker` crate.
//! - **WASM targets**: no-op passthrough (WASM manages its own stack).

/// Minimum stack space to keep available (100KB red zone).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, additional
/// stack space is allocated before calling `f`. Wrap the recursive call
/// sites of the parser and evaluator in this.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

//! Stack growth for deep recursion.
//!
//! The parser descends once per nesting level of an expression and the
//! interpreter once per nested call or block, so input like `((((...))))`
//! or a deeply recursive user function can exhaust the native stack long
//! before any language-level limit trips. Recursive entry points wrap their
//! bodies in [`ensure_sufficient_stack`], which moves execution onto a
//! freshly allocated segment when the current one runs low.
//!
//! On `wasm32` the wrapper calls straight through.

/// Remaining stack below which a new segment is allocated (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// Run `f` directly; wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_result_through() {
        let result: Result<u8, String> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn test_deep_recursion_does_not_overflow() {
        fn depth(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }

        assert_eq!(depth(100_000), 100_000);
    }

    #[test]
    fn test_nested_closures_share_state() {
        fn sum_into(n: u32, acc: &mut u32) {
            ensure_sufficient_stack(|| {
                *acc += n;
                if n > 0 {
                    sum_into(n - 1, acc);
                }
            });
        }

        let mut acc = 0;
        sum_into(1_000, &mut acc);
        assert_eq!(acc, 500_500);
    }
}

//! Process-wide testing flag and the test-only gate.
//!
//! The testing flag is owned by the host's context and merely read here.
//! [`test_only`] wraps an operation so that it only runs while the flag is
//! set; outside of test mode the wrapped operation is never invoked and the
//! call resolves to an absent result.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::Lazy;

static GLOBAL_CONTEXT: Lazy<Context> = Lazy::new(Context::new);

/// Handle to the process-wide testing flag.
///
/// The flag defaults to off, the production-safe value, and is flipped by
/// the host for the duration of a test run.
#[derive(Debug, Default)]
pub struct Context {
    testing: AtomicBool,
}

impl Context {
    pub fn new() -> Self {
        Self {
            testing: AtomicBool::new(false),
        }
    }

    /// The process-wide default instance.
    pub fn global() -> &'static Context {
        &GLOBAL_CONTEXT
    }

    /// Current state of the testing flag.
    ///
    /// Always loads the atomic; the value is never cached across calls, so
    /// a host-side toggle takes effect on the next read.
    pub fn is_testing(&self) -> bool {
        self.testing.load(Ordering::SeqCst)
    }

    /// Host-facing mutator for the testing flag.
    pub fn set_testing(&self, enabled: bool) {
        self.testing.store(enabled, Ordering::SeqCst);
    }
}

/// Wrap an operation so it only runs while the testing flag is set.
pub fn test_only<F>(op: F) -> TestOnly<F> {
    TestOnly { op }
}

/// A gated operation produced by [`test_only`].
pub struct TestOnly<F> {
    op: F,
}

impl<F, Fut, T> TestOnly<F>
where
    F: Fn() -> Fut,
    Fut: Future<Output = T>,
{
    /// Invoke the wrapped operation if `ctx` is currently in testing mode.
    ///
    /// The flag is read at call time, not at wrap time, so toggling it
    /// between calls changes behavior immediately. With the flag off the
    /// wrapped closure is not invoked at all and the call resolves to
    /// `None`; with it on, the operation runs and its result comes back as
    /// `Some`.
    pub async fn call(&self, ctx: &Context) -> Option<T> {
        if !ctx.is_testing() {
            return None;
        }
        Some((self.op)().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn global_context_defaults_to_production_mode() {
        assert!(!Context::global().is_testing());
    }

    #[tokio::test]
    async fn gated_operation_is_a_no_op_outside_test_mode() {
        let ctx = Context::new();
        let invocations = AtomicUsize::new(0);
        let greet = test_only(|| {
            invocations.fetch_add(1, Ordering::SeqCst);
            async { "Greetings!" }
        });

        assert_eq!(greet.call(&ctx).await, None);
        assert_eq!(invocations.load(Ordering::SeqCst), 0);

        ctx.set_testing(true);
        assert_eq!(greet.call(&ctx).await, Some("Greetings!"));
        assert_eq!(invocations.load(Ordering::SeqCst), 1);

        ctx.set_testing(false);
        assert_eq!(greet.call(&ctx).await, None);
        assert_eq!(invocations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn flag_is_read_per_call_not_per_wrap() {
        let ctx = Context::new();
        // Wrapped while the flag is off; must still run once the flag is on.
        let op = test_only(|| async { 42 });

        ctx.set_testing(true);
        assert_eq!(op.call(&ctx).await, Some(42));
    }
}

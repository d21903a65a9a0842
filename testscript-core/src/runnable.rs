//! The runnable contract shared by the harness and the host.

use crate::error::BoxError;
use std::sync::Arc;

/// A zero-argument unit of deferred execution.
///
/// This is the currency of the rendezvous: the harness wraps its replay and
/// teardown logic in runnables, and the host invokes them at lifecycle points
/// it controls. Invocation is synchronous on the calling thread.
///
/// Runnables are passed around as [`SharedRunnable`] handles, which preserve
/// identity: the handle a reader gets back out of a registry is the same
/// allocation the writer put in.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `TestRunnable`",
    label = "missing `TestRunnable` implementation",
    note = "Implement `run`, or use `runnable_fn` to wrap a plain closure."
)]
pub trait TestRunnable: Send + Sync {
    /// Execute the runnable.
    fn run(&self) -> Result<(), BoxError>;
}

/// A shared, identity-preserving handle to a [`TestRunnable`].
pub type SharedRunnable = Arc<dyn TestRunnable>;

struct FnRunnable<F>(F);

impl<F> TestRunnable for FnRunnable<F>
where
    F: Fn() -> Result<(), BoxError> + Send + Sync,
{
    fn run(&self) -> Result<(), BoxError> {
        (self.0)()
    }
}

/// Wrap an infallible closure as a [`SharedRunnable`].
///
/// # Example
///
/// ```rust,ignore
/// let runnable = runnable_fn(|| println!("replay starting"));
/// registry.set_runnables(Some(runnable), None);
/// ```
pub fn runnable_fn<F>(f: F) -> SharedRunnable
where
    F: Fn() + Send + Sync + 'static,
{
    Arc::new(FnRunnable(move || -> Result<(), BoxError> {
        f();
        Ok(())
    }))
}

/// Wrap a fallible closure as a [`SharedRunnable`].
pub fn try_runnable_fn<F>(f: F) -> SharedRunnable
where
    F: Fn() -> Result<(), BoxError> + Send + Sync + 'static,
{
    Arc::new(FnRunnable(f))
}

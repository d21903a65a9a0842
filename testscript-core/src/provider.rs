//! Runnable lookup by symbolic name.

use crate::error::BoxError;
use crate::runnable::SharedRunnable;
use std::sync::Arc;

/// Well-known name under which the harness registers its setup runnable.
///
/// The startup glue resolves exactly this name; harnesses that want their
/// setup code run at workbench startup must register under it.
pub const TEST_SETUP_RUNNABLE: &str = "getTestSetupRunnable";

/// A lookup facility resolving a symbolic name to a runnable.
///
/// The capability is `resolve(name) -> runnable-or-absent-or-fails`: an
/// unregistered name is `Ok(None)`, not an error. Failure is reserved for the
/// lookup mechanism itself breaking (a poisoned backing store, a config file
/// that no longer parses, and so on).
///
/// The standard implementation is the name-keyed table in the `testscript`
/// crate; custom providers can resolve from configuration or any other
/// strategy.
pub trait RunnableProvider: Send + Sync {
    /// Resolve `name` to a runnable, or `None` if nothing is registered.
    fn resolve(&self, name: &str) -> Result<Option<SharedRunnable>, BoxError>;
}

// Allow a shared provider to be handed to the startup hook while the harness
// keeps its own handle for registration.
impl<P: RunnableProvider + ?Sized> RunnableProvider for Arc<P> {
    fn resolve(&self, name: &str) -> Result<Option<SharedRunnable>, BoxError> {
        (**self).resolve(name)
    }
}

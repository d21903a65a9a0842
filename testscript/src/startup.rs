//! The host-driven startup entry point.

use testscript_core::{
    RunnableProvider, SetupError, SetupOutcome, Startup, TEST_SETUP_RUNNABLE,
};

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// The startup hook the host runtime drives once during its startup sequence.
///
/// Resolution goes through the injected provider rather than any global
/// lookup: the host constructs the hook with whatever provider the harness
/// populated (typically a shared [`RunnableTable`]) and calls
/// [`on_startup`] at its early-startup lifecycle point.
///
/// `on_startup` gives the harness a chance to run arbitrary initialization
/// and absorbs every failure; use [`try_setup`] directly when the caller
/// wants the structured outcome instead of a log line.
///
/// [`RunnableTable`]: crate::RunnableTable
/// [`on_startup`]: Startup::on_startup
/// [`try_setup`]: StartupHook::try_setup
pub struct StartupHook<P> {
    provider: P,
}

impl<P: RunnableProvider> StartupHook<P> {
    /// Create a hook that resolves its setup runnable through `provider`.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Attempt test setup, returning the structured outcome.
    ///
    /// Resolves [`TEST_SETUP_RUNNABLE`] through the provider and, if a
    /// runnable is registered, runs it synchronously on the calling thread.
    /// A panicking runnable is caught and reported as
    /// [`SetupError::Panic`].
    pub fn try_setup(&self) -> Result<SetupOutcome, SetupError> {
        let resolved = self
            .provider
            .resolve(TEST_SETUP_RUNNABLE)
            .map_err(|source| SetupError::Lookup {
                name: TEST_SETUP_RUNNABLE.to_string(),
                source,
            })?;

        let Some(runnable) = resolved else {
            return Ok(SetupOutcome::NotRegistered);
        };

        match catch_unwind(AssertUnwindSafe(|| runnable.run())) {
            Ok(Ok(())) => Ok(SetupOutcome::Ran),
            Ok(Err(source)) => Err(SetupError::Runnable {
                name: TEST_SETUP_RUNNABLE.to_string(),
                source,
            }),
            Err(payload) => Err(SetupError::Panic {
                name: TEST_SETUP_RUNNABLE.to_string(),
                message: panic_message(payload),
            }),
        }
    }
}

impl<P: RunnableProvider> Startup for StartupHook<P> {
    fn on_startup(&self) {
        match self.try_setup() {
            Ok(SetupOutcome::Ran) => {
                tracing::info!(name = TEST_SETUP_RUNNABLE, "test setup completed");
            }
            Ok(SetupOutcome::NotRegistered) => {
                tracing::debug!(name = TEST_SETUP_RUNNABLE, "no test setup registered");
            }
            Err(error) => {
                tracing::error!(%error, "test setup failed; continuing startup");
            }
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

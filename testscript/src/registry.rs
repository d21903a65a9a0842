//! The rendezvous slot pair for harness-registered runnables.

use testscript_core::SharedRunnable;

use std::sync::Mutex;

/// Slot pair where a test harness and the host-side replay machinery
/// rendezvous.
///
/// The harness stores a test runnable and a test-exit runnable together,
/// before the host needs them; the host reads them any number of times. The
/// registry is an explicitly owned value: construct it once at application
/// start, share it by `Arc`, and hand a clone to each side.
///
/// The access pattern is single writer, many readers. A reader racing the
/// writer observes either the old pair or the new pair, never a mix: both
/// slots live under one lock and are replaced in a single update.
///
/// # Example
///
/// ```rust,ignore
/// let registry = Arc::new(RunnableRegistry::new());
///
/// // Harness side
/// registry.set_runnables(Some(replay), Some(exit_hook));
///
/// // Host side, later
/// if let Some(runnable) = registry.test_runnable() {
///     runnable.run()?;
/// }
/// ```
#[derive(Default)]
pub struct RunnableRegistry {
    slots: Mutex<Slots>,
}

#[derive(Default)]
struct Slots {
    test: Option<SharedRunnable>,
    exit: Option<SharedRunnable>,
}

impl RunnableRegistry {
    /// Create a registry with both slots empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store both runnables in a single update, replacing any prior values.
    ///
    /// Either slot may be `None`; no validation is performed and the update
    /// never fails.
    pub fn set_runnables(&self, test: Option<SharedRunnable>, exit: Option<SharedRunnable>) {
        tracing::debug!(
            test = test.is_some(),
            exit = exit.is_some(),
            "test runnables registered"
        );
        let mut slots = self.slots.lock().unwrap();
        slots.test = test;
        slots.exit = exit;
    }

    /// The registered test runnable, or `None` if never set.
    ///
    /// Returns the same handle the writer stored, not a copy.
    pub fn test_runnable(&self) -> Option<SharedRunnable> {
        self.slots.lock().unwrap().test.clone()
    }

    /// The registered test-exit runnable, or `None` if never set.
    pub fn exit_runnable(&self) -> Option<SharedRunnable> {
        self.slots.lock().unwrap().exit.clone()
    }
}

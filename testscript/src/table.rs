//! Name-keyed runnable table, the standard lookup facility.

use testscript_core::{BoxError, RunnableProvider, SharedRunnable};

use std::collections::HashMap;
use std::sync::Mutex;

/// A thread-safe name-to-runnable table.
///
/// The harness registers runnables under well-known names; the startup hook
/// (or any other host-side consumer) resolves them later. Resolving a name
/// with no entry yields `Ok(None)`, never an error.
#[derive(Default)]
pub struct RunnableTable {
    entries: Mutex<HashMap<String, SharedRunnable>>,
}

impl RunnableTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `runnable` under `name`, replacing any existing entry.
    pub fn register(&self, name: impl Into<String>, runnable: SharedRunnable) {
        let name = name.into();
        tracing::trace!(%name, "runnable registered");
        self.entries.lock().unwrap().insert(name, runnable);
    }

    /// Remove the entry under `name`, returning it if present.
    ///
    /// Used by harnesses that tear registrations down between replays.
    pub fn remove(&self, name: &str) -> Option<SharedRunnable> {
        self.entries.lock().unwrap().remove(name)
    }
}

impl RunnableProvider for RunnableTable {
    fn resolve(&self, name: &str) -> Result<Option<SharedRunnable>, BoxError> {
        Ok(self.entries.lock().unwrap().get(name).cloned())
    }
}

/// Builder for constructing a [`RunnableTable`].
#[derive(Default)]
pub struct RunnableTableBuilder {
    entries: HashMap<String, SharedRunnable>,
}

impl RunnableTableBuilder {
    /// Create a new empty table builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a runnable under `name`.
    pub fn register(mut self, name: impl Into<String>, runnable: SharedRunnable) -> Self {
        self.entries.insert(name.into(), runnable);
        self
    }

    /// Build the table.
    pub fn build(self) -> RunnableTable {
        RunnableTable {
            entries: Mutex::new(self.entries),
        }
    }
}

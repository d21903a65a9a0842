//! Testing utilities for testscript.
//!
//! This module provides spy implementations for exercising the rendezvous
//! without a real harness:
//!
//! - [`CountingRunnable`]: a runnable that counts its invocations
//! - [`FailingRunnable`]: a runnable that always returns an error
//! - [`PanickingRunnable`]: a runnable that panics when run
//! - [`FailingProvider`]: a provider whose lookups always fail

use testscript_core::{BoxError, RunnableProvider, SharedRunnable, TestRunnable};

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use thiserror::Error;

// ============================================================================
// Counting Runnable
// ============================================================================

/// A runnable that counts its invocations.
///
/// Clones share the counter, so a test can keep one handle while handing the
/// other to a registry or table.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingRunnable::new();
/// table.register(TEST_SETUP_RUNNABLE, counter.shared());
///
/// hook.on_startup();
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingRunnable {
    count: Arc<AtomicUsize>,
}

impl CountingRunnable {
    /// Create a new counting runnable.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A shared handle to this runnable, suitable for registration.
    pub fn shared(&self) -> SharedRunnable {
        Arc::new(self.clone())
    }

    /// Get the current invocation count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingRunnable {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingRunnable {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl TestRunnable for CountingRunnable {
    fn run(&self) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Runnable
// ============================================================================

/// The error [`FailingRunnable`] and [`FailingProvider`] return.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct InjectedFailure(String);

/// A runnable that always fails with a fixed message.
pub struct FailingRunnable {
    message: String,
}

impl FailingRunnable {
    /// Create a failing runnable with the given error message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// A shared handle to this runnable, suitable for registration.
    pub fn shared(self) -> SharedRunnable {
        Arc::new(self)
    }
}

impl TestRunnable for FailingRunnable {
    fn run(&self) -> Result<(), BoxError> {
        Err(Box::new(InjectedFailure(self.message.clone())))
    }
}

// ============================================================================
// Panicking Runnable
// ============================================================================

/// A runnable that panics with a fixed message when run.
pub struct PanickingRunnable {
    message: String,
}

impl PanickingRunnable {
    /// Create a panicking runnable with the given panic message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// A shared handle to this runnable, suitable for registration.
    pub fn shared(self) -> SharedRunnable {
        Arc::new(self)
    }
}

impl TestRunnable for PanickingRunnable {
    fn run(&self) -> Result<(), BoxError> {
        panic!("{}", self.message);
    }
}

// ============================================================================
// Failing Provider
// ============================================================================

/// A provider whose lookups always fail, for exercising lookup-failure paths.
pub struct FailingProvider {
    message: String,
}

impl FailingProvider {
    /// Create a provider that fails every resolution with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl RunnableProvider for FailingProvider {
    fn resolve(&self, _name: &str) -> Result<Option<SharedRunnable>, BoxError> {
        Err(Box::new(InjectedFailure(self.message.clone())))
    }
}

//! Host lifecycle entry point.

/// Outcome of a successful setup attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// A setup runnable was resolved and ran to completion.
    Ran,
    /// No setup runnable was registered under the well-known name.
    NotRegistered,
}

/// A lifecycle entry point the host runtime drives once during startup.
///
/// The host calls [`on_startup`] exactly once, on whatever thread drives its
/// startup sequence, before normal operation begins. Implementations must
/// absorb their own failures: nothing that happens here may abort host
/// startup.
///
/// [`on_startup`]: Startup::on_startup
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Startup` entry point",
    label = "missing `Startup` implementation",
    note = "Startup entry points take no input, return nothing, and never fail."
)]
pub trait Startup: Send + Sync {
    /// Called once by the host, before normal operation begins.
    fn on_startup(&self);
}

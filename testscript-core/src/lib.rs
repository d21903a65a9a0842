//! # testscript-core
//!
//! Core traits for the testscript startup rendezvous library.
//!
//! This crate has minimal dependencies and is designed to be imported by both
//! sides of the rendezvous: the test harness that registers runnables, and the
//! host-side glue that resolves and runs them. Neither side needs the full
//! `testscript` implementation crate to speak the vocabulary.
//!
//! # The rendezvous model
//!
//! A UI test harness and the application it drives are loaded independently
//! and cannot reference each other directly. They meet through three small
//! contracts:
//!
//! - [`TestRunnable`] — a zero-argument unit of deferred execution the harness
//!   hands over for the host to run later.
//! - [`RunnableProvider`] — a lookup facility resolving a symbolic name to a
//!   runnable, absence, or a failure. The host-side startup glue asks it for
//!   [`TEST_SETUP_RUNNABLE`].
//! - [`Startup`] — the lifecycle entry point the host runtime drives once
//!   during its startup sequence. Implementations absorb their own failures;
//!   host startup never aborts because of them.
//!
//! # Error Types
//!
//! - [`SetupError`] - structured cause of a failed setup attempt
//! - [`BoxError`] - open-ended error currency at trait boundaries

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod provider;
mod runnable;
mod startup;

// Re-exports
pub use error::{BoxError, SetupError};
pub use provider::{RunnableProvider, TEST_SETUP_RUNNABLE};
pub use runnable::{SharedRunnable, TestRunnable, runnable_fn, try_runnable_fn};
pub use startup::{SetupOutcome, Startup};

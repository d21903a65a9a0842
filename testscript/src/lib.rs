//! # testscript
//!
//! Standard implementations for the testscript startup rendezvous library.
//!
//! This crate provides:
//! - **Registry**: [`RunnableRegistry`], the slot pair where a harness and the
//!   host-side replay machinery rendezvous
//! - **Startup glue**: [`StartupHook`], the host-driven entry point that
//!   resolves and runs the harness's setup runnable
//! - **Lookup**: [`RunnableTable`], the standard name-keyed
//!   [`RunnableProvider`](testscript_core::RunnableProvider)
//! - **Testing**: spy runnables and providers in [`testing`]
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use testscript::{RunnableTableBuilder, StartupHook};
//! use testscript_core::{Startup, TEST_SETUP_RUNNABLE, runnable_fn};
//!
//! // Harness side: register setup under the well-known name.
//! let table = Arc::new(
//!     RunnableTableBuilder::new()
//!         .register(TEST_SETUP_RUNNABLE, runnable_fn(|| start_replay()))
//!         .build(),
//! );
//!
//! // Host side: drive the hook once during startup.
//! let hook = StartupHook::new(Arc::clone(&table));
//! hook.on_startup();
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use testscript_core;

mod registry;
mod startup;
mod table;
pub mod testing;

pub use registry::RunnableRegistry;
pub use startup::StartupHook;
pub use table::{RunnableTable, RunnableTableBuilder};

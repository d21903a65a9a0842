//! Error types for testscript.
//!
//! A failed setup attempt has exactly one structured cause:
//!
//! - [`SetupError::Lookup`] - the provider itself failed to resolve
//! - [`SetupError::Runnable`] - the resolved runnable returned an error
//! - [`SetupError::Panic`] - the resolved runnable panicked

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a startup setup attempt.
///
/// Setup failures are never propagated to the host runtime; the startup glue
/// logs them and lets startup continue. This type exists so the logged
/// diagnostic carries the structured cause instead of a flattened string.
#[derive(Error, Debug)]
pub enum SetupError {
    /// The lookup facility failed while resolving the setup runnable.
    #[error("runnable lookup failed for `{name}`")]
    Lookup {
        /// The symbolic name that was being resolved.
        name: String,
        /// The underlying lookup failure.
        #[source]
        source: BoxError,
    },

    /// The resolved setup runnable returned an error.
    #[error("setup runnable `{name}` failed")]
    Runnable {
        /// The symbolic name the runnable was resolved under.
        name: String,
        /// The error the runnable returned.
        #[source]
        source: BoxError,
    },

    /// The resolved setup runnable panicked during execution.
    #[error("setup runnable `{name}` panicked: {message}")]
    Panic {
        /// The symbolic name the runnable was resolved under.
        name: String,
        /// The panic payload, if it was a string.
        message: String,
    },
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the Cadence function wrappers
//!
//! Wrappers never translate errors raised by the function they wrap: those
//! propagate to the caller untouched. [`CadenceError`] only covers the failure
//! modes of the wrappers themselves, such as rejected configuration or a
//! `once` wrapper whose first invocation panicked.
//!
//! # Examples
//!
//! ```
//! use cadence_error::{CadenceError, Result};
//!
//! fn validate(leading: bool, trailing: bool) -> Result<()> {
//!     if !leading && !trailing {
//!         return Err(CadenceError::invalid_config("no edge enabled"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate(false, false).is_err());
//! ```

/// Root error type for all Cadence operations
#[derive(Debug, thiserror::Error)]
pub enum CadenceError {
    /// Wrapper options were rejected
    ///
    /// Raised by the option validators, e.g. when neither the leading nor the
    /// trailing edge of a debounce or throttle is enabled.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the rejected option
        message: String,
    },

    /// Invalid state encountered
    ///
    /// The wrapper was used while in a state that cannot serve the call, for
    /// instance a `once` wrapper re-entered during its first invocation.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// Description of the invalid state
        message: String,
    },

    /// User-provided function panicked
    ///
    /// Deferred invocations catch the panic and report it with this variant;
    /// a poisoned `once` wrapper returns it on every later call.
    #[error("User callback panicked: {context}")]
    CallbackPanic {
        /// Information about the panic location and cause
        context: String,
    },
}

impl CadenceError {
    /// Create an invalid configuration error with the given message
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid state error with the given message
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Create a callback panic error with the given context
    pub fn callback_panic(context: impl Into<String>) -> Self {
        Self::CallbackPanic {
            context: context.into(),
        }
    }

    /// Build a [`CadenceError::CallbackPanic`] from a caught panic payload.
    ///
    /// `&str` and `String` payloads keep their message, anything else is
    /// reported as an opaque panic.
    pub fn from_panic(operation: &str, payload: &(dyn std::any::Any + Send)) -> Self {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self::callback_panic(format!("{operation}: {reason}"))
    }
}

/// Specialized Result type for Cadence operations
///
/// ```
/// use cadence_error::Result;
///
/// fn ready() -> Result<u32> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, CadenceError>;

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for Solus single-value pipelines
//!
//! A pipeline carries at most one error to its consumer. Operators forward that
//! error unmodified, so the same [`SolusError`] value a source emits is the one the
//! final consumer observes.
//!
//! # Examples
//!
//! ```
//! use solus_core::{Result, SolusError};
//!
//! fn load() -> Result<u32> {
//!     Err(SolusError::stream_error("source not ready"))
//! }
//!
//! assert_eq!(
//!     load().unwrap_err().to_string(),
//!     "Stream processing error: source not ready"
//! );
//! ```

use std::error::Error;
use std::sync::Arc;

/// Root error type for all Solus operations
///
/// Cloning is cheap: user errors are shared behind an `Arc`, so a source can
/// replay the same failure to every subscriber.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SolusError {
    /// A producer failed
    ///
    /// General-purpose failure raised by a source or an earlier stage.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors returned by user-provided functions, such as the closure given
    /// to `try_map`.
    #[error("User error: {0}")]
    UserError(#[source] Arc<dyn Error + Send + Sync>),

    /// A user-provided transform panicked
    ///
    /// The panic is caught at the operator boundary and delivered downstream as an
    /// error instead of unwinding into the producer.
    #[error("User callback panicked: {context}")]
    CallbackPanic {
        /// The panic payload, when it was a string
        context: String,
    },

    /// The pipeline was cancelled before it produced a result
    ///
    /// Consumers that requested cancellation never see this; it is only reported to
    /// parties that are waiting on a pipeline somebody else cancelled.
    #[error("Pipeline cancelled before completion")]
    Cancelled,
}

impl SolusError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl Error + Send + Sync + 'static) -> Self {
        Self::UserError(Arc::new(error))
    }

    /// Build a `CallbackPanic` from a payload returned by `catch_unwind`
    pub fn from_panic(payload: &(dyn core::any::Any + Send)) -> Self {
        let context = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::CallbackPanic { context }
    }

    /// Returns `true` for [`SolusError::Cancelled`]
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Specialized Result type for Solus operations
pub type Result<T> = core::result::Result<T, SolusError>;

/// Extension trait for converting errors into `SolusError`
///
/// Automatically implemented for every `Error + Send + Sync + 'static` type.
pub trait IntoSolusError {
    /// Convert this error into a `SolusError::UserError`
    fn into_solus(self) -> SolusError;
}

impl<E: Error + Send + Sync + 'static> IntoSolusError for E {
    fn into_solus(self) -> SolusError {
        SolusError::user_error(self)
    }
}

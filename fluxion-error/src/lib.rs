// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the Fluxion async observable library
//!
//! This crate defines the root [`FluxionError`] type shared by observers, observables,
//! schedulers and operators. Argument errors are raised synchronously by constructors,
//! sequence errors travel through `on_error`, and failures of a downstream observer
//! surface as the `Err` of the notification call that triggered them.
//!
//! # Examples
//!
//! ```
//! use fluxion_error::{FluxionError, Result};
//!
//! fn check_count(count: usize) -> Result<usize> {
//!     if count == 0 {
//!         return Err(FluxionError::invalid_argument("count", "must be greater than zero"));
//!     }
//!     Ok(count)
//! }
//!
//! assert!(check_count(0).is_err());
//! ```

/// Root error type for all Fluxion operations
#[derive(Debug, thiserror::Error)]
pub enum FluxionError {
    /// An argument was outside of its accepted range
    ///
    /// Raised before any subscription happens, so no observer is ever notified.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Sequence processing encountered an error
    ///
    /// General error for observer and operator failures that don't fit
    /// other specific categories.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Subscription operation failed
    ///
    /// Returned when a source refuses a new observer, for example a subject
    /// that has already terminated.
    #[error("Subscription error: {context}")]
    SubscriptionError {
        /// Details about the subscription failure
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user-provided handlers so they can travel
    /// through `on_error` or be returned from a notification call.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl FluxionError {
    /// Create an invalid argument error
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Create a subscription error with the given context
    pub fn subscription_error(context: impl Into<String>) -> Self {
        Self::SubscriptionError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this is a recoverable error
    ///
    /// Subscription errors are transient: a new subscription to a different
    /// source may succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::SubscriptionError { .. })
    }

    /// Check if this error indicates a permanent failure
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::StreamProcessingError { .. } | Self::UserError(_)
        )
    }
}

impl Clone for FluxionError {
    fn clone(&self) -> Self {
        match self {
            Self::InvalidArgument { name, reason } => Self::InvalidArgument {
                name,
                reason: reason.clone(),
            },
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            Self::SubscriptionError { context } => Self::SubscriptionError {
                context: context.clone(),
            },
            // The boxed source can't be cloned, keep its message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
        }
    }
}

/// Specialized Result type for Fluxion operations
///
/// # Examples
///
/// ```
/// use fluxion_error::Result;
///
/// fn process() -> Result<String> {
///     Ok("processed".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, FluxionError>;

/// Extension trait for converting errors into `FluxionError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`.
pub trait IntoFluxionError {
    /// Convert this error into a `FluxionError` with additional context
    fn into_fluxion_error(self, context: &str) -> FluxionError;

    /// Convert this error into a `FluxionError` without additional context
    fn into_fluxion(self) -> FluxionError
    where
        Self: Sized,
    {
        self.into_fluxion_error("")
    }
}

impl<E: std::error::Error + Send + Sync + 'static> IntoFluxionError for E {
    fn into_fluxion_error(self, context: &str) -> FluxionError {
        if context.is_empty() {
            FluxionError::user_error(self)
        } else {
            FluxionError::stream_error(format!("{context}: {self}"))
        }
    }
}

/// Helper trait for adding context to `Result`s
pub trait ResultExt<T> {
    /// Add context to an error
    ///
    /// # Errors
    /// Returns `Err(FluxionError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure (lazy evaluation)
    ///
    /// # Errors
    /// Returns `Err(FluxionError)` if the underlying result is `Err`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<FluxionError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e.into() {
            FluxionError::UserError(inner) => FluxionError::StreamProcessingError {
                context: format!("{}: {inner}", f()),
            },
            other => other,
        })
    }
}

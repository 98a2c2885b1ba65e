// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the rivulet operator toolkit.
//!
//! Every operator reports failures through [`RivuletError`], carried inside
//! [`StreamItem::Error`](crate::StreamItem::Error).
//!
//! # Examples
//!
//! ```
//! use rivulet_core::{Result, RivuletError};
//!
//! fn open_gate() -> Result<()> {
//!     Err(RivuletError::subscription_error("gate is locked"))
//! }
//!
//! assert!(open_gate().is_err());
//! ```

use std::error::Error;
use std::sync::Arc;

/// Root error type for all rivulet operations.
///
/// Cloning is cheap and lossless: user errors are shared, so every observer of a
/// multicast error sees the same variant and the same source.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RivuletError {
    /// General failure while processing a stream.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Error raised by user code (callbacks, hooks, sources).
    #[error("User error: {0}")]
    UserError(#[source] Arc<dyn Error + Send + Sync>),

    /// A subscription could not be established.
    ///
    /// Raised when a lifecycle hook refuses to start the subscription.
    #[error("Subscription error: {context}")]
    SubscriptionError {
        /// Why the subscription was refused
        context: String,
    },
}

impl RivuletError {
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
    pub fn user_error(error: impl Error + Send + Sync + 'static) -> Self {
        Self::UserError(Arc::new(error))
    }

    /// The wrapped user error, for downcasting to its concrete type.
    ///
    /// ```
    /// use rivulet_core::RivuletError;
    ///
    /// let error = RivuletError::user_error(std::io::Error::other("disk"));
    /// let io = error
    ///     .user_error_ref()
    ///     .and_then(|e| e.downcast_ref::<std::io::Error>());
    /// assert!(io.is_some());
    /// ```
    #[must_use]
    pub fn user_error_ref(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::UserError(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    /// Returns `true` if the error came from a refused subscription.
    #[must_use]
    pub const fn is_subscription_error(&self) -> bool {
        matches!(self, Self::SubscriptionError { .. })
    }
}

/// Specialized Result type for rivulet operations.
pub type Result<T> = std::result::Result<T, RivuletError>;

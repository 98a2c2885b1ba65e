// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared destination for errors that were caught but not handled locally.
//!
//! An application creates one [`ErrorSink`] at startup and hands clones to every
//! component that routes errors (see `rivulet-exec`). Observers subscribe to watch
//! all uncaught errors.
//!
//! ```
//! use rivulet_core::{ErrorSink, RivuletError};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let sink = ErrorSink::new();
//! let mut observed = sink.subscribe();
//!
//! sink.push(RivuletError::stream_error("disk full"));
//!
//! let error = observed.next().await.unwrap();
//! assert_eq!(error.to_string(), "Stream processing error: disk full");
//! # }
//! ```

use crate::{RivuletError, Subject};
use futures::future::ready;
use futures::{stream, Stream, StreamExt};

/// Push-only, fan-out error channel.
///
/// - Producers call [`push`](Self::push); concurrent pushes are serialized.
/// - Observers call [`subscribe`](Self::subscribe) and receive every error pushed
///   afterwards.
/// - The sink is never closed; clones share the same channel.
#[derive(Clone, Default)]
pub struct ErrorSink {
    subject: Subject<RivuletError>,
}

impl ErrorSink {
    /// Creates a sink with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subject: Subject::new(),
        }
    }

    /// Routes an error to every current observer.
    pub fn push(&self, error: RivuletError) {
        // The subject is never closed here, so sending cannot fail.
        let _ = self.subject.next(error);
    }

    /// Observes every error pushed from now on.
    pub fn subscribe(&self) -> impl Stream<Item = RivuletError> + Send + Sync + Unpin + 'static {
        let source = self
            .subject
            .subscribe()
            .unwrap_or_else(|_| Box::pin(stream::empty()));
        source.filter_map(|item| ready(item.ok()))
    }

    /// Number of observers still listening.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.subject.subscriber_count()
    }
}

impl std::fmt::Debug for ErrorSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorSink")
            .field("observers", &self.observer_count())
            .finish()
    }
}

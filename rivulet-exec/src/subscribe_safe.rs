// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Subscribers that never let an error escape.
//!
//! A safe subscriber consumes a stream on a tokio task. Values go to an optional
//! handler; the first error is logged together with the [`CallSite`] that set up the
//! subscription, routed to an [`ErrorSink`] and ends consumption. Nothing is returned
//! to the caller and nothing panics.
//!
//! # Example
//!
//! ```
//! use rivulet_core::{call_site, ErrorSink, RivuletError, StreamItem};
//! use rivulet_exec::SubscribeSafeExt;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let sink = ErrorSink::new();
//! let mut uncaught = sink.subscribe();
//!
//! let source = stream::iter(vec![
//!     StreamItem::Value(1),
//!     StreamItem::Error(RivuletError::stream_error("sensor offline")),
//! ]);
//! let _subscription = source.subscribe_safe(&sink, call_site!("readings"));
//!
//! let error = uncaught.next().await.unwrap();
//! assert_eq!(error.to_string(), "Stream processing error: sensor offline");
//! # }
//! ```

use crate::consumer::{spawn_consumer, Notification};
use core::ops::ControlFlow;
use futures::Stream;
use rivulet_core::{CallSite, ErrorSink, StreamItem, Subscription};

/// Extension trait for consuming a stream while routing its error to an [`ErrorSink`].
pub trait SubscribeSafeExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Consumes the stream, ignoring values.
    ///
    /// See [`subscribe_safe_with`](Self::subscribe_safe_with).
    fn subscribe_safe(self, sink: &ErrorSink, call_site: CallSite) -> Subscription;

    /// Consumes the stream, calling `on_next` for every value in order.
    ///
    /// On the first error the subscriber logs it with `call_site`, pushes it onto
    /// `sink` exactly once and stops; later items are never delivered. Completion
    /// simply ends the subscription.
    ///
    /// Releasing the returned [`Subscription`] drops the source before returning.
    /// When no tokio runtime is available the failure is routed to `sink` as a
    /// subscription error and an already-closed subscription is returned.
    fn subscribe_safe_with<F>(
        self,
        on_next: F,
        sink: &ErrorSink,
        call_site: CallSite,
    ) -> Subscription
    where
        F: FnMut(T) + Send + 'static;
}

impl<S, T> SubscribeSafeExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn subscribe_safe(self, sink: &ErrorSink, call_site: CallSite) -> Subscription {
        self.subscribe_safe_with(|_| {}, sink, call_site)
    }

    fn subscribe_safe_with<F>(
        self,
        mut on_next: F,
        sink: &ErrorSink,
        call_site: CallSite,
    ) -> Subscription
    where
        F: FnMut(T) + Send + 'static,
    {
        let task_sink = sink.clone();
        let spawned = spawn_consumer(self, move |notification| match notification {
            Notification::Next(value) => {
                on_next(value);
                ControlFlow::Continue(())
            }
            Notification::Error(error) => {
                error!("An exception went unhandled: {}, caller: {}", error, call_site);
                task_sink.push(error);
                ControlFlow::Break(())
            }
            Notification::Completed => ControlFlow::Break(()),
        });

        spawned.unwrap_or_else(|error| {
            error!("An exception went unhandled: {}, caller: {}", error, call_site);
            sink.push(error);
            Subscription::empty()
        })
    }
}

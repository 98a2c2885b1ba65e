// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lifecycle bracket: a setup hook paired with a guaranteed teardown hook.
//!
//! The subscription starts at the first poll of the returned stream. At that moment
//! `on_subscribed` runs, before the source is polled. The subscription ends when the
//! stream is dropped, or once the source's completion or error has been delivered.
//! At that point the source is dropped and `on_unsubscribed` runs exactly once.
//!
//! # Example
//!
//! ```
//! use rivulet_stream::DoLifetimeExt;
//! use rivulet_core::StreamItem;
//! use futures::{stream, StreamExt};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let active = Arc::new(AtomicUsize::new(0));
//! let (up, down) = (active.clone(), active.clone());
//!
//! let source = stream::iter(vec![StreamItem::Value(1), StreamItem::Value(2)]);
//! let bracketed = source.do_lifetime(
//!     move || {
//!         up.fetch_add(1, Ordering::SeqCst);
//!         Ok(())
//!     },
//!     move || {
//!         down.fetch_sub(1, Ordering::SeqCst);
//!     },
//! );
//!
//! let values: Vec<_> = bracketed.collect().await;
//! assert_eq!(values, vec![StreamItem::Value(1), StreamItem::Value(2)]);
//! assert_eq!(active.load(Ordering::SeqCst), 0);
//! # }
//! ```
//!
//! # Refusing a subscription
//!
//! If `on_subscribed` returns an error, that error is the only item the stream yields.
//! The source is dropped without being polled and `on_unsubscribed` is never called,
//! since the subscription never started.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::{ready, Stream};
use pin_project::pin_project;
use rivulet_core::{DisposeBag, Result, StreamItem};

/// Extension trait providing the `do_lifetime` operator.
pub trait DoLifetimeExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Brackets the subscription to this stream with a pair of hooks.
    ///
    /// See the [module-level documentation](crate::do_lifetime) for the exact contract.
    fn do_lifetime<OnSub, OnUnsub>(
        self,
        on_subscribed: OnSub,
        on_unsubscribed: OnUnsub,
    ) -> DoLifetime<Self, OnSub, OnUnsub>
    where
        OnSub: FnOnce() -> Result<()>,
        OnUnsub: FnOnce() + Send + 'static;
}

impl<T, S> DoLifetimeExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Sized,
{
    fn do_lifetime<OnSub, OnUnsub>(
        self,
        on_subscribed: OnSub,
        on_unsubscribed: OnUnsub,
    ) -> DoLifetime<Self, OnSub, OnUnsub>
    where
        OnSub: FnOnce() -> Result<()>,
        OnUnsub: FnOnce() + Send + 'static,
    {
        DoLifetime {
            source: Some(self),
            teardown: DisposeBag::new(),
            on_subscribed: Some(on_subscribed),
            on_unsubscribed: Some(on_unsubscribed),
            phase: Phase::Idle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Active,
    Finished,
}

/// Stream returned by [`DoLifetimeExt::do_lifetime`].
///
/// The source is declared before the teardown bag: on drop it is released first,
/// then the bag runs `on_unsubscribed`.
#[pin_project]
pub struct DoLifetime<S, OnSub, OnUnsub> {
    #[pin]
    source: Option<S>,
    teardown: DisposeBag,
    on_subscribed: Option<OnSub>,
    on_unsubscribed: Option<OnUnsub>,
    phase: Phase,
}

impl<S, OnSub, OnUnsub> DoLifetime<S, OnSub, OnUnsub> {
    /// Returns `true` while the subscription is established and not yet released.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }
}

impl<T, S, OnSub, OnUnsub> Stream for DoLifetime<S, OnSub, OnUnsub>
where
    S: Stream<Item = StreamItem<T>>,
    OnSub: FnOnce() -> Result<()>,
    OnUnsub: FnOnce() + Send + 'static,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        match *this.phase {
            Phase::Finished => return Poll::Ready(None),
            Phase::Idle => {
                let subscribed = this.on_subscribed.take().map_or(Ok(()), |hook| hook());
                if let Err(error) = subscribed {
                    this.source.set(None);
                    this.on_unsubscribed.take();
                    *this.phase = Phase::Finished;
                    return Poll::Ready(Some(StreamItem::Error(error)));
                }

                if let Some(hook) = this.on_unsubscribed.take() {
                    this.teardown.add_action(hook);
                }
                *this.phase = Phase::Active;
            }
            Phase::Active => {}
        }

        let Some(source) = this.source.as_mut().as_pin_mut() else {
            *this.phase = Phase::Finished;
            return Poll::Ready(None);
        };

        let item = ready!(source.poll_next(cx));
        let terminal = !matches!(item, Some(StreamItem::Value(_)));
        if terminal {
            this.source.set(None);
            this.teardown.dispose();
            *this.phase = Phase::Finished;
        }

        Poll::Ready(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.phase, &self.source) {
            (Phase::Finished, _) | (_, None) => (0, Some(0)),
            (_, Some(source)) => {
                let (_, upper) = source.size_hint();
                (0, upper.map(|n| n + 1))
            }
        }
    }
}

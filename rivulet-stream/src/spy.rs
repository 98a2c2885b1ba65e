// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Diagnostic pass-through that logs every lifecycle event of a stream.
//!
//! Each line has the form `{name}: {event} on {thread id}`. Logged events:
//! obtaining the stream, the first poll, every value and error, completion, and
//! the drop of a stream that had been polled.

use core::fmt::Debug;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::{ready, Stream};
use pin_project::{pin_project, pinned_drop};
use rivulet_core::StreamItem;
use std::thread;

/// Extension trait providing the `spy` operator.
pub trait SpyExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Logs lifecycle events under `name`. Items pass through unchanged.
    fn spy(self, name: impl Into<String>) -> Spy<Self>;
}

impl<T, S> SpyExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Sized,
    T: Debug,
{
    fn spy(self, name: impl Into<String>) -> Spy<Self> {
        let name = name.into();
        info!("{}: Observable obtained on {:?}", name, thread::current().id());
        Spy {
            inner: self,
            name,
            subscribed: false,
        }
    }
}

/// Stream returned by [`SpyExt::spy`].
#[pin_project(PinnedDrop)]
pub struct Spy<S> {
    #[pin]
    inner: S,
    name: String,
    subscribed: bool,
}

impl<T, S> Stream for Spy<S>
where
    S: Stream<Item = StreamItem<T>>,
    T: Debug,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        let thread_id = thread::current().id();

        if !*this.subscribed {
            *this.subscribed = true;
            info!("{}: Subscribed to on {:?}", this.name, thread_id);
        }

        let item = ready!(this.inner.poll_next(cx));
        match &item {
            Some(StreamItem::Value(value)) => {
                info!("{}: OnNext({:?}) on {:?}", this.name, value, thread_id);
            }
            Some(StreamItem::Error(e)) => {
                info!("{}: OnError({}) on {:?}", this.name, e, thread_id);
            }
            None => {
                info!("{}: OnCompleted() on {:?}", this.name, thread_id);
            }
        }

        Poll::Ready(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[pinned_drop]
impl<S> PinnedDrop for Spy<S> {
    fn drop(self: Pin<&mut Self>) {
        if self.subscribed {
            info!("{}: Cleaned up on {:?}", self.name, thread::current().id());
        }
    }
}

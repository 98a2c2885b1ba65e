// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::task::noop_waker_ref;
use futures::{Stream, StreamExt};
use std::task::{Context, Poll};
use rivulet_core::StreamItem;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// What a recorded stream did, and when (relative to the recorder's start).
#[derive(Debug, PartialEq)]
pub enum Event<T> {
    Value(Duration, T),
    Error(Duration),
    Completed(Duration),
}

/// Spawns a consumer that timestamps every event of `stream` until it ends.
///
/// Timestamps are truncated to whole milliseconds.
pub fn record<S, T>(stream: S) -> JoinHandle<Vec<Event<T>>>
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    let start = Instant::now();
    let elapsed = move || Duration::from_millis(start.elapsed().as_millis() as u64);
    tokio::spawn(async move {
        let mut stream = Box::pin(stream);
        let mut events = Vec::new();
        while let Some(item) = stream.next().await {
            events.push(match item {
                StreamItem::Value(value) => Event::Value(elapsed(), value),
                StreamItem::Error(_) => Event::Error(elapsed()),
            });
        }
        events.push(Event::Completed(elapsed()));
        events
    })
}

pub const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Polls `stream` exactly once without waiting.
pub fn poll_once<S>(stream: &mut S) -> Poll<Option<S::Item>>
where
    S: Stream + Unpin,
{
    stream.poll_next_unpin(&mut Context::from_waker(noop_waker_ref()))
}

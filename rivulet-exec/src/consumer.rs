// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::ops::ControlFlow;
use core::pin::{pin, Pin};
use core::task::Poll;
use futures::future::poll_fn;
use futures::Stream;
use parking_lot::Mutex;
use rivulet_core::{CancellationToken, Result, RivuletError, StreamItem, Subscription};
use std::sync::Arc;

/// What a consumer observes from its source.
pub(crate) enum Notification<T> {
    Next(T),
    Error(RivuletError),
    Completed,
}

type SourceSlot<S> = Arc<Mutex<Option<Pin<Box<S>>>>>;

/// Drives `stream` on a tokio task, feeding every notification to `handler`.
///
/// The task stops when the handler breaks, the stream completes, or the returned
/// subscription is released. Releasing drops the source before returning.
///
/// # Errors
///
/// Returns a subscription error when called outside a tokio runtime.
pub(crate) fn spawn_consumer<S, T, H>(stream: S, mut handler: H) -> Result<Subscription>
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
    H: FnMut(Notification<T>) -> ControlFlow<()> + Send + 'static,
{
    let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
        RivuletError::subscription_error(format!("no tokio runtime to drive the subscriber: {e}"))
    })?;

    let slot: SourceSlot<S> = Arc::new(Mutex::new(Some(Box::pin(stream))));
    let token = CancellationToken::new();

    let task_slot = slot.clone();
    let task_token = token.clone();
    runtime.spawn(async move {
        let mut cancelled = pin!(task_token.cancelled());

        loop {
            let next = poll_fn(|cx| {
                if cancelled.as_mut().poll(cx).is_ready() {
                    return Poll::Ready(None);
                }
                match task_slot.lock().as_mut() {
                    Some(source) => source.as_mut().poll_next(cx).map(Some),
                    None => Poll::Ready(None),
                }
            })
            .await;

            let notification = match next {
                None => break,
                Some(Some(StreamItem::Value(value))) => Notification::Next(value),
                Some(Some(StreamItem::Error(error))) => Notification::Error(error),
                Some(None) => Notification::Completed,
            };
            let done = matches!(notification, Notification::Completed);

            if handler(notification).is_break() || done {
                break;
            }
        }

        let source = task_slot.lock().take();
        drop(source);
    });

    Ok(Subscription::new(move || {
        let source = slot.lock().take();
        drop(source);
        token.cancel();
    }))
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension methods turning tokio receivers into rivulet streams.

use futures::stream::Map;
use futures::StreamExt;
use rivulet_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

/// Stream returned by [`UnboundedReceiverExt::into_stream_items`].
pub type ReceiverStream<T> = Map<UnboundedReceiverStream<T>, fn(T) -> StreamItem<T>>;

/// Stream returned by [`UnboundedReceiverExt::into_fallible_stream`].
pub type FallibleReceiverStream<T> = UnboundedReceiverStream<StreamItem<T>>;

/// Extension trait for `UnboundedReceiver` to feed rivulet operators.
pub trait UnboundedReceiverExt<T> {
    /// Wraps every received value in [`StreamItem::Value`].
    ///
    /// The stream completes once every sender is dropped.
    ///
    /// ```rust
    /// use rivulet::prelude::*;
    /// use futures::StreamExt;
    /// use tokio::sync::mpsc;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let (tx, rx) = mpsc::unbounded_channel::<u32>();
    /// let mut readings = rx.into_stream_items().pairwise();
    ///
    /// tx.send(7).unwrap();
    /// let first = readings.next().await.unwrap().unwrap();
    /// assert_eq!(first.previous, None);
    /// # }
    /// ```
    fn into_stream_items(self) -> ReceiverStream<T>;
}

impl<T> UnboundedReceiverExt<T> for mpsc::UnboundedReceiver<T> {
    fn into_stream_items(self) -> ReceiverStream<T> {
        UnboundedReceiverStream::new(self).map(StreamItem::Value as fn(T) -> StreamItem<T>)
    }
}

/// Extension trait for receivers that already carry [`StreamItem`]s, so producers
/// can push errors.
pub trait FallibleReceiverExt<T> {
    /// Forwards received items unchanged.
    fn into_fallible_stream(self) -> FallibleReceiverStream<T>;
}

impl<T> FallibleReceiverExt<T> for mpsc::UnboundedReceiver<StreamItem<T>> {
    fn into_fallible_stream(self) -> FallibleReceiverStream<T> {
        UnboundedReceiverStream::new(self)
    }
}

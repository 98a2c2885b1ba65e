// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{future::ready, Stream, StreamExt};
use rivulet_core::StreamItem;

/// Extension trait providing the `where_some` operator.
pub trait WhereSomeExt<T>: Stream<Item = StreamItem<Option<T>>> + Sized {
    /// Drops `None` values and unwraps the rest. Errors pass through.
    ///
    /// ```
    /// use rivulet_stream::WhereSomeExt;
    /// use rivulet_core::StreamItem;
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let source = stream::iter(vec![
    ///     StreamItem::Value(Some(1)),
    ///     StreamItem::Value(None),
    ///     StreamItem::Value(Some(3)),
    /// ]);
    ///
    /// let values: Vec<_> = source.where_some().collect().await;
    /// assert_eq!(values, vec![StreamItem::Value(1), StreamItem::Value(3)]);
    /// # }
    /// ```
    fn where_some(self) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        T: Send + 'static;
}

impl<T, S> WhereSomeExt<T> for S
where
    S: Stream<Item = StreamItem<Option<T>>> + Send + Sized + 'static,
{
    fn where_some(self) -> impl Stream<Item = StreamItem<T>> + Send + Unpin
    where
        T: Send + 'static,
    {
        Box::pin(self.filter_map(|item| {
            ready(match item {
                StreamItem::Value(Some(value)) => Some(StreamItem::Value(value)),
                StreamItem::Value(None) => None,
                StreamItem::Error(e) => Some(StreamItem::Error(e)),
            })
        }))
    }
}

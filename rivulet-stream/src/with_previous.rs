// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pairwise folding: combine each item with the one before it.
//!
//! Two flavours:
//!
//! - [`with_previous`](WithPreviousExt::with_previous) seeds the history with
//!   `T::default()`, so the first emission is `project(T::default(), first)`.
//! - [`pairwise`](WithPreviousExt::pairwise) emits [`WithPrevious`] with
//!   `previous: None` for the first item, for callers that must tell "no previous"
//!   apart from a zero value.
//!
//! Both are one-to-one and synchronous. Errors pass through without touching the
//! history and never end the stream.
//!
//! ```
//! use rivulet_stream::WithPreviousExt;
//! use rivulet_core::StreamItem;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = stream::iter(vec![StreamItem::Value(1), StreamItem::Value(4), StreamItem::Value(9)]);
//! let deltas: Vec<_> = source
//!     .with_previous(|previous, current| current - previous)
//!     .collect()
//!     .await;
//!
//! assert_eq!(
//!     deltas,
//!     vec![StreamItem::Value(1), StreamItem::Value(3), StreamItem::Value(5)]
//! );
//! # }
//! ```

use crate::types::WithPrevious;
use futures::{future::ready, Stream, StreamExt};
use rivulet_core::StreamItem;

/// Extension trait providing the pairwise folding operators.
pub trait WithPreviousExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Emits `project(previous, current)` for every value, where `previous` starts as
    /// `T::default()`.
    fn with_previous<R, F>(self, project: F) -> impl Stream<Item = StreamItem<R>> + Send + Unpin
    where
        T: Clone + Default + Send + 'static,
        R: Send + 'static,
        F: FnMut(T, T) -> R + Send + 'static;

    /// Emits each value together with its predecessor, `None` for the first one.
    fn pairwise(self) -> impl Stream<Item = StreamItem<WithPrevious<T>>> + Send + Unpin
    where
        T: Clone + Send + 'static;
}

impl<T, S> WithPreviousExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + Sized + 'static,
{
    fn with_previous<R, F>(self, mut project: F) -> impl Stream<Item = StreamItem<R>> + Send + Unpin
    where
        T: Clone + Default + Send + 'static,
        R: Send + 'static,
        F: FnMut(T, T) -> R + Send + 'static,
    {
        Box::pin(self.scan(T::default(), move |last: &mut T, item: StreamItem<T>| {
            ready(Some(match item {
                StreamItem::Value(current) => {
                    let previous = core::mem::replace(last, current.clone());
                    StreamItem::Value(project(previous, current))
                }
                StreamItem::Error(e) => StreamItem::Error(e),
            }))
        }))
    }

    fn pairwise(self) -> impl Stream<Item = StreamItem<WithPrevious<T>>> + Send + Unpin
    where
        T: Clone + Send + 'static,
    {
        Box::pin(self.scan(None, |state: &mut Option<T>, item: StreamItem<T>| {
            ready(Some(match item {
                StreamItem::Value(current) => {
                    let previous = state.replace(current.clone());
                    StreamItem::Value(WithPrevious::new(previous, current))
                }
                StreamItem::Error(e) => StreamItem::Error(e),
            }))
        }))
    }
}

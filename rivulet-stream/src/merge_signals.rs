// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Merging heterogeneous streams into one stream of payload-less ticks.
//!
//! [`to_signal`](ToSignalExt::to_signal) erases a stream's payload type, keeping
//! errors. [`merge_signals`] interleaves any number of signal streams in delivery
//! order. The [`merge_signals!`](crate::merge_signals!) macro does both in one step
//! for streams of different item types.
//!
//! # Termination
//!
//! - Completes once every input has completed (immediately for no inputs).
//! - Fails fast: the first error from any input is emitted, every input is dropped,
//!   and the merged stream completes.
//!
//! ```
//! use rivulet_stream::merge_signals;
//! use rivulet_core::StreamItem;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let numbers = stream::iter(vec![StreamItem::Value(1), StreamItem::Value(2)]);
//! let words = stream::iter(vec![StreamItem::Value("three")]);
//!
//! let ticks: Vec<_> = merge_signals!(numbers, words).collect().await;
//! assert_eq!(ticks.len(), 3);
//! assert!(ticks.iter().all(StreamItem::is_value));
//! # }
//! ```

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{select_all, FusedStream, SelectAll};
use futures::{ready, Stream, StreamExt};
use rivulet_core::StreamItem;

/// A boxed stream of ticks.
pub type SignalStream = Pin<Box<dyn Stream<Item = StreamItem<()>> + Send + 'static>>;

/// Extension trait converting any stream into a [`SignalStream`].
pub trait ToSignalExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Replaces every value with `()`. Errors and completion are forwarded.
    fn to_signal(self) -> SignalStream;
}

impl<T, S> ToSignalExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + Sized + 'static,
    T: 'static,
{
    fn to_signal(self) -> SignalStream {
        Box::pin(self.map(|item| item.map(|_| ())))
    }
}

/// Merges signal streams into a single tick stream.
///
/// See the [module-level documentation](crate::merge_signals) for termination rules.
pub fn merge_signals<I>(streams: I) -> MergeSignals
where
    I: IntoIterator<Item = SignalStream>,
{
    MergeSignals {
        inputs: Some(select_all(streams)),
    }
}

/// Stream returned by [`merge_signals`].
pub struct MergeSignals {
    inputs: Option<SelectAll<SignalStream>>,
}

impl MergeSignals {
    /// Number of inputs still connected.
    pub fn active_inputs(&self) -> usize {
        self.inputs.as_ref().map_or(0, SelectAll::len)
    }
}

impl Stream for MergeSignals {
    type Item = StreamItem<()>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let Some(inputs) = self.inputs.as_mut() else {
            return Poll::Ready(None);
        };

        match ready!(inputs.poll_next_unpin(cx)) {
            Some(StreamItem::Error(e)) => {
                self.inputs = None;
                Poll::Ready(Some(StreamItem::Error(e)))
            }
            Some(tick) => Poll::Ready(Some(tick)),
            None => {
                self.inputs = None;
                Poll::Ready(None)
            }
        }
    }
}

impl FusedStream for MergeSignals {
    fn is_terminated(&self) -> bool {
        self.inputs.is_none()
    }
}

/// Converts each argument with `to_signal()` and merges them with [`merge_signals`].
///
/// Accepts one or more streams, each with its own item type.
#[macro_export]
macro_rules! merge_signals {
    ($($stream:expr),+ $(,)?) => {
        $crate::merge_signals::merge_signals([
            $($crate::merge_signals::ToSignalExt::to_signal($stream)),+
        ])
    };
}

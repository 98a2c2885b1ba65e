// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Rate limiting: pace values so consecutive emissions are at least one interval apart.
//!
//! Unlike a throttle, nothing is dropped. A value is emitted as soon as it becomes
//! current, then the stream stays silent for `interval` before the next value may go
//! out. Bursts are drained in source order.
//!
//! The source is read at most one value ahead of the gate, so a source that is always
//! ready (an iterator, a saturated channel) is paced instead of drained into memory.
//!
//! - **Completion** is delivered once the interval after the last emission has elapsed.
//! - **Errors** are delivered as soon as they are read, without waiting for the gate,
//!   and end the stream. A value already read ahead is emitted first.
//! - **Zero interval** makes the operator a pass-through; no timer is armed.
//! - **Drop** cancels the pending interval.
//!
//! # Example
//!
//! ```
//! use rivulet_stream_time::LimitRateExt;
//! use rivulet_runtime::TokioTimer;
//! use rivulet_core::StreamItem;
//! use futures::{stream, StreamExt};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let start = tokio::time::Instant::now();
//! let burst = stream::iter(vec![StreamItem::Value(1), StreamItem::Value(2), StreamItem::Value(3)]);
//!
//! let paced: Vec<_> = burst
//!     .limit_rate_with_timer(Duration::from_millis(100), TokioTimer)
//!     .collect()
//!     .await;
//!
//! assert_eq!(paced.len(), 3);
//! assert!(start.elapsed() >= Duration::from_millis(300));
//! # }
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use core::time::Duration;
use futures::Stream;
use pin_project::pin_project;
use rivulet_core::StreamItem;
use rivulet_runtime::Timer;

/// Extension trait providing the `limit_rate` operator with an explicit timer.
pub trait LimitRateExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Paces values `interval` apart, using `timer` for the silences.
    ///
    /// See the [module-level documentation](crate::limit_rate) for details.
    fn limit_rate_with_timer<TM>(self, interval: Duration, timer: TM) -> LimitRate<Self, T, TM>
    where
        TM: Timer;
}

impl<T, S> LimitRateExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Sized,
{
    fn limit_rate_with_timer<TM>(self, interval: Duration, timer: TM) -> LimitRate<Self, T, TM>
    where
        TM: Timer,
    {
        LimitRate {
            stream: Some(self),
            gate: None,
            pending: None,
            timer,
            interval,
            source_done: false,
            terminated: false,
        }
    }
}

/// `limit_rate` using the default tokio timer.
#[cfg(feature = "runtime-tokio")]
pub trait LimitRateWithDefaultTimerExt<T>: LimitRateExt<T> {
    /// Paces values `interval` apart on tokio's clock.
    fn limit_rate(self, interval: Duration) -> LimitRate<Self, T, rivulet_runtime::TokioTimer> {
        self.limit_rate_with_timer(interval, rivulet_runtime::TokioTimer)
    }
}

#[cfg(feature = "runtime-tokio")]
impl<T, S> LimitRateWithDefaultTimerExt<T> for S where S: Stream<Item = StreamItem<T>> + Sized {}

/// Stream returned by [`LimitRateExt::limit_rate_with_timer`].
#[pin_project]
pub struct LimitRate<S, T, TM>
where
    TM: Timer,
{
    #[pin]
    stream: Option<S>,
    #[pin]
    gate: Option<TM::Sleep>,
    pending: Option<T>,
    timer: TM,
    interval: Duration,
    source_done: bool,
    terminated: bool,
}

impl<S, T, TM> LimitRate<S, T, TM>
where
    TM: Timer,
{
    /// Number of values read from the source and waiting for their turn (0 or 1).
    pub fn queued(&self) -> usize {
        usize::from(self.pending.is_some())
    }
}

impl<S, T, TM> Stream for LimitRate<S, T, TM>
where
    S: Stream<Item = StreamItem<T>>,
    TM: Timer,
{
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.terminated {
            return Poll::Ready(None);
        }

        // 1. Read one value ahead; an error skips the gate
        if this.pending.is_none() {
            if let Some(source) = this.stream.as_mut().as_pin_mut() {
                match source.poll_next(cx) {
                    Poll::Ready(Some(StreamItem::Value(value))) => *this.pending = Some(value),
                    Poll::Ready(Some(StreamItem::Error(err))) => {
                        this.stream.set(None);
                        this.gate.set(None);
                        *this.terminated = true;
                        return Poll::Ready(Some(StreamItem::Error(err)));
                    }
                    Poll::Ready(None) => {
                        this.stream.set(None);
                        *this.source_done = true;
                    }
                    Poll::Pending => {}
                }
            }
        }

        // 2. Stay silent until the interval after the last emission has elapsed
        if let Some(gate) = this.gate.as_mut().as_pin_mut() {
            if gate.poll(cx).is_pending() {
                return Poll::Pending;
            }
            this.gate.set(None);
        }

        // 3. Emit the value read ahead and close the gate behind it
        if let Some(value) = this.pending.take() {
            if !this.interval.is_zero() {
                this.gate.set(Some(this.timer.sleep_future(*this.interval)));
            }
            return Poll::Ready(Some(StreamItem::Value(value)));
        }

        if *this.source_done {
            *this.terminated = true;
            return Poll::Ready(None);
        }

        Poll::Pending
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.terminated {
            return (0, Some(0));
        }
        let queued = self.queued();
        match &self.stream {
            Some(source) => {
                let (_, upper) = source.size_hint();
                (queued, upper.and_then(|n| n.checked_add(queued)))
            }
            None => (queued, Some(queued)),
        }
    }
}

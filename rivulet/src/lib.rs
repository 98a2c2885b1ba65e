// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rivulet
//!
//! Push-stream operators built on `futures::Stream`.
//!
//! A rivulet stream yields [`StreamItem<T>`]: either a value or an error. Completion is
//! the end of the stream, and unsubscribing is dropping it (or releasing a
//! [`Subscription`] for consumers that run on their own task).
//!
//! | Need | Operator | Crate |
//! |------|----------|-------|
//! | Setup and guaranteed teardown per subscription | `do_lifetime` | `rivulet-stream` |
//! | Keep emissions an interval apart without dropping | `limit_rate` | `rivulet-stream-time` |
//! | Project each value with its predecessor | `with_previous`, `pairwise` | `rivulet-stream` |
//! | Consume without letting errors escape | `subscribe_safe` | `rivulet-exec` |
//! | Merge heterogeneous streams into ticks | `merge_signals!` | `rivulet-stream` |
//!
//! ## Quick Start
//!
//! ```rust
//! use rivulet::prelude::*;
//! use futures::StreamExt;
//! use std::time::Duration;
//! use tokio::sync::mpsc;
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let (tx, rx) = mpsc::unbounded_channel::<i32>();
//! let mut deltas = Box::pin(
//!     rx.into_stream_items()
//!         .with_previous(|previous, current| current - previous)
//!         .limit_rate(Duration::from_millis(100)),
//! );
//!
//! tx.send(10).unwrap();
//! tx.send(15).unwrap();
//!
//! assert_eq!(deltas.next().await.unwrap().unwrap(), 10);
//! assert_eq!(deltas.next().await.unwrap().unwrap(), 5);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[cfg(feature = "runtime-tokio")]
pub mod receiver_ext;

pub use rivulet_core::{
    call_site, CallSite, DisposeBag, ErrorSink, Result, RivuletError, StreamItem, Subject,
    SubjectError, Subscription,
};
pub use rivulet_runtime::Timer;
pub use rivulet_stream::{merge_signals, SignalStream, WithPrevious};

#[cfg(feature = "runtime-tokio")]
pub use rivulet_runtime::TokioTimer;

/// Prelude module for convenient imports
pub mod prelude {
    pub use rivulet_core::{call_site, CallSite, ErrorSink, RivuletError, StreamItem, Subscription};
    pub use rivulet_exec::{DumpExt, SubscribeSafeExt};
    pub use rivulet_stream::prelude::*;
    pub use rivulet_stream_time::prelude::*;

    #[cfg(feature = "runtime-tokio")]
    pub use crate::receiver_ext::{FallibleReceiverExt, UnboundedReceiverExt};
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stream operators for lifecycle tracking, pairwise history and signal merging.
//!
//! All operators work on streams of [`StreamItem<T>`](rivulet_core::StreamItem) and
//! are exposed as extension traits, so they chain like any other `StreamExt` method.
//!
//! | Operator | Trait | Purpose |
//! |----------|-------|---------|
//! | [`do_lifetime`] | [`DoLifetimeExt`] | Run hooks when a subscription starts and ends |
//! | [`with_previous`] | [`WithPreviousExt`] | Project each value with its predecessor |
//! | [`pairwise`] | [`WithPreviousExt`] | Pair each value with an optional predecessor |
//! | [`to_signal`] | [`ToSignalExt`] | Erase the payload, keep the timing |
//! | [`merge_signals`](merge_signals()) | - | Merge signal streams, fail fast on errors |
//! | [`where_some`] | [`WhereSomeExt`] | Drop `None` values |
//! | [`spy`] | [`SpyExt`] | Log every lifecycle event |
//!
//! Termination differs per operator. `do_lifetime` and `merge_signals` end after
//! delivering an error; `with_previous`, `pairwise`, `where_some` and `spy` forward
//! errors and keep going.
//!
//! # Example
//!
//! ```
//! use rivulet_stream::prelude::*;
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let readings = stream::iter(vec![
//!     StreamItem::Value(Some(10)),
//!     StreamItem::Value(None),
//!     StreamItem::Value(Some(13)),
//! ]);
//!
//! let changes: Vec<_> = readings
//!     .where_some()
//!     .pairwise()
//!     .collect()
//!     .await;
//!
//! assert_eq!(changes[1], StreamItem::Value(WithPrevious::new(Some(10), 13)));
//! # }
//! ```
//!
//! [`do_lifetime`]: DoLifetimeExt::do_lifetime
//! [`with_previous`]: WithPreviousExt::with_previous
//! [`pairwise`]: WithPreviousExt::pairwise
//! [`to_signal`]: ToSignalExt::to_signal
//! [`where_some`]: WhereSomeExt::where_some
//! [`spy`]: SpyExt::spy

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod do_lifetime;
pub mod merge_signals;
pub mod prelude;
pub mod spy;
pub mod types;
pub mod where_some;
pub mod with_previous;

pub use do_lifetime::{DoLifetime, DoLifetimeExt};
pub use merge_signals::{merge_signals, MergeSignals, SignalStream, ToSignalExt};
pub use spy::{Spy, SpyExt};
pub use types::WithPrevious;
pub use where_some::WhereSomeExt;
pub use with_previous::WithPreviousExt;

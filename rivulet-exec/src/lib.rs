// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal subscribers for rivulet streams.
//!
//! - [`SubscribeSafeExt`] consumes a stream on a tokio task and routes the first
//!   error to a shared [`ErrorSink`](rivulet_core::ErrorSink) instead of the caller.
//! - [`DumpExt`] consumes a stream and logs every notification.
//!
//! Both return a [`Subscription`](rivulet_core::Subscription); releasing it drops
//! the source and stops the task.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
#[cfg(feature = "runtime-tokio")]
mod consumer;
#[cfg(feature = "runtime-tokio")]
pub mod dump;
#[cfg(feature = "runtime-tokio")]
pub mod subscribe_safe;

#[cfg(feature = "runtime-tokio")]
pub use dump::DumpExt;
#[cfg(feature = "runtime-tokio")]
pub use subscribe_safe::SubscribeSafeExt;

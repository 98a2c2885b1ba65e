// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based operators for rivulet streams.
//!
//! Operators take their notion of time from a [`Timer`](rivulet_runtime::Timer), so
//! they can be driven by tokio's clock in production and by a paused virtual clock in
//! tests.
//!
//! - [`limit_rate_with_timer`](LimitRateExt::limit_rate_with_timer) paces values with
//!   an explicit timer.
//! - [`limit_rate`](LimitRateWithDefaultTimerExt::limit_rate) does the same with
//!   [`TokioTimer`] (`runtime-tokio` feature, on by default).

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod limit_rate;
pub mod prelude;

pub use limit_rate::{LimitRate, LimitRateExt};

#[cfg(feature = "runtime-tokio")]
pub use limit_rate::LimitRateWithDefaultTimerExt;

#[cfg(feature = "runtime-tokio")]
pub use rivulet_runtime::TokioTimer;

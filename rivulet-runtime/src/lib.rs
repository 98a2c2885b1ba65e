// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time abstraction used by rivulet's time-based operators.
//!
//! Operators never call a clock directly; they receive a [`Timer`]. The default
//! implementation, [`TokioTimer`](impls::tokio::TokioTimer), follows tokio's clock,
//! so tests can pause and advance virtual time.

pub mod impls;
pub mod timer;

pub use timer::Timer;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioTimer;

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types shared by every rivulet crate.
//!
//! - [`StreamItem`] - a value or an error flowing through a stream
//! - [`RivuletError`] - the root error type
//! - [`Subscription`] / [`DisposeBag`] - release handles for active streams
//! - [`CallSite`] - diagnostic location attached to routed errors
//! - [`Subject`] - hot, multi-subscriber push entry point
//! - [`ErrorSink`] - shared destination for errors nobody handled locally

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod call_site;
pub mod cancellation_token;
pub mod dispose_bag;
pub mod error;
pub mod error_sink;
pub mod stream_item;
pub mod subject;
pub mod subject_error;
pub mod subscription;

pub use self::call_site::CallSite;
pub use self::cancellation_token::CancellationToken;
pub use self::dispose_bag::DisposeBag;
pub use self::error::{Result, RivuletError};
pub use self::error_sink::ErrorSink;
pub use self::stream_item::StreamItem;
pub use self::subject::Subject;
pub use self::subject_error::SubjectError;
pub use self::subscription::Subscription;

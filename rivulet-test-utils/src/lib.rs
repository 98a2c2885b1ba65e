// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the rivulet operator toolkit.
//!
//! Designed for development and testing only, not for production code.
//!
//! - **Channels**: [`test_channel`] and [`test_channel_with_errors`] give tests an
//!   imperative sender paired with a `StreamItem` stream.
//! - **Helpers**: [`unwrap_stream`], [`unwrap_value`], [`assert_no_element_emitted`]
//!   and [`assert_stream_ended`].
//! - **Fixtures**: [`TestData`] with `Person` and `Animal` variants.
//! - **Recorders**: [`HookCounter`] counts lifecycle hook invocations.
//!
//! ```rust
//! use rivulet_test_utils::test_data::{TestData, person_alice};
//!
//! match person_alice() {
//!     TestData::Person(p) => assert_eq!(p.name, "Alice"),
//!     _ => panic!("Expected person"),
//! }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod animal;
pub mod error_injection;
pub mod helpers;
pub mod hook_counter;
pub mod person;
pub mod test_data;

use futures::{Stream, StreamExt};
use rivulet_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use error_injection::ErrorInjectingStream;
pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream, unwrap_value};
pub use hook_counter::HookCounter;
pub use test_data::TestData;

/// Creates a test channel that automatically wraps values in `StreamItem::Value`.
///
/// ```rust
/// use rivulet_test_utils::test_channel;
/// use rivulet_test_utils::test_data::person_alice;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
/// tx.send(person_alice()).unwrap();
///
/// let item = stream.next().await.unwrap().unwrap(); // Option -> StreamItem -> Value
/// assert_eq!(item, person_alice());
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>`, so tests can inject errors.
///
/// ```rust
/// use rivulet_test_utils::test_channel_with_errors;
/// use rivulet_core::{StreamItem, RivuletError};
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel_with_errors();
///
/// tx.send(StreamItem::Value(42)).unwrap();
/// tx.send(StreamItem::Error(RivuletError::stream_error("test error"))).unwrap();
///
/// assert!(stream.next().await.unwrap().is_value());
/// assert!(stream.next().await.unwrap().is_error());
/// # }
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error propagation tests for `do_lifetime` operator.

use rivulet_core::{RivuletError, StreamItem};
use rivulet_stream::DoLifetimeExt;
use rivulet_test_utils::test_data::{person_alice, TestData};
use rivulet_test_utils::{
    assert_stream_ended, test_channel, test_channel_with_errors, unwrap_stream, HookCounter,
};

#[tokio::test]
async fn test_do_lifetime_refused_subscription_yields_single_error() -> anyhow::Result<()> {
    // Arrange
    let unsubscribed = HookCounter::new();
    let (tx, stream) = test_channel::<TestData>();
    tx.send(person_alice())?;
    let mut bracketed = stream.do_lifetime(
        || Err(RivuletError::subscription_error("pool exhausted")),
        unsubscribed.hook(),
    );

    // Act
    let first = unwrap_stream(&mut bracketed, 100).await;

    // Assert
    match first {
        StreamItem::Error(e) => {
            assert!(e.is_subscription_error());
            assert_eq!(e.to_string(), "Subscription error: pool exhausted");
        }
        StreamItem::Value(v) => panic!("Expected refusal error, got {v:?}"),
    }
    assert_stream_ended(&mut bracketed, 100).await;
    assert!(tx.is_closed(), "source must be dropped without polling");

    drop(bracketed);
    assert_eq!(unsubscribed.count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_do_lifetime_source_error_is_terminal() -> anyhow::Result<()> {
    // Arrange
    let unsubscribed = HookCounter::new();
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let mut bracketed = stream.do_lifetime(|| Ok(()), unsubscribed.hook());

    // Act
    tx.send(StreamItem::Value(person_alice()))?;
    assert!(unwrap_stream(&mut bracketed, 100).await.is_value());
    tx.send(StreamItem::Error(RivuletError::stream_error("upstream failed")))?;

    // Assert
    assert!(unwrap_stream(&mut bracketed, 100).await.is_error());
    assert_eq!(unsubscribed.count(), 1);
    assert!(tx.is_closed());
    assert_stream_ended(&mut bracketed, 100).await;

    drop(bracketed);
    assert_eq!(unsubscribed.count(), 1);

    Ok(())
}

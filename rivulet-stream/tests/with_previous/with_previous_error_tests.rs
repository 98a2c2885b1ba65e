// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error propagation tests for `with_previous` operator.

use rivulet_core::{RivuletError, StreamItem};
use rivulet_stream::WithPreviousExt;
use rivulet_test_utils::test_data::{person_alice, person_bob, TestData};
use rivulet_test_utils::{test_channel_with_errors, unwrap_stream, unwrap_value};

#[tokio::test]
async fn test_with_previous_errors_do_not_touch_history() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let mut result = stream.with_previous(|previous, current| (previous, current));

    // Act & Assert
    tx.send(StreamItem::Value(person_alice()))?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 100).await)),
        (TestData::default(), person_alice())
    );

    tx.send(StreamItem::Error(RivuletError::stream_error("Error")))?;
    assert!(matches!(
        unwrap_stream(&mut result, 100).await,
        StreamItem::Error(_)
    ));

    tx.send(StreamItem::Value(person_bob()))?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 100).await)),
        (person_alice(), person_bob())
    );

    Ok(())
}

#[tokio::test]
async fn test_with_previous_error_at_first_item() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let mut result = stream.with_previous(|previous, current| (previous, current));

    // Act & Assert
    tx.send(StreamItem::Error(RivuletError::stream_error("First error")))?;
    assert!(matches!(
        unwrap_stream(&mut result, 100).await,
        StreamItem::Error(_)
    ));

    tx.send(StreamItem::Value(person_alice()))?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut result, 100).await)),
        (TestData::default(), person_alice()),
        "Should continue with the default seed"
    );

    Ok(())
}

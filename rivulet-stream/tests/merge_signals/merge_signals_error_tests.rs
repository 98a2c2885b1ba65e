// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error propagation tests for `merge_signals`.

use futures::{stream, StreamExt};
use rivulet_core::{RivuletError, StreamItem};
use rivulet_stream::{merge_signals, ToSignalExt};
use rivulet_test_utils::test_data::person_alice;
use rivulet_test_utils::{
    assert_stream_ended, test_channel, test_channel_with_errors, unwrap_stream, unwrap_value,
};

#[tokio::test]
async fn test_merge_signals_first_error_releases_all_inputs() -> anyhow::Result<()> {
    // Arrange
    let (values_tx, values) = test_channel();
    let (errors_tx, errors) = test_channel_with_errors::<u32>();
    let mut merged = merge_signals!(values, errors);

    // Act
    values_tx.send(person_alice())?;
    unwrap_value(Some(unwrap_stream(&mut merged, 100).await));
    errors_tx.send(StreamItem::Error(RivuletError::stream_error("sensor offline")))?;

    // Assert
    match unwrap_stream(&mut merged, 100).await {
        StreamItem::Error(e) => {
            assert_eq!(e.to_string(), "Stream processing error: sensor offline");
        }
        StreamItem::Value(()) => panic!("Expected the input error"),
    }
    assert_stream_ended(&mut merged, 100).await;
    assert!(values_tx.is_closed());
    assert!(errors_tx.is_closed());
    assert_eq!(merged.active_inputs(), 0);

    Ok(())
}

#[tokio::test]
async fn test_to_signal_forwards_errors() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(vec![
        StreamItem::Value(1),
        StreamItem::Error(RivuletError::stream_error("bad reading")),
        StreamItem::Value(3),
    ]);

    // Act
    let ticks: Vec<_> = source.to_signal().collect().await;

    // Assert
    assert_eq!(ticks.len(), 3);
    assert!(ticks[1].is_error());

    Ok(())
}

#[tokio::test]
async fn test_merge_signals_error_ignores_later_ticks() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<u32>();
    let mut merged = merge_signals([stream.to_signal()]);

    // Act
    tx.send(StreamItem::Error(RivuletError::stream_error("first")))?;
    let _ = tx.send(StreamItem::Value(1));

    // Assert
    assert!(unwrap_stream(&mut merged, 100).await.is_error());
    assert_stream_ended(&mut merged, 100).await;

    Ok(())
}

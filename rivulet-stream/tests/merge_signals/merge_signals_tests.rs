// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, StreamExt};
use rivulet_core::StreamItem;
use rivulet_stream::{merge_signals, SignalStream, ToSignalExt};
use rivulet_test_utils::test_data::{animal_dog, person_alice};
use rivulet_test_utils::{
    assert_no_element_emitted, assert_stream_ended, test_channel, unwrap_stream, unwrap_value,
};
use std::time::Duration;
use tokio::time::{sleep, Instant};

fn delayed<T>(value: T, delay_ms: u64) -> impl futures::Stream<Item = StreamItem<T>> + Send
where
    T: Send + 'static,
{
    stream::once(async move {
        sleep(Duration::from_millis(delay_ms)).await;
        StreamItem::Value(value)
    })
}

#[tokio::test(start_paused = true)]
async fn test_merge_signals_ticks_in_delivery_order() -> anyhow::Result<()> {
    // Arrange
    let start = Instant::now();
    let mut merged = merge_signals!(delayed('x', 1), delayed(String::from("y"), 2));

    // Act
    let mut ticks = Vec::new();
    while let Some(item) = merged.next().await {
        unwrap_value(Some(item));
        ticks.push(start.elapsed());
    }

    // Assert
    assert_eq!(ticks, vec![Duration::from_millis(1), Duration::from_millis(2)]);

    Ok(())
}

#[tokio::test]
async fn test_merge_signals_heterogeneous_channels() -> anyhow::Result<()> {
    // Arrange
    let (people_tx, people) = test_channel();
    let (counts_tx, counts) = test_channel::<u32>();
    let mut merged = merge_signals!(people, counts);

    // Act & Assert
    people_tx.send(person_alice())?;
    unwrap_value(Some(unwrap_stream(&mut merged, 100).await));

    counts_tx.send(7)?;
    unwrap_value(Some(unwrap_stream(&mut merged, 100).await));

    people_tx.send(animal_dog())?;
    unwrap_value(Some(unwrap_stream(&mut merged, 100).await));

    Ok(())
}

#[tokio::test]
async fn test_merge_signals_completes_after_all_inputs() -> anyhow::Result<()> {
    // Arrange
    let (first_tx, first) = test_channel::<u32>();
    let (second_tx, second) = test_channel::<u32>();
    let mut merged = merge_signals([first.to_signal(), second.to_signal()]);

    // Act & Assert
    drop(first_tx);
    assert_no_element_emitted(&mut merged, 50).await;
    assert_eq!(merged.active_inputs(), 1);

    second_tx.send(1)?;
    unwrap_value(Some(unwrap_stream(&mut merged, 100).await));

    drop(second_tx);
    assert_stream_ended(&mut merged, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_merge_signals_empty_collection_completes_immediately() -> anyhow::Result<()> {
    // Arrange
    let mut merged = merge_signals(Vec::<SignalStream>::new());

    // Act & Assert
    assert_stream_ended(&mut merged, 10).await;

    Ok(())
}

#[tokio::test]
async fn test_to_signal_erases_payload() -> anyhow::Result<()> {
    // Arrange
    let source = stream::iter(vec![
        StreamItem::Value(person_alice()),
        StreamItem::Value(animal_dog()),
    ]);

    // Act
    let ticks: Vec<_> = source.to_signal().collect().await;

    // Assert
    assert_eq!(ticks, vec![StreamItem::Value(()), StreamItem::Value(())]);

    Ok(())
}

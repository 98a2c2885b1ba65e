// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::tokio::helpers::{ms, record, Event};
use rivulet_runtime::{Timer, TokioTimer};
use rivulet_stream_time::LimitRateExt;
use rivulet_test_utils::test_channel;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Tokio-backed timer that counts how many sleeps it armed.
#[derive(Clone, Debug, Default)]
struct CountingTimer {
    armed: Arc<AtomicUsize>,
}

impl Timer for CountingTimer {
    type Sleep = tokio::time::Sleep;
    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        self.armed.fetch_add(1, Ordering::SeqCst);
        TokioTimer.sleep_future(duration)
    }

    fn now(&self) -> Self::Instant {
        TokioTimer.now()
    }
}

#[tokio::test(start_paused = true)]
async fn test_limit_rate_arms_one_interval_per_value() -> anyhow::Result<()> {
    // Arrange
    let timer = CountingTimer::default();
    let (tx, stream) = test_channel::<u32>();
    let recorder = record(stream.limit_rate_with_timer(ms(20), timer.clone()));

    // Act
    tx.send(1)?;
    tx.send(2)?;
    tx.send(3)?;
    drop(tx);
    let events = recorder.await?;

    // Assert
    assert_eq!(events.last(), Some(&Event::Completed(ms(60))));
    assert_eq!(timer.armed.load(Ordering::SeqCst), 3);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_limit_rate_zero_interval_arms_no_timer() -> anyhow::Result<()> {
    // Arrange
    let timer = CountingTimer::default();
    let (tx, stream) = test_channel::<u32>();
    let recorder = record(stream.limit_rate_with_timer(Duration::ZERO, timer.clone()));

    // Act
    tx.send(1)?;
    tx.send(2)?;
    drop(tx);
    let events = recorder.await?;

    // Assert
    assert_eq!(events.len(), 3);
    assert_eq!(timer.armed.load(Ordering::SeqCst), 0);

    Ok(())
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{stream, StreamExt};
use parking_lot::Mutex;
use rivulet_core::{StreamItem, Subject};
use rivulet_stream::DoLifetimeExt;
use rivulet_test_utils::test_data::{person_alice, person_bob, TestData};
use rivulet_test_utils::{
    assert_no_element_emitted, assert_stream_ended, test_channel, unwrap_stream, unwrap_value,
    HookCounter,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::Poll;

#[tokio::test]
async fn test_do_lifetime_forwards_items_and_runs_hooks_once() -> anyhow::Result<()> {
    // Arrange
    let subscribed = HookCounter::new();
    let unsubscribed = HookCounter::new();
    let source = stream::iter(vec![
        StreamItem::Value(person_alice()),
        StreamItem::Value(person_bob()),
    ]);

    // Act
    let items: Vec<_> = source
        .do_lifetime(subscribed.ok_hook(), unsubscribed.hook())
        .collect()
        .await;

    // Assert
    assert_eq!(
        items,
        vec![
            StreamItem::Value(person_alice()),
            StreamItem::Value(person_bob())
        ]
    );
    assert_eq!(subscribed.count(), 1);
    assert_eq!(unsubscribed.count(), 1);

    Ok(())
}

#[tokio::test]
async fn test_do_lifetime_drop_releases_silent_source() -> anyhow::Result<()> {
    // Arrange
    let subscribed = HookCounter::new();
    let unsubscribed = HookCounter::new();
    let (_tx, stream) = test_channel::<TestData>();
    let mut bracketed = stream.do_lifetime(subscribed.ok_hook(), unsubscribed.hook());

    // Act
    assert_no_element_emitted(&mut bracketed, 50).await;
    assert!(bracketed.is_active());
    drop(bracketed);

    // Assert
    assert_eq!(subscribed.count(), 1);
    assert_eq!(unsubscribed.count(), 1);

    Ok(())
}

#[tokio::test]
async fn test_do_lifetime_never_polled_calls_no_hook() -> anyhow::Result<()> {
    // Arrange
    let subscribed = HookCounter::new();
    let unsubscribed = HookCounter::new();
    let (_tx, stream) = test_channel::<TestData>();

    // Act
    let bracketed = stream.do_lifetime(subscribed.ok_hook(), unsubscribed.hook());
    drop(bracketed);

    // Assert
    assert_eq!(subscribed.count(), 0);
    assert_eq!(unsubscribed.count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_do_lifetime_subscribes_before_polling_source() -> anyhow::Result<()> {
    // Arrange
    let log = Arc::new(Mutex::new(Vec::new()));
    let source_log = log.clone();
    let source = stream::poll_fn(move |_| {
        source_log.lock().push("polled");
        Poll::Ready(None::<StreamItem<i32>>)
    });
    let hook_log = log.clone();
    let teardown_log = log.clone();

    // Act
    let mut bracketed = source.do_lifetime(
        move || {
            hook_log.lock().push("subscribed");
            Ok(())
        },
        move || teardown_log.lock().push("unsubscribed"),
    );
    assert_stream_ended(&mut bracketed, 100).await;

    // Assert
    assert_eq!(*log.lock(), vec!["subscribed", "polled", "unsubscribed"]);

    Ok(())
}

#[tokio::test]
async fn test_do_lifetime_drops_source_before_teardown_hook() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<TestData>();
    let second_sender = tx.clone();
    let source_closed_at_teardown = Arc::new(AtomicBool::new(false));
    let observed = source_closed_at_teardown.clone();
    let mut bracketed = stream.do_lifetime(
        || Ok(()),
        move || observed.store(second_sender.is_closed(), Ordering::SeqCst),
    );

    // Act
    tx.send(person_alice())?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut bracketed, 100).await)),
        person_alice()
    );
    drop(bracketed);

    // Assert
    assert!(source_closed_at_teardown.load(Ordering::SeqCst));
    assert!(tx.is_closed());

    Ok(())
}

#[tokio::test]
async fn test_do_lifetime_completion_releases_before_drop() -> anyhow::Result<()> {
    // Arrange
    let unsubscribed = HookCounter::new();
    let (tx, stream) = test_channel::<TestData>();
    let mut bracketed = stream.do_lifetime(|| Ok(()), unsubscribed.hook());

    // Act
    tx.send(person_alice())?;
    unwrap_stream(&mut bracketed, 100).await;
    drop(tx);
    assert_stream_ended(&mut bracketed, 100).await;

    // Assert
    assert_eq!(unsubscribed.count(), 1);
    assert!(!bracketed.is_active());
    assert_stream_ended(&mut bracketed, 100).await;
    drop(bracketed);
    assert_eq!(unsubscribed.count(), 1);

    Ok(())
}

#[tokio::test]
async fn test_do_lifetime_each_subscription_is_bracketed() -> anyhow::Result<()> {
    // Arrange
    let subject = Subject::<TestData>::new();
    let subscribed = HookCounter::new();
    let unsubscribed = HookCounter::new();
    let mut first = subject
        .subscribe()?
        .do_lifetime(subscribed.ok_hook(), unsubscribed.hook());
    let mut second = subject
        .subscribe()?
        .do_lifetime(subscribed.ok_hook(), unsubscribed.hook());

    // Act
    subject.next(person_alice())?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut first, 100).await)),
        person_alice()
    );
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut second, 100).await)),
        person_alice()
    );
    drop(first);

    // Assert
    assert_eq!(subscribed.count(), 2);
    assert_eq!(unsubscribed.count(), 1);

    subject.close();
    assert_stream_ended(&mut second, 100).await;
    assert_eq!(unsubscribed.count(), 2);

    Ok(())
}

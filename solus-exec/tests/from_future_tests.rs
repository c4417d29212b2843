// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use solus_core::{Single, SolusError};
use solus_exec::{from_future, SubscribeExt};
use solus_single::SingleExt;
use solus_test_utils::{assert_ready_within, Event, RecordingObserver};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_from_future_resolves_through_map() -> anyhow::Result<()> {
    // Arrange
    let source = from_future(|| async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Ok(6)
    });

    // Act
    let value = assert_ready_within(source.map(|x| x * 7).into_future(), 1000).await?;

    // Assert
    assert_eq!(value, 42);
    Ok(())
}

#[tokio::test]
async fn test_from_future_forwards_error() {
    let source = from_future(|| async { Err::<i32, _>(SolusError::stream_error("timeout")) });

    let result = source.into_future().await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "Stream processing error: timeout"
    );
}

#[tokio::test]
async fn test_from_future_builds_new_future_per_subscription() -> anyhow::Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let source = from_future(move || {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        async move { Ok(n) }
    });

    let first = source.clone().into_future().await?;
    let second = source.into_future().await?;

    assert_eq!((first, second), (0, 1));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn test_cancel_aborts_running_future() {
    // Arrange
    let finished = Arc::new(AtomicBool::new(false));
    let flag = finished.clone();
    let source = from_future(move || {
        let flag = flag.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            flag.store(true, Ordering::SeqCst);
            Ok(1)
        }
    });
    let observer = RecordingObserver::<i32>::new();
    source.subscribe(observer.clone());

    // Act
    observer.cancel();
    tokio::time::sleep(Duration::from_millis(200)).await;

    // Assert
    assert!(!finished.load(Ordering::SeqCst));
    assert_eq!(observer.events(), vec![Event::Subscribed]);
}

#[test]
fn test_from_future_without_runtime_fails_subscription() {
    let source = from_future(|| async { Ok(1) });
    let observer = RecordingObserver::<i32>::new();

    source.subscribe(observer.clone());

    assert_eq!(observer.error_count(), 1);
    assert!(matches!(
        observer.events().last(),
        Some(Event::Error(SolusError::StreamProcessingError { .. }))
    ));
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use solus_core::{CancellationToken, IntoSolusError, SingleRef, SolusError};
use solus_exec::SubscribeExt;
use solus_single::{error, from_publisher, just, never, SingleExt};
use solus_test_utils::{assert_pending, assert_ready_within, ManualSingle};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
#[error("Test error: {0}")]
struct TestError(String);

#[tokio::test]
async fn test_into_future_resolves_with_mapped_value() -> anyhow::Result<()> {
    // Arrange
    let pipeline = just(5).map(|x| x * 2);

    // Act
    let value = pipeline.into_future().await?;

    // Assert
    assert_eq!(value, 10);
    Ok(())
}

#[tokio::test]
async fn test_into_future_resolves_with_upstream_error() {
    let result = error::<i32>(SolusError::stream_error("boom"))
        .map(|x| x * 2)
        .into_future()
        .await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "Stream processing error: boom"
    );
}

#[tokio::test]
async fn test_into_future_surfaces_user_error() {
    let result = just(3)
        .try_map(|x| -> solus_core::Result<i32> {
            Err(TestError(format!("bad input {x}")).into_solus())
        })
        .into_future()
        .await;

    assert!(matches!(result, Err(SolusError::UserError(_))));
}

#[tokio::test]
async fn test_into_future_waits_for_emission_from_another_task() -> anyhow::Result<()> {
    // Arrange
    let source = ManualSingle::<i32>::new();
    let upstream: SingleRef<i32> = source.clone();
    let mut future = upstream.map(|x| x + 1).into_future();

    // Act & Assert
    assert_pending(&mut future, 50).await;

    let emitter = source.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        emitter.succeed(41);
    });

    assert_eq!(assert_ready_within(future, 1000).await?, 42);
    Ok(())
}

#[tokio::test]
async fn test_dropping_future_cancels_pipeline() {
    // Arrange
    let source = ManualSingle::<i32>::new();
    let upstream: SingleRef<i32> = source.clone();
    let future = upstream.map(|x| x * 3).into_future();

    // Act
    drop(future);

    // Assert
    assert_eq!(source.cancel_count(), 1);
    assert!(source.handle_released(0));
}

#[tokio::test]
async fn test_completed_future_does_not_cancel_on_drop() -> anyhow::Result<()> {
    let source = ManualSingle::<i32>::new();
    let upstream: SingleRef<i32> = source.clone();
    let mut future = upstream.into_future();

    source.succeed(8);
    let value = (&mut future).await?;
    drop(future);

    assert_eq!(value, 8);
    assert_eq!(source.cancel_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_external_cancel_resolves_with_cancelled() {
    // Arrange
    let future = never::<i32>().map(|x| x + 1).into_future();
    let subscription = future.subscription();

    // Act
    subscription.cancel();
    let result = assert_ready_within(future, 1000).await;

    // Assert
    assert!(matches!(result, Err(SolusError::Cancelled)));
}

#[tokio::test]
async fn test_never_stays_pending() {
    let mut future = never::<i32>().into_future();

    assert_pending(&mut future, 50).await;
}

#[tokio::test]
async fn test_producer_releasing_observer_resolves_with_cancelled() {
    // Arrange
    let source = from_publisher::<i32, _>(|observer| {
        observer.on_subscribe(Arc::new(CancellationToken::new()));
        drop(observer);
    });

    // Act
    let result = assert_ready_within(source.into_future(), 1000).await;

    // Assert
    assert!(matches!(result, Err(SolusError::Cancelled)));
}

#[tokio::test]
async fn test_late_producer_release_wakes_pending_future() {
    // Arrange
    let parked = Arc::new(parking_lot::Mutex::new(None));
    let slot = parked.clone();
    let source = from_publisher::<i32, _>(move |observer| {
        observer.on_subscribe(Arc::new(CancellationToken::new()));
        *slot.lock() = Some(observer);
    });
    let mut future = source.into_future();
    assert_pending(&mut future, 20).await;

    // Act
    drop(parked.lock().take());

    // Assert
    let result = assert_ready_within(future, 1000).await;
    assert!(matches!(result, Err(SolusError::Cancelled)));
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use solus_rx::prelude::*;
use solus_test_utils::{Event, ManualSingle, RecordingObserver};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
#[error("Invalid order: {0}")]
struct OrderError(String);

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u32,
    quantity: u32,
}

fn validate(order: Order) -> Result<Order> {
    if order.quantity == 0 {
        return Err(OrderError(format!("order {} is empty", order.id)).into_solus());
    }
    Ok(order)
}

#[tokio::test]
async fn test_publisher_map_and_future_compose() -> anyhow::Result<()> {
    // Arrange
    let source = from_publisher::<Order, _>(|observer| {
        observer.on_subscribe(Arc::new(CancellationToken::new()));
        observer.on_success(Order { id: 1, quantity: 3 });
    });

    // Act
    let total = source
        .try_map(validate)
        .map(|order| order.quantity * 25)
        .into_future()
        .await?;

    // Assert
    assert_eq!(total, 75);
    Ok(())
}

#[tokio::test]
async fn test_validation_error_reaches_consumer_unchanged() {
    let result = just(Order { id: 7, quantity: 0 })
        .try_map(validate)
        .map(|order| order.quantity)
        .into_future()
        .await;

    assert_eq!(
        result.unwrap_err().to_string(),
        "User error: Invalid order: order 7 is empty"
    );
}

#[tokio::test]
async fn test_from_future_feeds_callbacks() -> anyhow::Result<()> {
    let (tx, rx) = tokio::sync::oneshot::channel();

    from_future(|| async { Ok(Order { id: 2, quantity: 4 }) })
        .map(|order| order.id)
        .subscribe_with(
            move |id| {
                let _ = tx.send(id);
            },
            |error| panic!("unexpected error: {error}"),
        );

    assert_eq!(rx.await?, 2);
    Ok(())
}

#[test]
fn test_cancel_from_consumer_reaches_source() {
    // Arrange
    let source = ManualSingle::<Order>::new();
    let upstream: SingleRef<Order> = source.clone();
    let observer = RecordingObserver::<u32>::new();
    upstream
        .try_map(validate)
        .map(|order| order.quantity)
        .subscribe(observer.clone());

    // Act
    observer.cancel();
    source.succeed(Order { id: 3, quantity: 1 });

    // Assert
    assert_eq!(source.cancel_count(), 1);
    assert_eq!(observer.events(), vec![Event::Subscribed]);
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use solus_core::{CancellationToken, ObserverRef, Single, SolusError};
use solus_single::{from_publisher, SingleExt};
use solus_test_utils::{CountingSubscription, Event, RecordingObserver};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_from_publisher_delivers_signals_unmodified() {
    // Arrange
    let source = from_publisher::<i32, _>(|observer| {
        observer.on_subscribe(Arc::new(CancellationToken::new()));
        observer.on_success(7);
    });
    let observer = RecordingObserver::<i32>::new();

    // Act
    source.subscribe(observer.clone());

    // Assert
    assert_eq!(observer.events(), vec![Event::Subscribed, Event::Success(7)]);
}

#[test]
fn test_from_publisher_forwards_error() {
    let source = from_publisher::<i32, _>(|observer| {
        observer.on_subscribe(Arc::new(CancellationToken::new()));
        observer.on_error(SolusError::stream_error("unavailable"));
    });
    let observer = RecordingObserver::<i32>::new();

    source.subscribe(observer.clone());

    assert_eq!(
        observer.events(),
        vec![
            Event::Subscribed,
            Event::Error(SolusError::stream_error("unavailable"))
        ]
    );
}

#[test]
fn test_from_publisher_runs_callback_once_per_subscribe() {
    // Arrange
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let source = from_publisher::<usize, _>(move |observer| {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        observer.on_subscribe(Arc::new(CancellationToken::new()));
        observer.on_success(n);
    });
    let observer = RecordingObserver::<usize>::new();

    // Act
    source.clone().subscribe(observer.clone());
    source.subscribe(observer.clone());

    // Assert
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(
        observer.events(),
        vec![
            Event::Subscribed,
            Event::Success(0),
            Event::Subscribed,
            Event::Success(1)
        ]
    );
}

#[test]
fn test_from_publisher_hands_out_its_own_subscription() {
    // Arrange
    let handle = CountingSubscription::new();
    let given = handle.clone();
    let source = from_publisher::<i32, _>(move |observer: ObserverRef<i32>| {
        observer.on_subscribe(given.clone());
    });
    let observer = RecordingObserver::<i32>::new();

    // Act
    source.subscribe(observer.clone());
    observer.cancel();

    // Assert
    assert_eq!(handle.cancel_count(), 1);
}

#[test]
fn test_from_publisher_feeds_map() {
    let source = from_publisher::<i32, _>(|observer| {
        observer.on_subscribe(Arc::new(CancellationToken::new()));
        observer.on_success(7);
    });
    let observer = RecordingObserver::<i32>::new();

    source.map(|x| x * 3).subscribe(observer.clone());

    assert_eq!(observer.events(), vec![Event::Subscribed, Event::Success(21)]);
}

#[test]
fn test_cancel_through_map_reaches_publisher_token() {
    // Arrange
    let token = CancellationToken::new();
    let given = token.clone();
    let source = from_publisher::<i32, _>(move |observer| {
        observer.on_subscribe(Arc::new(given.clone()));
    });
    let observer = RecordingObserver::<i32>::new();
    source.map(|x| x + 1).subscribe(observer.clone());

    // Act
    observer.cancel();

    // Assert
    assert!(token.is_cancelled());
}

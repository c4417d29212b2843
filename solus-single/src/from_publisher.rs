// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Source adapter for hand-written producers.
//!
//! The wrapped callback receives each new observer and is solely responsible for
//! driving it: `on_subscribe` first, then one of `on_success` / `on_error`. The
//! adapter adds no bridge and no lifecycle of its own.
//!
//! # Example
//!
//! ```
//! use solus_core::{CancellationToken, Single};
//! use solus_single::from_publisher;
//! use solus_test_utils::{Event, RecordingObserver};
//! use std::sync::Arc;
//!
//! let source = from_publisher::<i32, _>(|observer| {
//!     observer.on_subscribe(Arc::new(CancellationToken::new()));
//!     observer.on_success(7);
//! });
//!
//! let observer = RecordingObserver::<i32>::new();
//! source.subscribe(observer.clone());
//! assert_eq!(observer.events(), vec![Event::Subscribed, Event::Success(7)]);
//! ```

use core::marker::PhantomData;
use solus_core::{ObserverRef, Single, SingleRef};
use std::sync::Arc;

/// Stage that delegates `subscribe` to a callback.
pub struct FromPublisherOperator<T, F> {
    function: F,
    _marker: PhantomData<fn() -> T>,
}

impl<T, F> FromPublisherOperator<T, F>
where
    F: Fn(ObserverRef<T>) + Send + Sync + 'static,
{
    /// Wraps `function` as a stage.
    pub fn new(function: F) -> Self {
        Self {
            function,
            _marker: PhantomData,
        }
    }
}

impl<T, F> Single<T> for FromPublisherOperator<T, F>
where
    T: 'static,
    F: Fn(ObserverRef<T>) + Send + Sync + 'static,
{
    fn subscribe(self: Arc<Self>, observer: ObserverRef<T>) {
        (self.function)(observer);
    }
}

/// Wraps a subscribe callback as a pipeline source.
pub fn from_publisher<T, F>(function: F) -> SingleRef<T>
where
    T: 'static,
    F: Fn(ObserverRef<T>) + Send + Sync + 'static,
{
    Arc::new(FromPublisherOperator::new(function))
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ready-made sources.
//!
//! Each subscription gets its own [`CancellationToken`] as the cancellation handle.
//! A consumer that cancels from inside `on_subscribe` receives nothing further.

use core::marker::PhantomData;
use solus_core::{CancellationToken, ObserverRef, Single, SingleRef, SolusError};
use std::sync::Arc;

struct Just<T> {
    value: T,
}

impl<T> Single<T> for Just<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn subscribe(self: Arc<Self>, observer: ObserverRef<T>) {
        let token = CancellationToken::new();
        observer.on_subscribe(Arc::new(token.clone()));
        if !token.is_cancelled() {
            observer.on_success(self.value.clone());
        }
    }
}

struct Failing<T> {
    error: SolusError,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> Single<T> for Failing<T> {
    fn subscribe(self: Arc<Self>, observer: ObserverRef<T>) {
        let token = CancellationToken::new();
        observer.on_subscribe(Arc::new(token.clone()));
        if !token.is_cancelled() {
            observer.on_error(self.error.clone());
        }
    }
}

struct Never<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> Single<T> for Never<T> {
    fn subscribe(self: Arc<Self>, observer: ObserverRef<T>) {
        observer.on_subscribe(Arc::new(CancellationToken::new()));
    }
}

/// A source that succeeds with a clone of `value` on every subscription.
pub fn just<T>(value: T) -> SingleRef<T>
where
    T: Clone + Send + Sync + 'static,
{
    Arc::new(Just { value })
}

/// A source that fails with `error` on every subscription.
pub fn error<T: 'static>(error: SolusError) -> SingleRef<T> {
    Arc::new(Failing {
        error,
        _marker: PhantomData,
    })
}

/// A source that subscribes but never emits.
pub fn never<T: 'static>() -> SingleRef<T> {
    Arc::new(Never {
        _marker: PhantomData,
    })
}

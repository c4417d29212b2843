// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{CallbackObserver, SingleFuture};
use solus_core::{Single, SingleRef, SolusError, SubscriptionRef};
use std::sync::Arc;

/// Extension trait providing the consuming end of a pipeline.
pub trait SubscribeExt<T> {
    /// Subscribes with a pair of closures and returns the cancellation handle.
    ///
    /// Exactly one closure runs, unless the handle is cancelled first. The handle is
    /// valid immediately, even for producers that call `on_subscribe` later.
    ///
    /// ```
    /// use solus_core::SolusError;
    /// use solus_exec::SubscribeExt;
    /// use solus_single::{error, SingleExt};
    /// use std::sync::mpsc;
    ///
    /// let (tx, rx) = mpsc::channel();
    /// error::<i32>(SolusError::stream_error("offline"))
    ///     .map(|x| x + 1)
    ///     .subscribe_with(|_| unreachable!(), move |e| tx.send(e.to_string()).unwrap());
    ///
    /// assert_eq!(rx.recv().unwrap(), "Stream processing error: offline");
    /// ```
    fn subscribe_with<S, E>(self, on_success: S, on_error: E) -> SubscriptionRef
    where
        S: FnOnce(T) + Send + 'static,
        E: FnOnce(SolusError) + Send + 'static;

    /// Subscribes and returns a future for the result. See [`SingleFuture`].
    fn into_future(self) -> SingleFuture<T>
    where
        T: Send + 'static;
}

impl<T: 'static> SubscribeExt<T> for SingleRef<T> {
    fn subscribe_with<S, E>(self, on_success: S, on_error: E) -> SubscriptionRef
    where
        S: FnOnce(T) + Send + 'static,
        E: FnOnce(SolusError) + Send + 'static,
    {
        let observer = Arc::new(CallbackObserver::new(on_success, on_error));
        let subscription = observer.subscription();
        self.subscribe(observer);
        subscription
    }

    fn into_future(self) -> SingleFuture<T>
    where
        T: Send + 'static,
    {
        SingleFuture::new(self)
    }
}

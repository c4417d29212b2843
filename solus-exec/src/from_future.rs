// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A source backed by a tokio task.

use core::future::Future;
use core::marker::PhantomData;
use solus_core::{
    debug, trace, CancellationToken, ObserverRef, Result, Single, SingleRef, SolusError,
};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Stage that runs a freshly built future on tokio for every subscription.
///
/// Each subscription spawns its own task. Cancelling the subscription drops the
/// future at its next suspension point; nothing is emitted afterwards.
pub struct FromFuture<T, F> {
    factory: F,
    _marker: PhantomData<fn() -> T>,
}

impl<T, F, Fut> FromFuture<T, F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    /// Wraps `factory`, which is called once per subscription.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            _marker: PhantomData,
        }
    }
}

impl<T, F, Fut> Single<T> for FromFuture<T, F>
where
    T: Send + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    fn subscribe(self: Arc<Self>, observer: ObserverRef<T>) {
        let token = CancellationToken::new();
        observer.on_subscribe(Arc::new(token.clone()));

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(error) => {
                if !token.is_cancelled() {
                    observer.on_error(SolusError::stream_error(format!(
                        "from_future needs a tokio runtime: {error}"
                    )));
                }
                return;
            }
        };
        if token.is_cancelled() {
            return;
        }

        let future = (self.factory)();
        runtime.spawn(async move {
            tokio::select! {
                biased;
                () = token.cancelled() => {
                    debug!("from_future: cancelled before completion");
                }
                result = future => {
                    if token.is_cancelled() {
                        trace!("from_future: completed after cancel; dropped");
                        return;
                    }
                    match result {
                        Ok(value) => observer.on_success(value),
                        Err(error) => observer.on_error(error),
                    }
                }
            }
        });
    }
}

/// A source that resolves with the output of a future run on the current tokio runtime.
///
/// `factory` builds a new future for every subscription. Subscribing outside a tokio
/// runtime fails the subscription with [`SolusError::StreamProcessingError`].
///
/// ```
/// use solus_exec::{from_future, SubscribeExt};
/// use solus_single::SingleExt;
///
/// # #[tokio::main]
/// # async fn main() {
/// let source = from_future(|| async { Ok(6) });
/// assert_eq!(source.map(|x| x * 7).into_future().await.unwrap(), 42);
/// # }
/// ```
pub fn from_future<T, F, Fut>(factory: F) -> SingleRef<T>
where
    T: Send + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    Arc::new(FromFuture::new(factory))
}

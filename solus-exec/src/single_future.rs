// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Awaiting the result of a pipeline.
//!
//! [`SingleFuture`] subscribes a one-shot observer and resolves with whatever that
//! observer receives. The subscription is tied to the future: dropping the future
//! before it resolves cancels the pipeline.

use crate::subscription_slot::SubscriptionSlot;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::channel::oneshot;
use parking_lot::Mutex;
use solus_core::{
    trace, Result, Single, SingleObserver, SingleRef, SingleSubscription, SolusError,
    SubscriptionRef,
};
use std::sync::{Arc, Weak};

/// The observer handed to the producer. It alone owns the sender, so a producer
/// that lets go of it without emitting closes the channel.
struct FutureObserver<T> {
    sender: Mutex<Option<oneshot::Sender<Result<T>>>>,
    subscription: Arc<SubscriptionSlot>,
}

impl<T> FutureObserver<T> {
    fn complete(&self, result: Result<T>) {
        let Some(sender) = self.sender.lock().take() else {
            trace!("single_future: terminal signal after completion or cancel; dropped");
            return;
        };
        if !self.subscription.try_release() {
            trace!("single_future: terminal signal raced a cancel; dropped");
            return;
        }
        // The receiver may already be gone if the future was dropped mid-delivery
        let _ = sender.send(result);
    }
}

impl<T: Send> SingleObserver<T> for FutureObserver<T> {
    fn on_subscribe(&self, subscription: SubscriptionRef) {
        self.subscription.attach(subscription);
    }

    fn on_success(&self, value: T) {
        self.complete(Ok(value));
    }

    fn on_error(&self, error: SolusError) {
        self.complete(Err(error));
    }
}

struct FutureCancel<T> {
    observer: Weak<FutureObserver<T>>,
    subscription: Arc<SubscriptionSlot>,
}

impl<T: Send> SingleSubscription for FutureCancel<T> {
    fn cancel(&self) {
        // Dropping the sender resolves the future with `Cancelled`
        if let Some(observer) = self.observer.upgrade() {
            drop(observer.sender.lock().take());
        }
        self.subscription.cancel();
    }
}

/// Future resolving to the success value or error of a pipeline.
///
/// Resolves to `Err(SolusError::Cancelled)` when the subscription is cancelled
/// through [`subscription`](Self::subscription), or when the producer releases the
/// observer without ever emitting.
///
/// # Example
///
/// ```
/// use solus_exec::SubscribeExt;
/// use solus_single::{just, SingleExt};
///
/// # #[tokio::main]
/// # async fn main() {
/// let value = just(20).map(|x| x + 1).into_future().await;
/// assert_eq!(value.unwrap(), 21);
/// # }
/// ```
#[must_use = "futures do nothing unless polled; dropping this one cancels the pipeline"]
pub struct SingleFuture<T: Send + 'static> {
    receiver: oneshot::Receiver<Result<T>>,
    handle: Arc<FutureCancel<T>>,
    finished: bool,
}

impl<T: Send + 'static> SingleFuture<T> {
    /// Subscribes to `single` and returns a future for its result.
    pub fn new(single: SingleRef<T>) -> Self {
        let (sender, receiver) = oneshot::channel();
        let subscription = Arc::new(SubscriptionSlot::new());
        let observer = Arc::new(FutureObserver {
            sender: Mutex::new(Some(sender)),
            subscription: subscription.clone(),
        });
        let handle = Arc::new(FutureCancel {
            observer: Arc::downgrade(&observer),
            subscription,
        });

        single.subscribe(observer);

        Self {
            receiver,
            handle,
            finished: false,
        }
    }

    /// Handle that cancels the pipeline and resolves this future with `Cancelled`.
    pub fn subscription(&self) -> SubscriptionRef {
        self.handle.clone()
    }
}

impl<T: Send + 'static> Future for SingleFuture<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let result = match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => result,
            Poll::Ready(Err(oneshot::Canceled)) => Err(SolusError::Cancelled),
            Poll::Pending => return Poll::Pending,
        };
        self.finished = true;
        Poll::Ready(result)
    }
}

impl<T: Send + 'static> Drop for SingleFuture<T> {
    fn drop(&mut self) {
        if !self.finished {
            self.handle.cancel();
        }
    }
}

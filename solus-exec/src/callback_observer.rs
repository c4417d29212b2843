// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::subscription_slot::SubscriptionSlot;
use core::marker::PhantomData;
use parking_lot::Mutex;
use solus_core::{trace, warn, SingleObserver, SolusError, SubscriptionRef};
use std::sync::Arc;

/// Observer that hands the result of a pipeline to a pair of closures.
///
/// Whichever terminal signal arrives first runs its closure; the other closure is
/// dropped unrun. Nothing runs once [`subscription`](Self::subscription) has been
/// cancelled, even if the producer ignores the request and emits anyway.
///
/// # Example
///
/// ```
/// use solus_core::Single;
/// use solus_exec::CallbackObserver;
/// use solus_single::just;
/// use std::sync::{Arc, Mutex};
///
/// let received = Arc::new(Mutex::new(None));
/// let sink = received.clone();
///
/// let observer = Arc::new(CallbackObserver::new(
///     move |value: u32| *sink.lock().unwrap() = Some(value),
///     |error| panic!("unexpected error: {error}"),
/// ));
/// just(9_u32).subscribe(observer);
///
/// assert_eq!(*received.lock().unwrap(), Some(9));
/// ```
pub struct CallbackObserver<T, S, E> {
    callbacks: Mutex<Option<(S, E)>>,
    subscription: Arc<SubscriptionSlot>,
    _marker: PhantomData<fn(T)>,
}

impl<T, S, E> CallbackObserver<T, S, E>
where
    S: FnOnce(T) + Send + 'static,
    E: FnOnce(SolusError) + Send + 'static,
{
    /// Creates an observer calling `on_success` or `on_error` at most once.
    pub fn new(on_success: S, on_error: E) -> Self {
        Self {
            callbacks: Mutex::new(Some((on_success, on_error))),
            subscription: Arc::new(SubscriptionSlot::new()),
            _marker: PhantomData,
        }
    }

    /// Handle that cancels this observer's subscription.
    ///
    /// Usable before the producer has called `on_subscribe`; the cancel is applied
    /// as soon as the producer's handle arrives.
    pub fn subscription(&self) -> SubscriptionRef {
        self.subscription.clone()
    }

    fn take_callbacks(&self, signal: &str) -> Option<(S, E)> {
        if !self.subscription.try_release() {
            trace!("callback_observer: {} after cancel; dropped", signal);
            return None;
        }
        let callbacks = self.callbacks.lock().take();
        if callbacks.is_none() {
            warn!("callback_observer: {} after a terminal signal; ignored", signal);
        }
        callbacks
    }
}

impl<T, S, E> SingleObserver<T> for CallbackObserver<T, S, E>
where
    S: FnOnce(T) + Send + 'static,
    E: FnOnce(SolusError) + Send + 'static,
{
    fn on_subscribe(&self, subscription: SubscriptionRef) {
        self.subscription.attach(subscription);
    }

    fn on_success(&self, value: T) {
        if let Some((on_success, _)) = self.take_callbacks("on_success") {
            on_success(value);
        }
    }

    fn on_error(&self, error: SolusError) {
        if let Some((_, on_error)) = self.take_callbacks("on_error") {
            on_error(error);
        }
    }
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::CountingSubscription;
use parking_lot::Mutex;
use solus_core::{ObserverRef, Single, SolusError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

struct Subscriber<T> {
    observer: ObserverRef<T>,
    handle: Weak<CountingSubscription>,
}

/// A source whose result the test emits by hand.
///
/// Every subscription receives its own [`CountingSubscription`]. The source keeps
/// only a weak reference to it, so [`handle_released`](Self::handle_released)
/// reports whether the subscriber has let go of its handle.
pub struct ManualSingle<T> {
    subscribers: Mutex<Vec<Subscriber<T>>>,
    cancels: Arc<AtomicUsize>,
}

impl<T> ManualSingle<T> {
    /// Creates a source with no subscribers.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            subscribers: Mutex::new(Vec::new()),
            cancels: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Delivers `on_success(value)` to every subscriber, cancelled or not.
    pub fn succeed(&self, value: T)
    where
        T: Clone,
    {
        for observer in self.observers() {
            observer.on_success(value.clone());
        }
    }

    /// Delivers `on_error(error)` to every subscriber, cancelled or not.
    pub fn fail(&self, error: SolusError) {
        for observer in self.observers() {
            observer.on_error(error.clone());
        }
    }

    /// Number of subscriptions made so far.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// Total `cancel()` calls received across all subscriptions.
    pub fn cancel_count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }

    /// Whether the handle given to subscriber `index` has been dropped by it.
    ///
    /// # Panics
    ///
    /// Panics if there is no subscriber at `index`.
    pub fn handle_released(&self, index: usize) -> bool {
        self.subscribers.lock()[index].handle.strong_count() == 0
    }

    // Delivery happens outside the lock so observers may re-enter the source
    fn observers(&self) -> Vec<ObserverRef<T>> {
        self.subscribers
            .lock()
            .iter()
            .map(|subscriber| subscriber.observer.clone())
            .collect()
    }
}

impl<T: Send + 'static> Single<T> for ManualSingle<T> {
    fn subscribe(self: Arc<Self>, observer: ObserverRef<T>) {
        let handle = CountingSubscription::with_counter(self.cancels.clone());
        self.subscribers.lock().push(Subscriber {
            observer: observer.clone(),
            handle: Arc::downgrade(&handle),
        });
        observer.on_subscribe(handle);
    }
}

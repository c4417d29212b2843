// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use solus_core::{SingleObserver, SolusError, SubscriptionRef};
use std::sync::Arc;

/// One signal received by a [`RecordingObserver`].
#[derive(Debug, Clone)]
pub enum Event<T> {
    /// `on_subscribe` was called
    Subscribed,
    /// `on_success` was called with the value
    Success(T),
    /// `on_error` was called with the error
    Error(SolusError),
}

impl<T: PartialEq> PartialEq for Event<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Event::Subscribed, Event::Subscribed) => true,
            (Event::Success(a), Event::Success(b)) => a == b,
            // Errors have no equality of their own; compare what they render
            (Event::Error(a), Event::Error(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

/// Observer that records everything it receives.
pub struct RecordingObserver<T> {
    events: Mutex<Vec<Event<T>>>,
    subscription: Mutex<Option<SubscriptionRef>>,
    cancel_on_subscribe: bool,
}

impl<T> RecordingObserver<T> {
    /// Creates a passive recorder.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Self::build(false)
    }

    /// Creates a recorder that cancels as soon as it is handed a subscription.
    #[must_use]
    pub fn cancelling_on_subscribe() -> Arc<Self> {
        Self::build(true)
    }

    fn build(cancel_on_subscribe: bool) -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(Vec::new()),
            subscription: Mutex::new(None),
            cancel_on_subscribe,
        })
    }

    /// Snapshot of the signals received so far.
    pub fn events(&self) -> Vec<Event<T>>
    where
        T: Clone,
    {
        self.events.lock().clone()
    }

    /// Number of `on_success` calls received.
    pub fn success_count(&self) -> usize {
        self.count(|event| matches!(event, Event::Success(_)))
    }

    /// Number of `on_error` calls received.
    pub fn error_count(&self) -> usize {
        self.count(|event| matches!(event, Event::Error(_)))
    }

    /// Number of terminal signals received. More than one is a contract violation.
    pub fn terminal_count(&self) -> usize {
        self.count(|event| !matches!(event, Event::Subscribed))
    }

    /// The handle received through `on_subscribe`, if any.
    pub fn subscription(&self) -> Option<SubscriptionRef> {
        self.subscription.lock().clone()
    }

    /// Cancels through the received handle. Returns `false` if none was received.
    pub fn cancel(&self) -> bool {
        match self.subscription() {
            Some(subscription) => {
                subscription.cancel();
                true
            }
            None => false,
        }
    }

    fn count(&self, predicate: impl Fn(&Event<T>) -> bool) -> usize {
        self.events.lock().iter().filter(|event| predicate(event)).count()
    }
}

impl<T: Send> SingleObserver<T> for RecordingObserver<T> {
    fn on_subscribe(&self, subscription: SubscriptionRef) {
        self.events.lock().push(Event::Subscribed);
        *self.subscription.lock() = Some(subscription.clone());
        if self.cancel_on_subscribe {
            subscription.cancel();
        }
    }

    fn on_success(&self, value: T) {
        self.events.lock().push(Event::Success(value));
    }

    fn on_error(&self, error: SolusError) {
        self.events.lock().push(Event::Error(error));
    }
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The three roles every single-value pipeline is built from.
//!
//! - [`Single`] produces at most one value or one error.
//! - [`SingleObserver`] consumes that result: `on_subscribe` exactly once, then
//!   exactly one of `on_success` / `on_error`.
//! - [`SingleSubscription`] is the cancellation handle a producer gives to its
//!   observer through `on_subscribe`.
//!
//! Subscribing is top-down: calling `subscribe` on the outermost stage subscribes
//! inward until it reaches the original source. Events flow bottom-up: the source's
//! terminal event travels back out through every stage to the final observer.
//!
//! # Example
//!
//! ```
//! use solus_core::{ObserverRef, Single, SingleObserver, SolusError, SubscriptionRef};
//! use solus_core::CancellationToken;
//! use std::sync::{Arc, Mutex};
//!
//! struct Answer;
//!
//! impl Single<u32> for Answer {
//!     fn subscribe(self: Arc<Self>, observer: ObserverRef<u32>) {
//!         let token = CancellationToken::new();
//!         observer.on_subscribe(Arc::new(token.clone()));
//!         if !token.is_cancelled() {
//!             observer.on_success(42);
//!         }
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Print(Mutex<Option<u32>>);
//!
//! impl SingleObserver<u32> for Print {
//!     fn on_subscribe(&self, _subscription: SubscriptionRef) {}
//!     fn on_success(&self, value: u32) {
//!         *self.0.lock().unwrap() = Some(value);
//!     }
//!     fn on_error(&self, _error: SolusError) {}
//! }
//!
//! let observer = Arc::new(Print::default());
//! Arc::new(Answer).subscribe(observer.clone());
//! assert_eq!(*observer.0.lock().unwrap(), Some(42));
//! ```

use crate::SolusError;
use std::sync::Arc;

/// Shared handle to a producer stage.
pub type SingleRef<T> = Arc<dyn Single<T>>;

/// Shared handle to a consumer.
pub type ObserverRef<T> = Arc<dyn SingleObserver<T>>;

/// Shared handle to a cancellation handle.
pub type SubscriptionRef = Arc<dyn SingleSubscription>;

/// A producer of at most one value or one error.
///
/// Each call to [`subscribe`](Single::subscribe) starts an independent
/// subscription; a stage keeps no per-subscription state of its own.
///
/// `subscribe` takes `Arc<Self>` so that per-subscription machinery (an operator's
/// bridge) can refer back to the stage that created it for as long as the
/// subscription lives.
pub trait Single<T>: Send + Sync + 'static {
    /// Starts a new subscription delivering to `observer`.
    fn subscribe(self: Arc<Self>, observer: ObserverRef<T>);
}

/// Receives the result of a [`Single`].
///
/// Calls arrive in order: `on_subscribe` exactly once, then at most one of
/// `on_success` or `on_error`. A producer never calls an observer concurrently
/// with itself.
pub trait SingleObserver<T>: Send + Sync {
    /// Hands the observer the handle it may use to cancel the subscription.
    fn on_subscribe(&self, subscription: SubscriptionRef);

    /// Terminal: the producer completed with `value`.
    fn on_success(&self, value: T);

    /// Terminal: the producer failed with `error`.
    fn on_error(&self, error: SolusError);
}

/// Cancellation handle given to a [`SingleObserver`].
///
/// Cancellation is advisory: a producer may still emit after `cancel` returns,
/// but a well-behaved pipeline stage never forwards such a late signal.
pub trait SingleSubscription: Send + Sync {
    /// Requests cancellation. Calling it more than once has no further effect.
    fn cancel(&self);
}

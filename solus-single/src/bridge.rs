// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-subscription link between two pipeline stages.
//!
//! An [`OperatorBridge`] is the observer of the upstream stage and, at the same
//! time, the cancellation handle of the downstream observer. Both roles are thin
//! facades over one shared state cell:
//!
//! ```text
//!   upstream stage ──on_subscribe/on_success/on_error──▶ UpstreamObserver ─┐
//!                                                                          ├─ BridgeInner
//!   downstream observer ─────────────cancel────────────▶ DownstreamHandle ─┘
//! ```
//!
//! The inner cell owns the downstream observer and the upstream handle. The first
//! terminal signal (success, error, or cancel) claims the cell with a single
//! compare-and-swap; the winner takes both references out of their slots, which
//! breaks the observer ↔ bridge ↔ handle cycle. Everyone else finds the cell
//! already terminated and does nothing.

use core::fmt;
use core::marker::PhantomData;
use core::sync::atomic::{AtomicU8, Ordering};
use parking_lot::Mutex;
use solus_core::{
    trace, warn, ObserverRef, Result, SingleObserver, SingleSubscription, SolusError,
    SubscriptionRef,
};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Operator-specific success policy.
///
/// The bridge handles subscription, errors and cancellation identically for every
/// operator; only the step from an upstream value to a downstream result differs.
/// `Err` is delivered downstream through `on_error`. A panic is caught and
/// delivered as [`SolusError::CallbackPanic`].
pub trait SuccessHook<U, D>: Send + Sync + 'static {
    /// Turns the upstream value into the downstream result.
    fn on_success(&self, value: U) -> Result<D>;
}

/// Lifecycle of one bridge.
///
/// `Unsubscribed → Subscribed → {Succeeded | Failed | Cancelled}`. Only one of the
/// terminal states is ever reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BridgeState {
    /// Created, waiting for the upstream `on_subscribe`.
    Unsubscribed = 0,
    /// Upstream handle held; downstream has been given the bridge as its handle.
    Subscribed = 1,
    /// A value was delivered downstream.
    Succeeded = 2,
    /// An error was delivered downstream.
    Failed = 3,
    /// Downstream cancelled; the request was forwarded upstream.
    Cancelled = 4,
}

impl BridgeState {
    /// Returns `true` for the three terminal states.
    #[must_use]
    pub const fn is_terminated(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Cancelled)
    }

    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Unsubscribed,
            1 => Self::Subscribed,
            2 => Self::Succeeded,
            3 => Self::Failed,
            _ => Self::Cancelled,
        }
    }
}

struct BridgeInner<U, D, H> {
    state: AtomicU8,
    /// The operator that created this bridge, reached for its success policy.
    /// Taken on the terminal claim so a finished bridge keeps no stage alive.
    operator: Mutex<Option<Arc<H>>>,
    downstream: Mutex<Option<ObserverRef<D>>>,
    upstream: Mutex<Option<SubscriptionRef>>,
    _upstream_value: PhantomData<fn(U)>,
}

impl<U, D, H> BridgeInner<U, D, H> {
    fn state(&self) -> BridgeState {
        BridgeState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Moves `Subscribed` to `terminal`. Returns `false` if another signal got there
    /// first or the bridge was never subscribed.
    fn claim(&self, terminal: BridgeState, signal: &'static str) -> bool {
        match self.state.compare_exchange(
            BridgeState::Subscribed as u8,
            terminal as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => {
                trace!("bridge: {} -> {:?}", signal, terminal);
                true
            }
            Err(actual) => {
                match BridgeState::from_u8(actual) {
                    // Producers may still emit after a cancel request
                    BridgeState::Cancelled => {
                        trace!("bridge: {} dropped after cancellation", signal);
                    }
                    actual if terminal == BridgeState::Cancelled => {
                        trace!("bridge: cancel ignored in state {:?}", actual);
                    }
                    actual => {
                        warn!("bridge: {} ignored in state {:?}", signal, actual);
                    }
                }
                false
            }
        }
    }

    fn take_operator(&self) -> Option<Arc<H>> {
        self.operator.lock().take()
    }

    fn take_downstream(&self) -> Option<ObserverRef<D>> {
        self.downstream.lock().take()
    }

    fn release_upstream(&self) {
        drop(self.upstream.lock().take());
    }
}

/// Dual-role link created for every subscription to an operator.
///
/// Use [`upstream_observer`](Self::upstream_observer) to obtain the observer to
/// subscribe upstream; the bridge presents itself to the downstream observer on its
/// own once upstream calls `on_subscribe`.
pub struct OperatorBridge<U, D, H> {
    inner: Arc<BridgeInner<U, D, H>>,
}

impl<U, D, H> OperatorBridge<U, D, H>
where
    U: 'static,
    D: 'static,
    H: SuccessHook<U, D>,
{
    /// Creates a bridge delivering to `downstream` on behalf of `operator`.
    pub fn new(operator: Arc<H>, downstream: ObserverRef<D>) -> Self {
        Self {
            inner: Arc::new(BridgeInner {
                state: AtomicU8::new(BridgeState::Unsubscribed as u8),
                operator: Mutex::new(Some(operator)),
                downstream: Mutex::new(Some(downstream)),
                upstream: Mutex::new(None),
                _upstream_value: PhantomData,
            }),
        }
    }

    /// The consumer-side facade, to be handed to the upstream stage.
    #[must_use]
    pub fn upstream_observer(&self) -> ObserverRef<U> {
        Arc::new(UpstreamObserver {
            inner: self.inner.clone(),
        })
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> BridgeState {
        self.inner.state()
    }

    /// Whether the bridge still holds the upstream cancellation handle.
    #[must_use]
    pub fn holds_upstream(&self) -> bool {
        self.inner.upstream.lock().is_some()
    }

    /// Whether the bridge still holds the downstream observer.
    #[must_use]
    pub fn holds_downstream(&self) -> bool {
        self.inner.downstream.lock().is_some()
    }

    /// Whether the bridge still refers to the operator that created it.
    #[must_use]
    pub fn holds_operator(&self) -> bool {
        self.inner.operator.lock().is_some()
    }
}

impl<U, D, H> fmt::Debug for OperatorBridge<U, D, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorBridge")
            .field("state", &self.inner.state())
            .finish_non_exhaustive()
    }
}

struct UpstreamObserver<U, D, H> {
    inner: Arc<BridgeInner<U, D, H>>,
}

impl<U, D, H> SingleObserver<U> for UpstreamObserver<U, D, H>
where
    U: 'static,
    D: 'static,
    H: SuccessHook<U, D>,
{
    fn on_subscribe(&self, subscription: SubscriptionRef) {
        if let Err(actual) = self.inner.state.compare_exchange(
            BridgeState::Unsubscribed as u8,
            BridgeState::Subscribed as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            warn!(
                "bridge: duplicate on_subscribe in state {:?}; cancelling the extra handle",
                BridgeState::from_u8(actual)
            );
            subscription.cancel();
            return;
        }

        // Stored before downstream sees the bridge, so a cancel issued from inside
        // the downstream on_subscribe still reaches upstream
        *self.inner.upstream.lock() = Some(subscription);

        let downstream = self.inner.downstream.lock().clone();
        if let Some(downstream) = downstream {
            downstream.on_subscribe(Arc::new(DownstreamHandle {
                inner: self.inner.clone(),
            }));
        }
    }

    fn on_success(&self, value: U) {
        if !self.inner.claim(BridgeState::Succeeded, "on_success") {
            return;
        }
        let downstream = self.inner.take_downstream();
        // Only the claim winner reaches this point, so the operator is still held
        let Some(operator) = self.inner.take_operator() else {
            self.inner.release_upstream();
            return;
        };

        let result = panic::catch_unwind(AssertUnwindSafe(|| operator.on_success(value)))
            .unwrap_or_else(|payload| Err(SolusError::from_panic(payload.as_ref())));
        drop(operator);

        if let Some(downstream) = downstream {
            match result {
                Ok(mapped) => downstream.on_success(mapped),
                Err(error) => {
                    self.inner
                        .state
                        .store(BridgeState::Failed as u8, Ordering::Release);
                    downstream.on_error(error);
                }
            }
        }
        self.inner.release_upstream();
    }

    fn on_error(&self, error: SolusError) {
        if !self.inner.claim(BridgeState::Failed, "on_error") {
            return;
        }
        drop(self.inner.take_operator());
        if let Some(downstream) = self.inner.take_downstream() {
            downstream.on_error(error);
        }
        self.inner.release_upstream();
    }
}

struct DownstreamHandle<U, D, H> {
    inner: Arc<BridgeInner<U, D, H>>,
}

impl<U, D, H> SingleSubscription for DownstreamHandle<U, D, H>
where
    U: 'static,
    D: 'static,
    H: SuccessHook<U, D>,
{
    fn cancel(&self) {
        if !self.inner.claim(BridgeState::Cancelled, "cancel") {
            return;
        }
        drop(self.inner.take_downstream());
        drop(self.inner.take_operator());
        let upstream = self.inner.upstream.lock().take();
        if let Some(upstream) = upstream {
            upstream.cancel();
        }
    }
}

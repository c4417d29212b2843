// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Generic operator stage.
//!
//! A [`SingleOperator`] wraps an upstream stage and a [`SuccessHook`]. Every
//! `subscribe` builds a fresh [`OperatorBridge`] and subscribes it upstream, so the
//! operator itself stays stateless across subscriptions. New operators are written
//! by supplying a hook; the bridge supplies everything else.

use crate::bridge::{OperatorBridge, SuccessHook};
use core::marker::PhantomData;
use solus_core::{ObserverRef, Result, Single, SingleRef};
use std::sync::Arc;

/// A pipeline stage built over an upstream stage.
pub struct SingleOperator<U, D, H> {
    upstream: SingleRef<U>,
    hook: H,
    _marker: PhantomData<fn(U) -> D>,
}

impl<U, D, H> SingleOperator<U, D, H>
where
    U: 'static,
    D: 'static,
    H: SuccessHook<U, D>,
{
    /// Creates an operator applying `hook` to the result of `upstream`.
    pub fn new(upstream: SingleRef<U>, hook: H) -> Self {
        Self {
            upstream,
            hook,
            _marker: PhantomData,
        }
    }

    /// The operator-specific success policy.
    pub fn hook(&self) -> &H {
        &self.hook
    }
}

impl<U, D, H> SuccessHook<U, D> for SingleOperator<U, D, H>
where
    U: 'static,
    D: 'static,
    H: SuccessHook<U, D>,
{
    fn on_success(&self, value: U) -> Result<D> {
        self.hook.on_success(value)
    }
}

impl<U, D, H> Single<D> for SingleOperator<U, D, H>
where
    U: 'static,
    D: 'static,
    H: SuccessHook<U, D>,
{
    fn subscribe(self: Arc<Self>, observer: ObserverRef<D>) {
        let upstream = self.upstream.clone();
        let bridge = OperatorBridge::new(self, observer);
        upstream.subscribe(bridge.upstream_observer());
    }
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Value-transforming operators.
//!
//! [`map`] applies an infallible function to the success value; [`try_map`]
//! applies a fallible one whose `Err` is delivered downstream as the error.
//! Upstream errors pass through untouched and the function is never called for
//! them. A panicking function is reported as [`SolusError::CallbackPanic`].
//!
//! # Example
//!
//! ```
//! use solus_core::Single;
//! use solus_single::{just, SingleExt};
//! use solus_test_utils::{Event, RecordingObserver};
//!
//! let observer = RecordingObserver::<i32>::new();
//! just(5).map(|x| x * 2).subscribe(observer.clone());
//!
//! assert_eq!(observer.events(), vec![Event::Subscribed, Event::Success(10)]);
//! ```
//!
//! [`SolusError::CallbackPanic`]: solus_core::SolusError::CallbackPanic

use crate::bridge::SuccessHook;
use crate::operator::SingleOperator;
use solus_core::{Result, SingleRef};
use std::sync::Arc;

/// Success hook applying an infallible transform.
pub struct MapHook<F> {
    function: F,
}

impl<U, D, F> SuccessHook<U, D> for MapHook<F>
where
    F: Fn(U) -> D + Send + Sync + 'static,
{
    fn on_success(&self, value: U) -> Result<D> {
        Ok((self.function)(value))
    }
}

/// Success hook applying a fallible transform.
pub struct TryMapHook<F> {
    function: F,
}

impl<U, D, F> SuccessHook<U, D> for TryMapHook<F>
where
    F: Fn(U) -> Result<D> + Send + Sync + 'static,
{
    fn on_success(&self, value: U) -> Result<D> {
        (self.function)(value)
    }
}

/// Operator produced by [`map`].
pub type MapOperator<U, D, F> = SingleOperator<U, D, MapHook<F>>;

/// Operator produced by [`try_map`].
pub type TryMapOperator<U, D, F> = SingleOperator<U, D, TryMapHook<F>>;

/// Transforms the success value of `upstream` with `function`.
pub fn map<U, D, F>(upstream: SingleRef<U>, function: F) -> SingleRef<D>
where
    U: 'static,
    D: 'static,
    F: Fn(U) -> D + Send + Sync + 'static,
{
    let operator: MapOperator<U, D, F> = SingleOperator::new(upstream, MapHook { function });
    Arc::new(operator)
}

/// Transforms the success value of `upstream` with a fallible `function`.
///
/// ```
/// use solus_core::{Single, SolusError};
/// use solus_single::{just, SingleExt};
/// use solus_test_utils::{Event, RecordingObserver};
///
/// let observer = RecordingObserver::<u8>::new();
/// just("x")
///     .try_map(|s: &str| s.parse::<u8>().map_err(|_| SolusError::stream_error("not a number")))
///     .subscribe(observer.clone());
///
/// assert_eq!(
///     observer.events(),
///     vec![Event::Subscribed, Event::Error(SolusError::stream_error("not a number"))]
/// );
/// ```
pub fn try_map<U, D, F>(upstream: SingleRef<U>, function: F) -> SingleRef<D>
where
    U: 'static,
    D: 'static,
    F: Fn(U) -> Result<D> + Send + Sync + 'static,
{
    let operator: TryMapOperator<U, D, F> =
        SingleOperator::new(upstream, TryMapHook { function });
    Arc::new(operator)
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core contracts and types shared by every Solus crate.
//!
//! - [`Single`], [`SingleObserver`], [`SingleSubscription`]: the producer, consumer
//!   and cancellation-handle roles of a single-value pipeline.
//! - [`SolusError`]: the one error type carried through a pipeline.
//! - [`CancellationToken`]: the stock cancellation handle used by sources.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod error;
pub mod logging;
pub mod single;

pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::error::{IntoSolusError, Result, SolusError};
pub use self::single::{
    ObserverRef, Single, SingleObserver, SingleRef, SingleSubscription, SubscriptionRef,
};

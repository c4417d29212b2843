// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Consuming and originating single-value pipelines.
//!
//! - [`SubscribeExt::subscribe_with`] drives a pipeline into two closures.
//! - [`SubscribeExt::into_future`] turns a pipeline into a [`SingleFuture`].
//! - [`from_future`] (feature `runtime-tokio`) runs a future on tokio as a source.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod callback_observer;
#[cfg(feature = "runtime-tokio")]
pub mod from_future;
pub mod single_future;
pub mod subscribe_ext;
mod subscription_slot;

// Re-export commonly used types
pub use callback_observer::CallbackObserver;
#[cfg(feature = "runtime-tokio")]
pub use from_future::{from_future, FromFuture};
pub use single_future::SingleFuture;
pub use subscribe_ext::SubscribeExt;

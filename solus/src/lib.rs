// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Solus
//!
//! Single-value reactive pipelines: a producer emits at most one value or one
//! error, every stage forwards it exactly once, and cancellation travels back up
//! to the source.
//!
//! ## Overview
//!
//! - Sources: [`just`], [`error`], [`never`], [`from_publisher`], and
//!   [`from_future`] (feature `runtime-tokio`).
//! - Operators: [`SingleExt::map`] and [`SingleExt::try_map`], built on the
//!   shared [`OperatorBridge`].
//! - Consumers: any [`SingleObserver`], [`SubscribeExt::subscribe_with`], or
//!   [`SubscribeExt::into_future`].
//!
//! ## Quick Start
//!
//! ```rust
//! use solus_rx::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let price = just(120_u32)
//!     .map(|cents| cents * 3)
//!     .try_map(|cents| {
//!         if cents > 1_000 {
//!             Err(SolusError::stream_error("over budget"))
//!         } else {
//!             Ok(format!("${}.{:02}", cents / 100, cents % 100))
//!         }
//!     });
//!
//! assert_eq!(price.into_future().await?, "$3.60");
//! # Ok(())
//! # }
//! ```

// Re-export core types
pub use solus_core::{
    CancellationToken, IntoSolusError, ObserverRef, Result, Single, SingleObserver, SingleRef,
    SingleSubscription, SolusError, SubscriptionRef,
};

// Re-export operators and sources
pub use solus_single::{
    error, from_publisher, just, map, never, try_map, BridgeState, FromPublisherOperator,
    MapOperator, OperatorBridge, SingleExt, SingleOperator, SuccessHook, TryMapOperator,
};

// Re-export consumers
#[cfg(feature = "runtime-tokio")]
pub use solus_exec::from_future;
pub use solus_exec::{CallbackObserver, SingleFuture, SubscribeExt};

/// Prelude module for convenient imports
pub mod prelude {
    #[cfg(feature = "runtime-tokio")]
    pub use solus_exec::from_future;
    pub use solus_core::{
        CancellationToken, IntoSolusError, Result, Single, SingleObserver, SingleRef,
        SingleSubscription, SolusError, SubscriptionRef,
    };
    pub use solus_exec::SubscribeExt;
    pub use solus_single::{error, from_publisher, just, never, SingleExt};
}

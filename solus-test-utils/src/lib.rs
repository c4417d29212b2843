// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for Solus pipelines.
//!
//! Designed for use in development and testing only, not for production code.
//!
//! # Key Types
//!
//! - [`RecordingObserver`] records every signal it receives as an [`Event`] and can
//!   cancel through the handle it was given.
//! - [`ManualSingle`] is a source the test drives by hand. It does not police the
//!   protocol: it keeps emitting after a cancel, and emits twice if asked to, which
//!   is exactly what operator guard tests need.
//! - [`CountingSubscription`] counts `cancel()` calls.
//!
//! # Example
//!
//! ```rust
//! use solus_core::Single;
//! use solus_test_utils::{Event, ManualSingle, RecordingObserver};
//!
//! let source = ManualSingle::<i32>::new();
//! let observer = RecordingObserver::<i32>::new();
//!
//! source.clone().subscribe(observer.clone());
//! source.succeed(5);
//!
//! assert_eq!(observer.events(), vec![Event::Subscribed, Event::Success(5)]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod counting_subscription;
pub mod helpers;
pub mod manual_single;
pub mod recording_observer;

pub use counting_subscription::CountingSubscription;
pub use helpers::{assert_pending, assert_ready_within};
pub use manual_single::ManualSingle;
pub use recording_observer::{Event, RecordingObserver};

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operator chaining for single-value pipelines.
//!
//! A pipeline is a source followed by operators. Subscribing to the outermost
//! operator subscribes inward to the source; the source's one terminal event then
//! flows back out through every operator's [`OperatorBridge`] to the final observer.
//!
//! - [`SingleOperator`] + [`SuccessHook`]: the generic operator, parameterised by its
//!   success policy.
//! - [`map()`] / [`try_map()`]: the value-transforming operators.
//! - [`from_publisher()`]: turns a subscribe callback into a source.
//! - [`just()`], [`error()`], [`never()`]: ready-made sources.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod bridge;
pub mod from_publisher;
pub mod map;
pub mod operator;
pub mod single_ext;
pub mod sources;

pub use self::bridge::{BridgeState, OperatorBridge, SuccessHook};
pub use self::from_publisher::{from_publisher, FromPublisherOperator};
pub use self::map::{map, try_map, MapHook, MapOperator, TryMapHook, TryMapOperator};
pub use self::operator::SingleOperator;
pub use self::single_ext::SingleExt;
pub use self::sources::{error, just, never};

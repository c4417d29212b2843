// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use solus_core::SingleSubscription;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Cancellation handle that counts how often it was cancelled.
///
/// Unlike a real handle it does not collapse repeated calls, so a test can tell
/// "forwarded once" from "forwarded twice".
#[derive(Debug, Default)]
pub struct CountingSubscription {
    cancels: Arc<AtomicUsize>,
}

impl CountingSubscription {
    /// Creates a handle with its own counter.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Creates a handle that increments a shared counter.
    #[must_use]
    pub fn with_counter(cancels: Arc<AtomicUsize>) -> Arc<Self> {
        Arc::new(Self { cancels })
    }

    /// Number of `cancel()` calls received.
    #[must_use]
    pub fn cancel_count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }
}

impl SingleSubscription for CountingSubscription {
    fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }
}

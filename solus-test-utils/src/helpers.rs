// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Asserts that `future` does not complete within `timeout_ms`.
pub async fn assert_pending<F>(future: &mut F, timeout_ms: u64)
where
    F: Future + Unpin,
{
    tokio::select! {
        _ = future => {
            panic!("Unexpected completion, expected the future to stay pending.");
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Awaits `future`, panicking if it takes longer than `timeout_ms`.
pub async fn assert_ready_within<F>(future: F, timeout_ms: u64) -> F::Output
where
    F: Future,
{
    tokio::time::timeout(Duration::from_millis(timeout_ms), future)
        .await
        .expect("future did not complete in time")
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::task::yield_now;
use tokio::time::advance;

/// Yields enough times for timer tasks woken by the last clock advance to run.
pub async fn settle() {
    for _ in 0..8 {
        yield_now().await;
    }
}

/// Advances the paused tokio clock, then lets woken timer tasks run.
pub async fn advance_and_settle(duration: Duration) {
    advance(duration).await;
    settle().await;
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

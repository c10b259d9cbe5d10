// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use core::future::Future;
use core::ops::Sub;
use core::time::Duration;

/// Clock and sleep source of a [`Runtime`](crate::Runtime).
///
/// Wrappers read `now()` when a call arrives and measure windows as the
/// elapsed time between two readings, so instants are only ever subtracted.
/// Subtraction must saturate at zero.
pub trait Timer: Clone + Debug + Send + Sync + 'static {
    /// Completes once the requested duration has passed. The deadline is fixed
    /// when the future is created; huge durations must not panic.
    type Sleep: Future<Output = ()> + Send;

    /// A reading of the monotonic clock.
    type Instant: Copy + Debug + Ord + Send + Sync + Sub<Output = Duration>;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    fn now(&self) -> Self::Instant;
}

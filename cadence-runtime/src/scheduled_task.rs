// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic task spawning with cooperative cancellation.
//!
//! Every pending debounce, throttle or delay invocation is a `ScheduledTask`:
//! a detached task spawned on the [`Runtime`] that sleeps on the runtime's
//! timer and runs its callback unless it was cancelled first.

use crate::runtime::Runtime;
use crate::timer::Timer;
use cadence_core::CancellationToken;
use core::future::Future;
use core::pin::pin;
use core::time::Duration;
use futures::future::{select, Either};

/// Handle to a spawned task with automatic cancellation on drop.
///
/// The spawned future receives a [`CancellationToken`] that is signalled when
/// the handle is cancelled or dropped. Call [`ScheduledTask::detach`] to let
/// the task run to completion without keeping the handle around.
///
/// # Example
///
/// ```rust,no_run
/// use cadence_runtime::{DefaultRuntime, ScheduledTask};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let task = ScheduledTask::after::<DefaultRuntime, _>(Duration::from_millis(50), || {
///     println!("fired");
/// });
///
/// // Dropping the handle before the 50ms elapse cancels the callback
/// drop(task);
/// # }
/// ```
#[derive(Debug)]
#[must_use = "dropping a ScheduledTask cancels it; call `detach` to let it run"]
pub struct ScheduledTask {
    cancel: CancellationToken,
    detached: bool,
}

impl ScheduledTask {
    /// Spawn a background task with cancellation support.
    ///
    /// The closure receives the token that will be triggered when this handle
    /// is cancelled or dropped. The future should watch it and exit early.
    pub fn spawn<R, F, Fut>(f: F) -> Self
    where
        R: Runtime,
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        R::spawn(f(cancel.clone()));

        Self {
            cancel,
            detached: false,
        }
    }

    /// Run `callback` once `delay` has elapsed on the runtime's clock.
    ///
    /// The callback is skipped if the handle is cancelled or dropped first.
    pub fn after<R, F>(delay: Duration, callback: F) -> Self
    where
        R: Runtime,
        F: FnOnce() + Send + 'static,
    {
        // The deadline is fixed now, not when the task is first polled
        let sleep = R::Timer::default().sleep_future(delay);

        Self::spawn::<R, _, _>(move |cancel| async move {
            let sleep = pin!(sleep);
            let cancelled = pin!(cancel.cancelled());

            if let Either::Left(_) = select(sleep, cancelled).await {
                if !cancel.is_cancelled() {
                    callback();
                }
            }
        })
    }

    /// Cancel the task.
    ///
    /// The task stops at its next cancellation checkpoint; a callback that is
    /// already running completes.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Check if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Drop the handle without cancelling the task.
    pub fn detach(mut self) {
        self.detached = true;
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        if !self.detached {
            self.cancel.cancel();
        }
    }
}

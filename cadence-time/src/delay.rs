// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! One-shot deferral helpers.

use crate::deferred::run_deferred;
use cadence_runtime::{DefaultRuntime, Runtime, ScheduledTask, Timer};
use core::time::Duration;

/// Invokes `func(args)` once `wait` has elapsed on the default runtime.
///
/// Dropping or cancelling the returned handle before then skips the call;
/// [`ScheduledTask::detach`] lets it run without keeping the handle.
///
/// ```rust,no_run
/// use cadence_time::delay;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let greeting = delay(|name: &str| println!("hello {name}"), Duration::from_secs(1), "world");
/// greeting.cancel();
/// # }
/// ```
pub fn delay<F, A>(func: F, wait: Duration, args: A) -> ScheduledTask
where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    delay_on::<DefaultRuntime, F, A>(func, wait, args)
}

/// [`delay`] on an explicit runtime.
pub fn delay_on<R, F, A>(func: F, wait: Duration, args: A) -> ScheduledTask
where
    R: Runtime,
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    ScheduledTask::after::<R, _>(wait, move || run_deferred("delay", move || func(args)))
}

/// Completes after `duration` on the default runtime's clock.
pub async fn sleep(duration: Duration) {
    sleep_on::<DefaultRuntime>(duration).await;
}

/// [`sleep`] on an explicit runtime.
pub async fn sleep_on<R: Runtime>(duration: Duration) {
    R::Timer::default().sleep_future(duration).await;
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! tokio backend. Must be used from within a tokio runtime.

use crate::runtime::Runtime;
use crate::timer::Timer;
use core::future::Future;
use std::time::Duration;
use tokio::time::{Instant, Sleep};

#[derive(Debug)]
pub struct TokioRuntime;

impl Runtime for TokioRuntime {
    type Timer = TokioTimer;

    fn spawn<F>(future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(future);
    }
}

#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = Sleep;

    // tokio's Instant follows the paused test clock, std's does not
    type Instant = Instant;

    fn sleep_future(&self, duration: Duration) -> Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

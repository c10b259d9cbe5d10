// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! smol backend: tasks go to smol's global executor, sleeps to `async-io`.

use crate::runtime::Runtime;
use crate::timer::Timer;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct SmolRuntime;

impl Runtime for SmolRuntime {
    type Timer = SmolTimer;

    fn spawn<F>(future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        smol::spawn(future).detach();
    }
}

#[derive(Clone, Debug, Default)]
pub struct SmolTimer;

impl Timer for SmolTimer {
    type Sleep = SmolSleep;
    type Instant = Instant;

    fn sleep_future(&self, duration: Duration) -> SmolSleep {
        // `Timer::after` never fires when the deadline overflows
        SmolSleep(async_io::Timer::after(duration))
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// `async_io::Timer` resolves to the instant it fired; wrappers only need ().
pub struct SmolSleep(async_io::Timer);

impl Future for SmolSleep {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        Pin::new(&mut self.0).poll(cx).map(drop)
    }
}

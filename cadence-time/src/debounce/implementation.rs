// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::DebounceOptions;
use crate::deferred::run_deferred;
use crate::timer_slot::TimerSlot;
use cadence_core::{Mutex, Result};
use cadence_runtime::{DefaultRuntime, InstantOf, Runtime, ScheduledTask, Timer};
use core::fmt;
use core::marker::PhantomData;
use core::time::Duration;
use std::sync::Arc;

/// Creates a debounced wrapper around `func` on the default runtime.
///
/// # Errors
/// Returns [`CadenceError::InvalidConfig`](cadence_core::CadenceError::InvalidConfig)
/// when `options` enables neither edge.
pub fn debounce<F, A>(
    func: F,
    wait: Duration,
    options: DebounceOptions,
) -> Result<Debounced<F, A, DefaultRuntime>>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    Debounced::new(func, wait, options)
}

/// A debounced function. Cloning yields another handle to the same wrapper.
pub struct Debounced<F, A, R = DefaultRuntime>
where
    R: Runtime,
{
    inner: Arc<Inner<F, A, R>>,
}

struct Inner<F, A, R>
where
    R: Runtime,
{
    func: F,
    wait: Duration,
    options: DebounceOptions,
    timer: R::Timer,
    state: Mutex<DebounceState<A, InstantOf<R>>>,
    _runtime: PhantomData<fn() -> R>,
}

struct DebounceState<A, I> {
    pending_args: Option<A>,
    burst_start: Option<I>,
    slot: TimerSlot,
}

impl<F, A, R> Debounced<F, A, R>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
    R: Runtime,
{
    /// Creates a debounced wrapper around `func` on runtime `R`.
    ///
    /// # Errors
    /// Returns [`CadenceError::InvalidConfig`](cadence_core::CadenceError::InvalidConfig)
    /// when `options` enables neither edge.
    pub fn new(func: F, wait: Duration, options: DebounceOptions) -> Result<Self> {
        let options = options.normalized(wait)?;
        Ok(Self {
            inner: Arc::new(Inner {
                func,
                wait,
                options,
                timer: R::Timer::default(),
                state: Mutex::new(DebounceState {
                    pending_args: None,
                    burst_start: None,
                    slot: TimerSlot::default(),
                }),
                _runtime: PhantomData,
            }),
        })
    }

    /// Registers a call, restarting the quiet period.
    ///
    /// Runs `func` synchronously only for the leading call of a burst when
    /// the leading edge is enabled; otherwise the invocation is deferred.
    /// Must be called from within the runtime, since it arms a timer task.
    pub fn call(&self, args: A) {
        let inner = &self.inner;
        let now = inner.timer.now();

        let leading = {
            let mut state = inner.state.lock();
            let starts_burst = !state.slot.is_armed();
            if starts_burst {
                state.burst_start = Some(now);
            }

            let mut leading = None;
            if starts_burst && inner.options.leading {
                leading = Some(args);
            } else if inner.options.trailing {
                state.pending_args = Some(args);
            }

            let burst_start = state.burst_start.unwrap_or(now);
            let delay = inner.next_delay(burst_start, now);
            Inner::arm(inner, &mut state, delay);
            leading
        };

        if let Some(args) = leading {
            (inner.func)(args);
        }
    }

    /// Drops the pending invocation, if any, and ends the current burst.
    pub fn cancel(&self) {
        let mut state = self.inner.state.lock();
        state.slot.cancel();
        state.pending_args = None;
        state.burst_start = None;
    }

    /// Runs the pending invocation now instead of at the end of the burst.
    ///
    /// Returns `true` if `func` was invoked.
    pub fn flush(&self) -> bool {
        let args = {
            let mut state = self.inner.state.lock();
            if !state.slot.is_armed() {
                return false;
            }
            state.slot.cancel();
            state.burst_start = None;
            state.pending_args.take()
        };

        match args {
            Some(args) => {
                (self.inner.func)(args);
                true
            }
            None => false,
        }
    }

    /// `true` while a burst is open and a timer is armed.
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().slot.is_armed()
    }

    pub fn wait(&self) -> Duration {
        self.inner.wait
    }

    pub fn options(&self) -> DebounceOptions {
        self.inner.options
    }
}

impl<F, A, R> Inner<F, A, R>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
    R: Runtime,
{
    fn next_delay(&self, burst_start: InstantOf<R>, now: InstantOf<R>) -> Duration {
        match self.options.max_wait {
            Some(max_wait) => self.wait.min(max_wait.saturating_sub(now - burst_start)),
            None => self.wait,
        }
    }

    fn arm(this: &Arc<Self>, state: &mut DebounceState<A, InstantOf<R>>, delay: Duration) {
        state.slot.arm(|generation| {
            let inner = Arc::clone(this);
            ScheduledTask::after::<R, _>(delay, move || inner.fire(generation))
        });
    }

    fn fire(&self, generation: u64) {
        let args = {
            let mut state = self.state.lock();
            if !state.slot.is_current(generation) {
                return;
            }
            state.slot.fired();
            state.burst_start = None;
            state.pending_args.take()
        };

        if let Some(args) = args {
            run_deferred("debounce", || (self.func)(args));
        }
    }
}

impl<F, A, R> Clone for Debounced<F, A, R>
where
    R: Runtime,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F, A, R> fmt::Debug for Debounced<F, A, R>
where
    R: Runtime,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait", &self.inner.wait)
            .field("options", &self.inner.options)
            .finish_non_exhaustive()
    }
}

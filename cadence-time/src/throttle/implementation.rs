// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::ThrottleOptions;
use crate::deferred::run_deferred;
use crate::timer_slot::TimerSlot;
use cadence_core::{Mutex, Result};
use cadence_runtime::{DefaultRuntime, InstantOf, Runtime, ScheduledTask, Timer};
use core::fmt;
use core::marker::PhantomData;
use core::time::Duration;
use std::sync::Arc;

/// Creates a throttled wrapper around `func` on the default runtime.
///
/// # Errors
/// Returns [`CadenceError::InvalidConfig`](cadence_core::CadenceError::InvalidConfig)
/// when `options` enables neither edge.
pub fn throttle<F, A>(
    func: F,
    wait: Duration,
    options: ThrottleOptions,
) -> Result<Throttled<F, A, DefaultRuntime>>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    Throttled::new(func, wait, options)
}

/// A throttled function. Cloning yields another handle to the same wrapper.
pub struct Throttled<F, A, R = DefaultRuntime>
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
    options: ThrottleOptions,
    timer: R::Timer,
    state: Mutex<ThrottleState<A, InstantOf<R>>>,
    _runtime: PhantomData<fn() -> R>,
}

struct ThrottleState<A, I> {
    window_start: Option<I>,
    pending_args: Option<A>,
    slot: TimerSlot,
}

impl<F, A, R> Throttled<F, A, R>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
    R: Runtime,
{
    /// # Errors
    /// Returns [`CadenceError::InvalidConfig`](cadence_core::CadenceError::InvalidConfig)
    /// when `options` enables neither edge.
    pub fn new(func: F, wait: Duration, options: ThrottleOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            inner: Arc::new(Inner {
                func,
                wait,
                options,
                timer: R::Timer::default(),
                state: Mutex::new(ThrottleState {
                    window_start: None,
                    pending_args: None,
                    slot: TimerSlot::default(),
                }),
                _runtime: PhantomData,
            }),
        })
    }

    /// Registers a call.
    ///
    /// Invokes `func` synchronously when the call opens a window on the
    /// leading edge, or when an elapsed window still holds a trailing call
    /// whose timer has not run yet (that call goes first).
    pub fn call(&self, args: A) {
        let inner = &self.inner;
        let now = inner.timer.now();

        let (overdue, leading) = {
            let mut state = inner.state.lock();

            let mut overdue = None;
            let open_window = state.window_start;
            if let Some(start) = open_window {
                if now - start >= inner.wait {
                    state.slot.cancel();
                    overdue = state.pending_args.take();
                    state.window_start = overdue.as_ref().map(|_| now);
                }
            }

            let mut leading = None;
            let window_start = state.window_start;
            match window_start {
                None => {
                    state.window_start = Some(now);
                    if inner.options.leading {
                        leading = Some(args);
                    } else {
                        state.pending_args = Some(args);
                        Inner::arm(inner, &mut state, inner.wait);
                    }
                }
                Some(start) => {
                    if inner.options.trailing {
                        state.pending_args = Some(args);
                        if !state.slot.is_armed() {
                            let remaining = inner.wait.saturating_sub(now - start);
                            Inner::arm(inner, &mut state, remaining);
                        }
                    }
                }
            }
            (overdue, leading)
        };

        if let Some(args) = overdue {
            (inner.func)(args);
        }
        if let Some(args) = leading {
            (inner.func)(args);
        }
    }

    /// Drops the deferred trailing call and closes the window, so the next
    /// call is treated as the first one.
    pub fn cancel(&self) {
        let mut state = self.inner.state.lock();
        state.slot.cancel();
        state.pending_args = None;
        state.window_start = None;
    }

    /// Runs the deferred trailing call now. Returns `true` if `func` ran.
    pub fn flush(&self) -> bool {
        let now = self.inner.timer.now();
        let args = {
            let mut state = self.inner.state.lock();
            if !state.slot.is_armed() {
                return false;
            }
            state.slot.cancel();
            let args = state.pending_args.take();
            if args.is_some() {
                state.window_start = Some(now);
            }
            args
        };

        match args {
            Some(args) => {
                (self.inner.func)(args);
                true
            }
            None => false,
        }
    }

    /// `true` while a trailing call waits for its window to close.
    pub fn is_pending(&self) -> bool {
        self.inner.state.lock().slot.is_armed()
    }

    pub fn wait(&self) -> Duration {
        self.inner.wait
    }

    pub fn options(&self) -> ThrottleOptions {
        self.inner.options
    }
}

impl<F, A, R> Inner<F, A, R>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
    R: Runtime,
{
    fn arm(this: &Arc<Self>, state: &mut ThrottleState<A, InstantOf<R>>, delay: Duration) {
        state.slot.arm(|generation| {
            let inner = Arc::clone(this);
            ScheduledTask::after::<R, _>(delay, move || inner.fire(generation))
        });
    }

    fn fire(&self, generation: u64) {
        let now = self.timer.now();
        let args = {
            let mut state = self.state.lock();
            if !state.slot.is_current(generation) {
                return;
            }
            state.slot.fired();
            let args = state.pending_args.take();
            if args.is_some() {
                // The trailing invocation opens the next window
                state.window_start = Some(now);
            }
            args
        };

        if let Some(args) = args {
            run_deferred("throttle", || (self.func)(args));
        }
    }
}

impl<F, A, R> Clone for Throttled<F, A, R>
where
    R: Runtime,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F, A, R> fmt::Debug for Throttled<F, A, R>
where
    R: Runtime,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("wait", &self.inner.wait)
            .field("options", &self.inner.options)
            .finish_non_exhaustive()
    }
}

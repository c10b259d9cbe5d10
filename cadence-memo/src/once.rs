// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Run a function at most one time and keep its result.

use cadence_core::{CadenceError, Mutex, Result};
use core::fmt;
use core::marker::PhantomData;
use core::mem;

/// Wraps `func` so that only the first call runs it.
///
/// ```
/// use cadence_memo::once;
///
/// let init = once(|port: u16| format!("listening on {port}"));
/// assert_eq!(init.call(8080).unwrap(), "listening on 8080");
/// assert_eq!(init.call(9090).unwrap(), "listening on 8080");
/// ```
pub fn once<F, A, R>(func: F) -> Once<F, A, R>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    Once::new(func)
}

/// A function that runs at most once.
///
/// The state moves `Ready -> Running -> Done` and never back. If the first
/// invocation panics the panic reaches its caller and the wrapper is left
/// `Poisoned`.
pub struct Once<F, A, R> {
    state: Mutex<OnceState<F, R>>,
    _args: PhantomData<fn(A)>,
}

enum OnceState<F, R> {
    Ready(F),
    Running,
    Done(R),
    Poisoned,
}

impl<F, A, R> Once<F, A, R>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    pub fn new(func: F) -> Self {
        Self {
            state: Mutex::new(OnceState::Ready(func)),
            _args: PhantomData,
        }
    }

    /// Runs the function on the first call; later calls return a clone of
    /// that first result and ignore `args`.
    ///
    /// # Errors
    /// - [`CadenceError::InvalidState`] when called again while the first
    ///   invocation is still running (the function re-entered its wrapper).
    /// - [`CadenceError::CallbackPanic`] when the first invocation panicked.
    pub fn call(&self, args: A) -> Result<R> {
        let func = {
            let mut state = self.state.lock();
            match mem::replace(&mut *state, OnceState::Running) {
                OnceState::Ready(func) => func,
                OnceState::Done(result) => {
                    let out = result.clone();
                    *state = OnceState::Done(result);
                    return Ok(out);
                }
                OnceState::Running => {
                    return Err(CadenceError::invalid_state(
                        "once: called again while the first invocation is running",
                    ));
                }
                OnceState::Poisoned => {
                    *state = OnceState::Poisoned;
                    return Err(CadenceError::callback_panic(
                        "once: the first invocation panicked",
                    ));
                }
            }
        };

        let guard = PoisonOnUnwind { state: &self.state };
        let result = func(args);
        mem::forget(guard);

        *self.state.lock() = OnceState::Done(result.clone());
        Ok(result)
    }

    /// `true` once the first invocation has completed.
    pub fn has_run(&self) -> bool {
        matches!(*self.state.lock(), OnceState::Done(_))
    }

    /// The cached result, if the first invocation has completed.
    pub fn value(&self) -> Option<R> {
        match &*self.state.lock() {
            OnceState::Done(result) => Some(result.clone()),
            _ => None,
        }
    }
}

impl<F, A, R> fmt::Debug for Once<F, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &*self.state.lock() {
            OnceState::Ready(_) => "ready",
            OnceState::Running => "running",
            OnceState::Done(_) => "done",
            OnceState::Poisoned => "poisoned",
        };
        f.debug_struct("Once").field("state", &state).finish()
    }
}

// Only dropped (rather than forgotten) when the wrapped function unwinds.
struct PoisonOnUnwind<'a, F, R> {
    state: &'a Mutex<OnceState<F, R>>,
}

impl<F, R> Drop for PoisonOnUnwind<'_, F, R> {
    fn drop(&mut self) {
        *self.state.lock() = OnceState::Poisoned;
    }
}

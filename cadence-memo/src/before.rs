// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_core::Mutex;
use core::fmt;
use core::marker::PhantomData;

/// Wraps `func` so it runs while it has been called fewer than `n` times.
///
/// From the `n`-th call on, the result of the last invocation is returned.
/// With `n <= 1` the function never runs and every call returns `None`.
///
/// ```
/// use cadence_memo::before;
///
/// let greet = before(3, |name: &str| format!("hi {name}"));
/// assert_eq!(greet.call("ann"), Some("hi ann".to_string()));
/// assert_eq!(greet.call("bob"), Some("hi bob".to_string()));
/// assert_eq!(greet.call("cyd"), Some("hi bob".to_string()));
/// ```
pub fn before<F, A, R>(n: usize, func: F) -> Before<F, A, R>
where
    F: Fn(A) -> R,
    R: Clone,
{
    Before {
        limit: n,
        func,
        state: Mutex::new(BeforeState {
            calls: 0,
            last: None,
        }),
        _args: PhantomData,
    }
}

pub struct Before<F, A, R> {
    limit: usize,
    func: F,
    state: Mutex<BeforeState<R>>,
    _args: PhantomData<fn(A)>,
}

struct BeforeState<R> {
    calls: usize,
    last: Option<R>,
}

impl<F, A, R> Before<F, A, R>
where
    F: Fn(A) -> R,
    R: Clone,
{
    pub fn call(&self, args: A) -> Option<R> {
        {
            let mut state = self.state.lock();
            state.calls = state.calls.saturating_add(1);
            if state.calls >= self.limit {
                return state.last.clone();
            }
        }

        let result = (self.func)(args);
        self.state.lock().last = Some(result.clone());
        Some(result)
    }

    /// Number of calls seen so far, including the ones that no longer run.
    pub fn calls(&self) -> usize {
        self.state.lock().calls
    }
}

impl<F, A, R> fmt::Debug for Before<F, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Before")
            .field("limit", &self.limit)
            .field("calls", &self.state.lock().calls)
            .finish_non_exhaustive()
    }
}

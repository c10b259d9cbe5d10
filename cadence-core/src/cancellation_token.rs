// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Stop signal for pending timer tasks.
//!
//! A scheduled debounce, throttle or delay invocation races its sleep against
//! [`CancellationToken::cancelled`]. Superseding the invocation trips the
//! token and the task ends at once, with its sleep dropped unfinished.

use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use std::sync::Arc;

/// One-shot flag shared between a wrapper and the task it scheduled.
///
/// Every clone observes the same flag. Tripping it wakes every task parked
/// in [`cancelled`](Self::cancelled), on any runtime.
///
/// ```
/// use cadence_core::CancellationToken;
///
/// # async fn run() {
/// let token = CancellationToken::new();
/// let task_side = token.clone();
///
/// tokio::spawn(async move {
///     task_side.cancelled().await;
/// });
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Arc<Signal>);

#[derive(Debug, Default)]
struct Signal {
    tripped: AtomicBool,
    waiters: Event,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trips the token. Calling it again has no effect.
    pub fn cancel(&self) {
        if !self.0.tripped.swap(true, Ordering::AcqRel) {
            self.0.waiters.notify(usize::MAX);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.tripped.load(Ordering::Acquire)
    }

    /// Resolves once the token is tripped, immediately if it already is.
    pub fn cancelled(&self) -> WhenCancelled<'_> {
        WhenCancelled {
            signal: &self.0,
            listener: None,
        }
    }
}

/// Future of [`CancellationToken::cancelled`].
#[derive(Debug)]
pub struct WhenCancelled<'a> {
    signal: &'a Signal,
    listener: Option<EventListener>,
}

impl Future for WhenCancelled<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let signal = self.signal;
        loop {
            if signal.tripped.load(Ordering::Acquire) {
                return Poll::Ready(());
            }

            match self.listener.as_mut() {
                // Listen first, then re-check the flag
                None => self.listener = Some(signal.waiters.listen()),
                Some(listener) => {
                    if Pin::new(listener).poll(cx).is_pending() {
                        return Poll::Pending;
                    }
                    self.listener = None;
                }
            }
        }
    }
}

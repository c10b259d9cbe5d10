// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_core::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// One recorded invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall<A> {
    pub args: A,
    /// Time since the recorder was created, on tokio's clock.
    pub at: Duration,
}

/// Spy recording the arguments and tokio-clock time of every invocation.
///
/// Clones share the same record.
#[derive(Debug)]
pub struct CallRecorder<A> {
    calls: Arc<Mutex<Vec<RecordedCall<A>>>>,
    origin: Instant,
}

impl<A> CallRecorder<A>
where
    A: Clone + Send + 'static,
{
    /// Creates an empty recorder; recorded times are relative to now.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            origin: Instant::now(),
        }
    }

    pub fn record(&self, args: A) {
        let at = Instant::now().duration_since(self.origin);
        self.calls.lock().push(RecordedCall { args, at });
    }

    /// A function suitable for wrapping, recording into this recorder.
    pub fn func(&self) -> impl Fn(A) + Send + Sync + 'static {
        let recorder = self.clone();
        move |args| recorder.record(args)
    }

    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn calls(&self) -> Vec<RecordedCall<A>> {
        self.calls.lock().clone()
    }

    pub fn args(&self) -> Vec<A> {
        self.calls.lock().iter().map(|call| call.args.clone()).collect()
    }

    pub fn times(&self) -> Vec<Duration> {
        self.calls.lock().iter().map(|call| call.at).collect()
    }

    pub fn last(&self) -> Option<RecordedCall<A>> {
        self.calls.lock().last().cloned()
    }
}

impl<A> Clone for CallRecorder<A> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
            origin: self.origin,
        }
    }
}

impl<A> Default for CallRecorder<A>
where
    A: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

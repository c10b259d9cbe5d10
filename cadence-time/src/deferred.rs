// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_core::CadenceError;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Runs a deferred invocation on a timer task.
///
/// Nobody is waiting on the task, so a panic is reported through the logging
/// channel instead of being lost with the task.
pub(crate) fn run_deferred<F>(operation: &str, invocation: F)
where
    F: FnOnce(),
{
    if let Err(payload) = catch_unwind(AssertUnwindSafe(invocation)) {
        let err = CadenceError::from_panic(operation, &*payload);
        cadence_core::error!("deferred invocation failed: {}", err);
    }
}

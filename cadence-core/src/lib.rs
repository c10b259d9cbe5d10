// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared building blocks for the Cadence wrappers: the cancellation token
//! that guards pending timer tasks, the mutex used for wrapper state and the
//! conditional logging shim.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
#[macro_use]
pub mod logging;
pub mod mutex;

pub use self::cancellation_token::{CancellationToken, WhenCancelled};
pub use self::mutex::{Mutex, MutexGuard};
pub use cadence_error::{CadenceError, Result};

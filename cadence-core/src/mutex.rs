// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Mutex guarding per-wrapper state.
//!
//! `parking_lot` locks do not poison, so a wrapped function that panics never
//! leaves the wrapper's own bookkeeping unreachable.

pub use parking_lot::{Mutex, MutexGuard};

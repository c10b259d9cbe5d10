// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timing-control wrappers around plain functions.
//!
//! # Overview
//!
//! - **[`debounce`]** - invoke once calls stop arriving for a quiet period
//! - **[`throttle`]** - invoke at most once per interval
//! - **[`delay`]** - invoke once after a wait, cancellable
//! - **[`sleep`]** - wait on the runtime's clock
//!
//! Each factory call yields an independent wrapper owning its own timer. The
//! timers come from a [`Runtime`](cadence_runtime::Runtime), selected with
//! cargo features:
//! - `runtime-tokio` (default) - `TokioRuntime`, whose clock follows
//!   `tokio::time::pause`/`advance` in tests
//! - `runtime-smol` - `SmolRuntime`
//!
//! The wrapped function runs on the caller's stack for leading-edge and
//! flushed invocations, and on a spawned timer task otherwise.

mod debounce;
mod deferred;
mod delay;
mod throttle;
mod timer_slot;

pub mod prelude;

pub use cadence_runtime::{DefaultRuntime, ScheduledTask};
pub use debounce::{debounce, DebounceOptions, Debounced};
pub use delay::{delay, delay_on, sleep, sleep_on};
pub use throttle::{throttle, ThrottleOptions, Throttled};

#[cfg(feature = "runtime-tokio")]
pub use cadence_runtime::TokioRuntime;

#[cfg(feature = "runtime-smol")]
pub use cadence_runtime::SmolRuntime;

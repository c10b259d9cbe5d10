// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction behind the timed Cadence wrappers.
//!
//! A [`Runtime`] supplies a clock, a sleep future and a way to spawn detached
//! tasks. Debounce, throttle and delay only talk to these traits, so tests can
//! drive them on a paused tokio clock instead of waiting on wall time.

pub mod impls;
pub mod runtime;
pub mod scheduled_task;
pub mod timer;

pub use runtime::{InstantOf, Runtime};
pub use scheduled_task::ScheduledTask;
pub use timer::Timer;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::{TokioRuntime, TokioTimer};

#[cfg(feature = "runtime-smol")]
pub use impls::smol::{SmolRuntime, SmolTimer};

/// Runtime used by the convenience constructors (`debounce`, `throttle`, ...).
#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = TokioRuntime;

/// Runtime used by the convenience constructors (`debounce`, `throttle`, ...).
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultRuntime = SmolRuntime;

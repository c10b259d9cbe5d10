// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Cadence
//!
//! Wrappers that control *when* and *how often* a plain function runs.
//!
//! ## Overview
//!
//! - **Timing** (`cadence-time`): [`debounce`], [`throttle`], [`delay`] and
//!   [`sleep`], driven by a runtime-agnostic timer
//! - **Call limiting and caching** (`cadence-memo`): [`once`], [`before`],
//!   [`memoize`] and [`try_memoize`]
//!
//! Every factory call yields an independent wrapper with its own timer or
//! cache. Errors raised by the wrapped function are never translated;
//! [`CadenceError`] only reports failures of the wrappers themselves.
//!
//! ## Runtime selection
//!
//! The timed wrappers spawn their pending invocations on a
//! [`Runtime`](cadence_runtime::Runtime):
//! - `runtime-tokio` (default)
//! - `runtime-smol`
//!
//! Enable `tracing` to route the wrappers' diagnostics through `tracing`
//! instead of stderr.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cadence::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> cadence::Result<()> {
//!     let save = debounce(
//!         |text: String| println!("saving {text}"),
//!         Duration::from_millis(200),
//!         DebounceOptions::default(),
//!     )?;
//!     save.call("draft".to_string());
//!
//!     let square = memoize(|n: &u64| n * n);
//!     assert_eq!(square.call(&12), 144);
//!
//!     sleep(Duration::from_millis(250)).await;
//!     Ok(())
//! }
//! ```

pub use cadence_error::{CadenceError, Result};

pub use cadence_time::{
    debounce, delay, delay_on, sleep, sleep_on, throttle, DebounceOptions, Debounced,
    DefaultRuntime, ScheduledTask, ThrottleOptions, Throttled,
};

pub use cadence_memo::{
    before, memoize, memoize_by_first, memoize_with, memoize_with_policy, once, try_memoize,
    try_memoize_with, Before, ByFirst, ByIdentity, ByValue, IdentityKey, KeyPolicy, MemoCache, Memoized, Once, Resolver,
    TryMemoized,
};

pub use cadence_runtime::{Runtime, Timer};

#[cfg(feature = "runtime-tokio")]
pub use cadence_runtime::TokioRuntime;

#[cfg(feature = "runtime-smol")]
pub use cadence_runtime::SmolRuntime;

/// Prelude module for convenient imports
pub mod prelude {
    pub use cadence_error::{CadenceError, Result};
    pub use cadence_memo::{before, memoize, memoize_by_first, memoize_with, once, try_memoize};
    pub use cadence_time::prelude::*;
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the timed wrappers and their options.
//!
//! ```ignore
//! use cadence_time::prelude::*;
//!
//! let search = debounce(run_query, Duration::from_millis(300), DebounceOptions::default())?;
//! let resize = throttle(relayout, Duration::from_millis(16), ThrottleOptions::default())?;
//! ```

pub use crate::debounce::{debounce, DebounceOptions, Debounced};
pub use crate::delay::{delay, sleep};
pub use crate::throttle::{throttle, ThrottleOptions, Throttled};
pub use cadence_runtime::ScheduledTask;

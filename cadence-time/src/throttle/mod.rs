// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Throttle wrapper: invoke at most once per `wait` window.
//!
//! A call made while no window is open opens one. What happens to the calls
//! inside the window is an explicit edge policy ([`ThrottleOptions`]):
//! - **leading** (default): the opening call runs immediately, the rest of the
//!   window is dropped
//! - **trailing**: the last call seen in the window runs when the window
//!   closes; that invocation opens the next window
//!
//! Either way invocations are spaced at least `wait` apart and keep the order
//! of the calls that produced them.
//!
//! # Example
//!
//! ```rust,no_run
//! use cadence_time::{throttle, ThrottleOptions};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> cadence_core::Result<()> {
//! let on_scroll = throttle(
//!     |offset: u32| println!("scrolled to {offset}"),
//!     Duration::from_millis(100),
//!     ThrottleOptions::default().with_trailing(true),
//! )?;
//!
//! on_scroll.call(10); // runs now
//! on_scroll.call(20); // dropped
//! on_scroll.call(30); // runs when the window closes
//! # Ok(())
//! # }
//! ```

mod implementation;
mod options;

pub use implementation::{throttle, Throttled};
pub use options::ThrottleOptions;

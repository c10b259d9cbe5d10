// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce wrapper: delay invocation until calls stop arriving.
//!
//! Every call cancels the pending invocation and schedules a new one `wait`
//! in the future, so a burst of calls collapses into a single invocation:
//! - **trailing** (default): once the burst has been quiet for `wait`, invoke
//!   with the arguments of the last call
//! - **leading**: invoke immediately on the first call of a burst; a burst of
//!   one call does not invoke again on the trailing edge
//! - **max_wait**: cap how long a continuous burst may postpone invocation
//!
//! Deferred invocations run on a task spawned on the runtime; a panic there is
//! logged and the wrapper stays usable.
//!
//! # Example
//!
//! ```rust,no_run
//! use cadence_time::{debounce, DebounceOptions};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> cadence_core::Result<()> {
//! let save = debounce(
//!     |text: String| println!("saving {text}"),
//!     Duration::from_millis(100),
//!     DebounceOptions::default(),
//! )?;
//!
//! save.call("h".to_string());
//! save.call("he".to_string());
//! save.call("hello".to_string());
//! // ~100ms later: "saving hello", once
//! # Ok(())
//! # }
//! ```

mod implementation;
mod options;

pub use implementation::{debounce, Debounced};
pub use options::DebounceOptions;

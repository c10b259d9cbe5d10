// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the Cadence wrappers.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! ## `CallRecorder<A>`
//!
//! A spy standing in for the wrapped function. It records the arguments of
//! every invocation together with the tokio clock reading at that moment, so
//! tests on a paused clock can assert *when* an invocation happened:
//!
//! ```rust
//! use cadence_test_utils::CallRecorder;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let recorder = CallRecorder::new();
//! let func = recorder.func();
//!
//! func(7);
//! assert_eq!(recorder.args(), vec![7]);
//! # }
//! ```
//!
//! ## `CallCounter`
//!
//! Counts invocations of a synchronous function, for memoize/once tests.
//!
//! ## Helpers
//!
//! [`helpers::settle`] yields until spawned timer tasks woken by
//! `tokio::time::advance` have run; [`helpers::advance_and_settle`] combines
//! both.

pub mod call_counter;
pub mod call_recorder;
pub mod helpers;

pub use call_counter::CallCounter;
pub use call_recorder::{CallRecorder, RecordedCall};

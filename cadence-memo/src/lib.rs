// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Call-count and caching wrappers around plain functions.
//!
//! - **[`once`]** - run at most one time, return that result forever after
//! - **[`before`]** - run for the first `n - 1` calls, then repeat the last result
//! - **[`memoize`]** - cache results keyed by argument, with explicit key policies
//!   ([`memoize_by_first`] keys tuple arguments on their first element)
//! - **[`try_memoize`]** - like `memoize`, caching only successful results
//!
//! None of these wrappers hold their lock while the wrapped function runs,
//! and none of them catch what the function raises: panics and errors reach
//! the caller as they are.

pub mod before;
pub mod memoize;
pub mod once;

pub use before::{before, Before};
pub use memoize::{
    memoize, memoize_by_first, memoize_with, memoize_with_policy, try_memoize, try_memoize_with,
    ByFirst, ByIdentity, ByValue, IdentityKey, KeyPolicy, MemoCache, Memoized, Resolver,
    TryMemoized,
};
pub use once::{once, Once};

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cache a function's results keyed by its argument.
//!
//! The key comes from a [`KeyPolicy`]:
//! - [`ByValue`] (default) - the argument itself, compared with `Eq`
//! - [`ByFirst`] - the first element of a tuple argument, see [`memoize_by_first`]
//! - [`ByIdentity`] - the allocation behind an `Arc` argument
//! - [`Resolver`] - any key function, see [`memoize_with`]
//!
//! A hit returns a clone of the cached result without calling the function.
//! The cache only grows; [`Memoized::cache`] exposes it for explicit
//! invalidation.

mod cache;
mod key;
mod try_memoize;

pub use cache::MemoCache;
pub use key::{ByFirst, ByIdentity, ByValue, IdentityKey, KeyPolicy, Resolver};
pub use try_memoize::{try_memoize, try_memoize_with, TryMemoized};

use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;

/// Memoizes `func`, keyed by the value of its argument.
///
/// ```
/// use cadence_memo::memoize;
///
/// let double = memoize(|x: &u64| x * 2);
/// assert_eq!(double.call(&3), 6);
/// assert!(double.cache().has(&3));
/// ```
pub fn memoize<F, A, R>(func: F) -> Memoized<F, A, R, ByValue>
where
    F: Fn(&A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    Memoized::with_policy(func, ByValue)
}

/// Memoizes `func` over a tuple argument, keyed by its first element.
///
/// Calls that differ only in later elements share one cache entry.
///
/// ```
/// use cadence_memo::memoize_by_first;
///
/// let add = memoize_by_first(|args: &(u32, u32)| args.0 + args.1);
/// assert_eq!(add.call(&(1, 2)), 3);
/// assert_eq!(add.call(&(1, 3)), 3);
/// assert!(add.cache().has(&1));
/// ```
pub fn memoize_by_first<F, A, R>(func: F) -> Memoized<F, A, R, ByFirst>
where
    F: Fn(&A) -> R,
    R: Clone,
    ByFirst: KeyPolicy<A>,
{
    Memoized::with_policy(func, ByFirst)
}

/// Memoizes `func`, keyed by `resolver(&args)`.
///
/// ```
/// use cadence_memo::memoize_with;
///
/// // Only the user id matters for the lookup
/// let lookup = memoize_with(
///     |req: &(u32, String)| format!("user {}", req.0),
///     |req: &(u32, String)| req.0,
/// );
/// assert_eq!(lookup.call(&(1, "trace-a".into())), "user 1");
/// assert_eq!(lookup.cache().len(), 1);
/// lookup.call(&(1, "trace-b".into()));
/// assert_eq!(lookup.cache().len(), 1);
/// ```
pub fn memoize_with<F, G, A, K, R>(func: F, resolver: G) -> Memoized<F, A, R, Resolver<G, K>>
where
    A: ?Sized,
    F: Fn(&A) -> R,
    G: Fn(&A) -> K,
    K: Hash + Eq,
    R: Clone,
{
    Memoized::with_policy(func, Resolver::new(resolver))
}

/// Memoizes `func` with an explicit key policy.
pub fn memoize_with_policy<F, A, R, P>(func: F, policy: P) -> Memoized<F, A, R, P>
where
    A: ?Sized,
    F: Fn(&A) -> R,
    R: Clone,
    P: KeyPolicy<A>,
{
    Memoized::with_policy(func, policy)
}

/// A memoized function.
pub struct Memoized<F, A, R, P = ByValue>
where
    A: ?Sized,
    P: KeyPolicy<A>,
{
    func: F,
    policy: P,
    cache: MemoCache<P::Key, R>,
    _args: PhantomData<fn(&A)>,
}

impl<F, A, R, P> Memoized<F, A, R, P>
where
    A: ?Sized,
    F: Fn(&A) -> R,
    R: Clone,
    P: KeyPolicy<A>,
{
    pub fn with_policy(func: F, policy: P) -> Self {
        Self {
            func,
            policy,
            cache: MemoCache::new(),
            _args: PhantomData,
        }
    }

    /// Returns the cached result for this argument's key, computing and
    /// storing it on a miss.
    ///
    /// The cache is not locked while the function runs, so the function may
    /// call back into this wrapper.
    pub fn call(&self, args: &A) -> R {
        let key = self.policy.key(args);
        if let Some(hit) = self.cache.get(&key) {
            return hit;
        }

        let value = (self.func)(args);
        self.cache.set(key, value.clone());
        value
    }

    pub fn cache(&self) -> &MemoCache<P::Key, R> {
        &self.cache
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<F, A, R, P> fmt::Debug for Memoized<F, A, R, P>
where
    A: ?Sized,
    P: KeyPolicy<A>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

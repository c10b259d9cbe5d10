// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::{ByValue, KeyPolicy, MemoCache, Resolver};
use core::hash::Hash;
use core::marker::PhantomData;

/// Memoizes a fallible `func`, caching only its `Ok` results.
///
/// An `Err` goes back to the caller untouched and the next call with the same
/// key tries again.
///
/// ```
/// use cadence_memo::try_memoize;
///
/// let parse = try_memoize(|raw: &String| raw.parse::<u16>());
/// assert_eq!(parse.call(&"80".to_string()), Ok(80));
/// assert!(parse.call(&"port".to_string()).is_err());
/// assert_eq!(parse.cache().len(), 1);
/// ```
pub fn try_memoize<F, A, T, E>(func: F) -> TryMemoized<F, A, T, ByValue>
where
    F: Fn(&A) -> Result<T, E>,
    A: Hash + Eq + Clone,
    T: Clone,
{
    TryMemoized::with_policy(func, ByValue)
}

/// [`try_memoize`] keyed by `resolver(&args)`.
pub fn try_memoize_with<F, G, A, K, T, E>(
    func: F,
    resolver: G,
) -> TryMemoized<F, A, T, Resolver<G, K>>
where
    A: ?Sized,
    F: Fn(&A) -> Result<T, E>,
    G: Fn(&A) -> K,
    K: Hash + Eq,
    T: Clone,
{
    TryMemoized::with_policy(func, Resolver::new(resolver))
}

/// A memoized fallible function.
pub struct TryMemoized<F, A, T, P = ByValue>
where
    A: ?Sized,
    P: KeyPolicy<A>,
{
    func: F,
    policy: P,
    cache: MemoCache<P::Key, T>,
    _args: PhantomData<fn(&A)>,
}

impl<F, A, T, P> TryMemoized<F, A, T, P>
where
    A: ?Sized,
    T: Clone,
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

    /// # Errors
    /// Returns whatever error the wrapped function returned for this call.
    pub fn call<E>(&self, args: &A) -> Result<T, E>
    where
        F: Fn(&A) -> Result<T, E>,
    {
        let key = self.policy.key(args);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }

        let value = (self.func)(args)?;
        self.cache.set(key, value.clone());
        Ok(value)
    }

    pub fn cache(&self) -> &MemoCache<P::Key, T> {
        &self.cache
    }
}

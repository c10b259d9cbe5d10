// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Key policies: how a memoized call's argument becomes a cache key.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use std::sync::Arc;

/// Derives the cache key of a memoized call from its argument.
///
/// Two calls share a cache entry exactly when their keys compare equal.
pub trait KeyPolicy<A: ?Sized> {
    type Key: Hash + Eq;

    fn key(&self, args: &A) -> Self::Key;
}

/// Value equality: the argument itself, cloned, is the key.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByValue;

impl<A> KeyPolicy<A> for ByValue
where
    A: Hash + Eq + Clone,
{
    type Key = A;

    fn key(&self, args: &A) -> A {
        args.clone()
    }
}

/// Tuple arguments keyed by their first element only; the other elements
/// are passed to the function but never compared.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByFirst;

macro_rules! impl_by_first {
    ($first:ident $(, $rest:ident)*) => {
        impl<$first $(, $rest)*> KeyPolicy<($first, $($rest,)*)> for ByFirst
        where
            $first: Hash + Eq + Clone,
        {
            type Key = $first;

            fn key(&self, args: &($first, $($rest,)*)) -> $first {
                args.0.clone()
            }
        }
    };
}

impl_by_first!(T1);
impl_by_first!(T1, T2);
impl_by_first!(T1, T2, T3);
impl_by_first!(T1, T2, T3, T4);
impl_by_first!(T1, T2, T3, T4, T5);
impl_by_first!(T1, T2, T3, T4, T5, T6);

/// Identity equality for shared arguments: two `Arc`s hit the same entry only
/// if they point at the same allocation, whatever their contents.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByIdentity;

impl<T: ?Sized> KeyPolicy<Arc<T>> for ByIdentity {
    type Key = IdentityKey<T>;

    fn key(&self, args: &Arc<T>) -> IdentityKey<T> {
        IdentityKey(Arc::clone(args))
    }
}

/// Key compared by allocation address.
///
/// Holds a strong reference, so the address cannot be reused by another
/// allocation while the entry is cached.
pub struct IdentityKey<T: ?Sized>(Arc<T>);

impl<T: ?Sized> IdentityKey<T> {
    pub fn new(value: Arc<T>) -> Self {
        Self(value)
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0).cast::<()>()
    }
}

impl<T: ?Sized> PartialEq for IdentityKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl<T: ?Sized> Eq for IdentityKey<T> {}

impl<T: ?Sized> Hash for IdentityKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl<T: ?Sized> fmt::Debug for IdentityKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IdentityKey").field(&self.addr()).finish()
    }
}

/// A caller-supplied key function.
pub struct Resolver<G, K> {
    resolve: G,
    _key: PhantomData<fn() -> K>,
}

impl<G, K> Resolver<G, K> {
    pub fn new(resolve: G) -> Self {
        Self {
            resolve,
            _key: PhantomData,
        }
    }
}

impl<A, G, K> KeyPolicy<A> for Resolver<G, K>
where
    A: ?Sized,
    G: Fn(&A) -> K,
    K: Hash + Eq,
{
    type Key = K;

    fn key(&self, args: &A) -> K {
        (self.resolve)(args)
    }
}

impl<G, K> fmt::Debug for Resolver<G, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver").finish_non_exhaustive()
    }
}

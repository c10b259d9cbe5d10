// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use cadence_core::Mutex;
use core::fmt;
use core::hash::Hash;
use std::borrow::Borrow;
use std::collections::HashMap;

/// The result cache behind a memoized function.
///
/// Unbounded and never evicted on its own: entries leave only through
/// [`delete`](Self::delete) or [`clear`](Self::clear).
pub struct MemoCache<K, V> {
    entries: Mutex<HashMap<K, V>>,
}

impl<K, V> MemoCache<K, V>
where
    K: Hash + Eq,
{
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.entries.lock().get(key).cloned()
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn set(&self, key: K, value: V) -> Option<V> {
        self.entries.lock().insert(key, value)
    }

    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.lock().contains_key(key)
    }

    /// Removes one entry. Returns `true` if it was present.
    pub fn delete<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.lock().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<K, V> Default for MemoCache<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for MemoCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCache")
            .field("len", &self.entries.lock().len())
            .finish()
    }
}

//! Bounded least-recently-used memoization.
//!
//! Decoding and stemming are pure functions of their arguments, and real
//! text repeats the same words constantly, so the tagger memoizes both.
//! Eviction only costs recomputation; it never changes a result.

use std::collections::BTreeMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

use ahash::AHashMap;
use parking_lot::Mutex;

struct LruInner<K, V> {
    entries: AHashMap<K, (V, u64)>,
    // last-use tick -> key, oldest first
    recency: BTreeMap<u64, K>,
    tick: u64,
}

impl<K: Clone + Eq + Hash, V: Clone> LruInner<K, V> {
    fn touch(&mut self, key: &K) -> Option<V> {
        self.tick += 1;
        let tick = self.tick;
        let (value, last_used) = self.entries.get_mut(key)?;
        self.recency.remove(&*last_used);
        *last_used = tick;
        self.recency.insert(tick, key.clone());
        Some(value.clone())
    }

    fn insert(&mut self, key: K, value: V, capacity: usize) {
        self.tick += 1;
        let tick = self.tick;
        if let Some((_, last_used)) = self.entries.get(&key) {
            self.recency.remove(last_used);
        } else {
            while self.entries.len() >= capacity {
                match self.recency.pop_first() {
                    Some((_, oldest)) => {
                        self.entries.remove(&oldest);
                    }
                    None => break,
                }
            }
        }
        self.recency.insert(tick, key.clone());
        self.entries.insert(key, (value, tick));
    }
}

/// A thread-safe LRU cache with a fixed capacity.
///
/// A capacity of zero disables caching: every lookup recomputes.
pub struct LruCache<K, V> {
    inner: Mutex<LruInner<K, V>>,
    capacity: usize,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<K: Clone + Eq + Hash, V: Clone> LruCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        LruCache {
            inner: Mutex::new(LruInner {
                entries: AHashMap::new(),
                recency: BTreeMap::new(),
                tick: 0,
            }),
            capacity,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Cached value for `key`, marking it most recently used.
    pub fn get(&self, key: &K) -> Option<V> {
        if self.capacity == 0 {
            return None;
        }
        self.inner.lock().touch(key)
    }

    pub fn insert(&self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        self.inner.lock().insert(key, value, self.capacity);
    }

    /// Return the cached value for `key`, computing and caching it on a miss.
    ///
    /// `compute` runs without the lock held.
    pub fn get_or_insert_with<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return value;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = compute();
        self.insert(key, value.clone());
        value
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            len: self.len(),
            capacity: self.capacity,
        }
    }
}

impl<K, V> std::fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}

/// Cache performance statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: usize,

    /// Number of cache misses.
    pub misses: usize,

    /// Entries currently cached.
    pub len: usize,

    /// Maximum number of entries.
    pub capacity: usize,
}

impl CacheStats {
    /// Calculate hit ratio.
    pub fn hit_ratio(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

//! Bounded memoization cache with least-recently-used eviction.
//!
//! [`RecencyCache`] memoizes expensive per-key computations (originally
//! formatted type descriptions produced by reflective inspection) under a
//! hard capacity bound. When a `put` would exceed the capacity, the single
//! least-recently-touched entry is evicted first.
//!
//! # Characteristics
//!
//! - **O(1) get, put, and eviction**: hash map plus an intrusive
//!   doubly-linked recency list over an arena of slots
//! - **Strict recency order**: only `get` hits touch an entry;
//!   `contains_key` never does
//! - **Hit/miss counters**: kept across `clear`
//!
//! The reference approach relocated touched keys with a linear scan; the
//! linked-list layout here preserves the same observable eviction order
//! at O(1) per operation.

use std::collections::HashMap;
use std::hash::Hash;

use log::debug;

use crate::error::CacheError;

const NIL: usize = usize::MAX;

struct Slot<K, V> {
    key: K,
    value: V,
    /// Index of the more recently touched neighbor.
    prev: usize,
    /// Index of the less recently touched neighbor.
    next: usize,
}

/// A fixed-capacity cache evicting the least-recently-touched entry.
///
/// # Examples
///
/// ```
/// use classtree::cache::RecencyCache;
///
/// let mut cache = RecencyCache::new(2);
/// cache.put("a", 1).unwrap();
/// cache.put("b", 2).unwrap();
///
/// // Touch "a", making "b" the eviction victim.
/// assert_eq!(cache.get(&"a"), Some(&1));
///
/// cache.put("c", 3).unwrap();
/// assert!(!cache.contains_key(&"b"));
/// assert!(cache.contains_key(&"a"));
/// assert!(cache.contains_key(&"c"));
/// ```
pub struct RecencyCache<K, V> {
    capacity: usize,
    map: HashMap<K, usize>,
    slots: Vec<Slot<K, V>>,
    free: Vec<usize>,
    /// Most recently touched slot.
    head: usize,
    /// Least recently touched slot (the eviction victim).
    tail: usize,
    hits: usize,
    misses: usize,
}

impl<K, V> RecencyCache<K, V> {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Cache capacity must be positive");

        Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            hits: 0,
            misses: 0,
        }
    }

    /// The maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The current number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The number of lookup hits.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// The number of lookup misses.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Remove all entries. Counters are kept.
    pub fn clear(&mut self) {
        self.map.clear();
        self.slots.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    fn unlink(&mut self, index: usize) {
        let (prev, next) = (self.slots[index].prev, self.slots[index].next);
        if prev == NIL {
            self.head = next;
        } else {
            self.slots[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.slots[next].prev = prev;
        }
    }

    fn link_front(&mut self, index: usize) {
        self.slots[index].prev = NIL;
        self.slots[index].next = self.head;
        if self.head != NIL {
            self.slots[self.head].prev = index;
        }
        self.head = index;
        if self.tail == NIL {
            self.tail = index;
        }
    }
}

impl<K, V> RecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Look up `key`, marking the entry as most recently touched on a hit.
    ///
    /// A miss is a normal outcome, signaled by `None`. Distinguishing a
    /// cached value from an absent key never requires inspecting the value:
    /// use [`contains_key`][Self::contains_key].
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.map.get(key) {
            Some(&index) => {
                self.hits += 1;
                self.unlink(index);
                self.link_front(index);
                Some(&self.slots[index].value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert a new mapping, evicting the least-recently-touched entry if
    /// the cache is at capacity.
    ///
    /// # Errors
    ///
    /// [`CacheError::DuplicateKey`] if `key` is already present. Entries
    /// are immutable once cached; remove via [`clear`][Self::clear] and
    /// recompute instead of overwriting.
    pub fn put(&mut self, key: K, value: V) -> Result<(), CacheError> {
        if self.map.contains_key(&key) {
            return Err(CacheError::DuplicateKey);
        }

        if self.map.len() == self.capacity {
            let victim = self.tail;
            debug!("cache full ({} entries), evicting the least-recently-touched entry", self.capacity);
            self.unlink(victim);
            self.map.remove(&self.slots[victim].key);
            self.free.push(victim);
        }

        let slot = Slot {
            key: key.clone(),
            value,
            prev: NIL,
            next: NIL,
        };
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = slot;
                index
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };

        self.link_front(index);
        self.map.insert(key, index);
        Ok(())
    }

    /// Check whether `key` is currently cached, without touching the
    /// entry's recency position or the hit/miss counters.
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut cache = RecencyCache::new(4);
        cache.put("one", 1).unwrap();
        cache.put("two", 2).unwrap();

        assert_eq!(cache.get(&"one"), Some(&1));
        assert_eq!(cache.get(&"two"), Some(&2));
        assert_eq!(cache.get(&"three"), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_eviction_order() {
        let mut cache = RecencyCache::new(2);
        cache.put("a", 1).unwrap();
        cache.put("b", 2).unwrap();

        // Touch "a"; "b" becomes the least recently touched.
        assert_eq!(cache.get(&"a"), Some(&1));

        cache.put("c", 3).unwrap();
        assert!(cache.contains_key(&"a"));
        assert!(!cache.contains_key(&"b"));
        assert!(cache.contains_key(&"c"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_contains_key_has_no_recency_effect() {
        let mut cache = RecencyCache::new(2);
        cache.put("a", 1).unwrap();
        cache.put("b", 2).unwrap();

        for _ in 0..10 {
            assert!(cache.contains_key(&"a"));
        }

        // "a" is still the eviction victim despite the containsKey calls.
        cache.put("c", 3).unwrap();
        assert!(!cache.contains_key(&"a"));
        assert!(cache.contains_key(&"b"));
        assert!(cache.contains_key(&"c"));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut cache = RecencyCache::new(2);
        cache.put("a", 1).unwrap();
        assert_eq!(cache.put("a", 2), Err(CacheError::DuplicateKey));
        assert_eq!(cache.get(&"a"), Some(&1));
    }

    #[test]
    fn test_clear() {
        let mut cache = RecencyCache::new(2);
        cache.put("a", 1).unwrap();
        cache.put("b", 2).unwrap();
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), None);

        // The cache is usable again after clearing.
        cache.put("c", 3).unwrap();
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn test_statistics() {
        let mut cache = RecencyCache::new(2);
        cache.get(&"a");
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 0);

        cache.put("a", 1).unwrap();
        cache.get(&"a");
        assert_eq!(cache.hits(), 1);

        cache.clear();
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_capacity_one() {
        let mut cache = RecencyCache::new(1);
        cache.put("a", 1).unwrap();
        cache.put("b", 2).unwrap();

        assert!(!cache.contains_key(&"a"));
        assert_eq!(cache.get(&"b"), Some(&2));
    }

    #[test]
    #[should_panic(expected = "Cache capacity must be positive")]
    fn test_zero_capacity() {
        RecencyCache::<&str, i32>::new(0);
    }

    /// Compare against a naive recency model under a longer mixed workload.
    #[test]
    fn test_eviction_matches_naive_model() {
        const CAPACITY: usize = 4;

        let mut cache = RecencyCache::new(CAPACITY);
        // Front of the vec is the least recently touched key.
        let mut model: Vec<u64> = Vec::new();

        // A deterministic pseudo-random walk over a small key space.
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..1000 {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let key = state >> 56 & 0xf;

            if cache.contains_key(&key) {
                assert!(model.contains(&key));
                assert_eq!(cache.get(&key), Some(&(key * 10)));
                model.retain(|&k| k != key);
                model.push(key);
            } else {
                assert!(!model.contains(&key));
                if model.len() == CAPACITY {
                    model.remove(0);
                }
                model.push(key);
                cache.put(key, key * 10).unwrap();
            }

            assert_eq!(cache.len(), model.len());
            for k in &model {
                assert!(cache.contains_key(k));
            }
        }
    }
}

//! Capacity-bounded memo table for generated patterns.
//!
//! Keys are the canonical identity/config strings, values are shared
//! handles to finished patterns. Eviction is insertion-order (FIFO):
//! when full, the oldest-inserted entry leaves, regardless of how
//! recently it was read. Because generation is a pure function of the
//! key, concurrent misses may compute the same value more than once;
//! the lock covers only the table itself, never a computation, so
//! racing callers waste work but cannot deadlock or corrupt the table.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::model::WavePattern;

pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Debug, Default)]
struct Table {
    entries: HashMap<String, Arc<WavePattern>>,
    insertion_order: VecDeque<String>,
}

#[derive(Debug)]
pub struct PatternCache {
    capacity: usize,
    table: Mutex<Table>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl PatternCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            table: Mutex::new(Table::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &str) -> Option<Arc<WavePattern>> {
        let table = self.lock();
        match table.entries.get(key) {
            Some(pattern) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                log::debug!("pattern cache hit: {key}");
                Some(Arc::clone(pattern))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn insert(&self, key: String, pattern: Arc<WavePattern>) {
        if self.capacity == 0 {
            return;
        }
        let mut table = self.lock();
        if table.entries.insert(key.clone(), pattern).is_some() {
            // Lost race with another computation for the same key; the
            // replacement keeps the original insertion slot.
            return;
        }
        table.insertion_order.push_back(key);
        if table.insertion_order.len() > self.capacity {
            if let Some(oldest) = table.insertion_order.pop_front() {
                log::debug!("pattern cache evicting oldest entry: {oldest}");
                table.entries.remove(&oldest);
            }
        }
    }

    pub fn clear(&self) {
        let mut table = self.lock();
        table.entries.clear();
        table.insertion_order.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> Arc<WavePattern> {
        Arc::new(WavePattern {
            gradients: Vec::new(),
            elements: Vec::new(),
            background_color: "#000000",
        })
    }

    #[test]
    fn get_returns_the_inserted_handle() {
        let cache = PatternCache::new(4);
        let stored = pattern();
        cache.insert("a".into(), Arc::clone(&stored));
        let found = cache.get("a").expect("entry should be present");
        assert!(Arc::ptr_eq(&stored, &found));
    }

    #[test]
    fn eviction_removes_exactly_the_oldest_inserted_key() {
        let cache = PatternCache::new(3);
        for key in ["a", "b", "c"] {
            cache.insert(key.into(), pattern());
        }
        // Reading "a" must not save it: eviction is insertion-order,
        // not recency-of-use.
        assert!(cache.get("a").is_some());
        cache.insert("d".into(), pattern());

        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
        assert!(cache.get("d").is_some());
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn reinserting_a_live_key_does_not_double_count_it() {
        let cache = PatternCache::new(2);
        cache.insert("a".into(), pattern());
        cache.insert("a".into(), pattern());
        cache.insert("b".into(), pattern());
        // If "a" occupied two insertion slots, inserting "c" would
        // evict "a" twice and leave a ghost order entry.
        cache.insert("c".into(), pattern());
        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn hit_and_miss_counters_track_lookups() {
        let cache = PatternCache::new(2);
        assert!(cache.get("a").is_none());
        cache.insert("a".into(), pattern());
        assert!(cache.get("a").is_some());
        assert!(cache.get("a").is_some());
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 2);
    }

    #[test]
    fn clear_empties_the_table() {
        let cache = PatternCache::new(2);
        cache.insert("a".into(), pattern());
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("a").is_none());
    }

    #[test]
    fn zero_capacity_never_stores() {
        let cache = PatternCache::new(0);
        cache.insert("a".into(), pattern());
        assert!(cache.get("a").is_none());
        assert!(cache.is_empty());
    }
}

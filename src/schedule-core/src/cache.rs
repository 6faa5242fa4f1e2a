use chrono::{DateTime, TimeDelta, Utc};
use std::{collections::HashMap, hash::Hash, time::Duration};

/// Key value cache where every entry expires `ttl` after it was inserted.
/// Time is always supplied by the caller.
#[derive(Debug, Clone)]
pub struct TimedCache<K, V> {
    ttl: TimeDelta,
    entries: HashMap<K, CacheEntry<V>>,
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: DateTime<Utc>,
}

impl<K: Eq + Hash, V> TimedCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: K, value: V, now: DateTime<Utc>) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                inserted_at: now,
            },
        );
    }

    pub fn is_valid(&self, key: &K, now: DateTime<Utc>) -> bool {
        self.entries
            .get(key)
            .is_some_and(|e| now - e.inserted_at <= self.ttl)
    }

    pub fn get(&self, key: &K, now: DateTime<Utc>) -> Option<&V> {
        if self.is_valid(key, now) {
            self.entries.get(key).map(|e| &e.value)
        } else {
            None
        }
    }

    pub fn invalidate(&mut self, key: &K) {
        self.entries.remove(key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

//! Time-bounded memoization of scrape results, one entry per keyword.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::models::ResultSet;

/// Immutable once created; `set` replaces the whole entry, never mutates
/// it in place.
struct CacheEntry {
    value: ResultSet,
    expires_at: Instant,
}

/// Keyword-keyed cache with lazy eviction.
///
/// Expired entries are removed on the first access past their expiry;
/// there is no background sweep. The map is unbounded: keyword cardinality
/// is expected to stay low. Two concurrent misses for the same keyword may
/// both fetch and both store, which is accepted since entries are
/// immutable-and-replaceable; the lock is never held across an await
/// point.
pub struct ResultCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResultCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key`, or `None` if absent or expired.
    /// An expired entry is evicted on the way out.
    pub fn get(&self, key: &str) -> Option<ResultSet> {
        self.get_at(key, Instant::now())
    }

    /// Stores `value` under `key`, overwriting any previous entry with a
    /// fresh expiry of now + ttl.
    pub fn set(&self, key: &str, value: ResultSet) {
        self.set_at(key, value, Instant::now());
    }

    fn get_at(&self, key: &str, now: Instant) -> Option<ResultSet> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if now >= entry.expires_at => {
                entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    fn set_at(&self, key: &str, value: ResultSet, now: Instant) {
        let entry = CacheEntry {
            value,
            expires_at: now + self.ttl,
        };
        self.entries.lock().unwrap().insert(key.to_string(), entry);
    }
}

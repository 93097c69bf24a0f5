//! Cache Store Module
//!
//! The expiring response cache: a key/value store of opaque byte payloads
//! guarded by a single mutex, reaped periodically by a background task.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::{PokedexError, Result};

// == Shared State ==
/// Map and counters behind the guard. Every access goes through the one
/// mutex; there is no lock-free fast path and no read/write-lock split.
#[derive(Debug)]
struct CacheInner {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

// == Cache ==
/// A time-bounded response cache keyed by resource identifier (typically a
/// request URL).
///
/// Cloning is cheap and yields another handle to the same underlying store,
/// which is how the background reaper and request-handling callers share it.
#[derive(Debug, Clone)]
pub struct Cache {
    inner: Arc<Mutex<CacheInner>>,
    interval: Duration,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache whose entries are retained for `interval`.
    ///
    /// The interval doubles as the reaper's sweep period (see
    /// `tasks::spawn_reaper`). A zero interval is a configuration error and
    /// is rejected here rather than producing a cache that never retains
    /// anything.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(PokedexError::InvalidInterval);
        }

        Ok(Self {
            inner: Arc::new(Mutex::new(CacheInner {
                entries: HashMap::new(),
                stats: CacheStats::new(),
            })),
            interval,
        })
    }

    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        // A panicked holder cannot leave the map half-updated (inserts and
        // removes are single HashMap calls), so a poisoned lock is safe to
        // recover and keeps sweeps from ever aborting.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Put ==
    /// Stores `payload` under `key`, stamping the current time.
    ///
    /// If the key already exists it is overwritten and its retention window
    /// restarts. Cannot fail.
    pub fn put(&self, key: impl Into<String>, payload: Vec<u8>) {
        let mut inner = self.lock();
        inner.entries.insert(key.into(), CacheEntry::new(payload));
        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
    }

    // == Get ==
    /// Returns the payload stored under `key`, or `None` if absent.
    ///
    /// Presence is checked at the instant of the call only; there is no
    /// staleness check on the read path. Staleness is purely the reaper's
    /// responsibility, so a read that races the next sweep can return an
    /// entry already past its interval.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut inner = self.lock();
        match inner.entries.get(key) {
            Some(entry) => {
                let payload = entry.payload.clone();
                inner.stats.record_hit();
                Some(payload)
            }
            None => {
                inner.stats.record_miss();
                None
            }
        }
    }

    // == Sweep ==
    /// Removes every entry whose age has reached the retention interval.
    ///
    /// One full O(n) pass under the guard; called by the background reaper
    /// on each tick. Returns the number of entries removed.
    pub fn sweep(&self) -> usize {
        let interval = self.interval;
        let mut inner = self.lock();

        let before = inner.entries.len();
        inner.entries.retain(|_, entry| !entry.is_stale(interval));
        let removed = before - inner.entries.len();

        inner.stats.record_reaped(removed);
        let len = inner.entries.len();
        inner.stats.set_total_entries(len);

        removed
    }

    // == Interval ==
    /// The retention window this cache was constructed with.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    fn test_cache() -> Cache {
        Cache::new(Duration::from_secs(300)).unwrap()
    }

    #[test]
    fn test_cache_new_rejects_zero_interval() {
        let result = Cache::new(Duration::ZERO);
        assert!(matches!(result, Err(PokedexError::InvalidInterval)));
    }

    #[test]
    fn test_cache_put_and_get() {
        let cache = test_cache();

        cache.put("https://pokeapi.co/api/v2/location-area/", vec![1, 2, 3]);
        let payload = cache.get("https://pokeapi.co/api/v2/location-area/");

        assert_eq!(payload, Some(vec![1, 2, 3]));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_get_unknown_key() {
        let cache = test_cache();

        assert_eq!(cache.get("nonexistent"), None);
    }

    #[test]
    fn test_cache_overwrite_wins() {
        let cache = test_cache();

        cache.put("key", b"first".to_vec());
        cache.put("key", b"second".to_vec());

        assert_eq!(cache.get("key"), Some(b"second".to_vec()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_overwrite_restarts_retention() {
        let cache = Cache::new(Duration::from_millis(100)).unwrap();

        cache.put("key", b"first".to_vec());
        sleep(Duration::from_millis(60));
        cache.put("key", b"second".to_vec());
        sleep(Duration::from_millis(60));

        // 120ms after the first put but only 60ms after the overwrite, so
        // the entry survives a sweep.
        assert_eq!(cache.sweep(), 0);
        assert_eq!(cache.get("key"), Some(b"second".to_vec()));
    }

    #[test]
    fn test_cache_sweep_removes_stale_entries() {
        let cache = Cache::new(Duration::from_millis(50)).unwrap();

        cache.put("a", vec![1]);
        cache.put("b", vec![2]);
        sleep(Duration::from_millis(60));
        cache.put("c", vec![3]);

        let removed = cache.sweep();

        assert_eq!(removed, 2);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("c"), Some(vec![3]));
    }

    #[test]
    fn test_cache_sweep_empty() {
        let cache = test_cache();
        assert_eq!(cache.sweep(), 0);
    }

    #[test]
    fn test_cache_get_does_not_check_staleness() {
        let cache = Cache::new(Duration::from_millis(10)).unwrap();

        cache.put("key", vec![9]);
        sleep(Duration::from_millis(30));

        // No sweep has run, so the stale entry is still served.
        assert_eq!(cache.get("key"), Some(vec![9]));
    }

    #[test]
    fn test_cache_stats() {
        let cache = test_cache();

        cache.put("key", vec![1]);
        cache.get("key");
        cache.get("missing");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_cache_clone_shares_store() {
        let cache = test_cache();
        let other = cache.clone();

        cache.put("key", vec![7]);

        assert_eq!(other.get("key"), Some(vec![7]));
    }

    #[test]
    fn test_cache_is_empty() {
        let cache = test_cache();
        assert!(cache.is_empty());

        cache.put("key", vec![]);
        assert!(!cache.is_empty());
    }
}

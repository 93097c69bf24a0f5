//! Cache Entry Module
//!
//! Defines the structure for individual cached response payloads.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached payload stamped with its insertion time.
///
/// The payload is opaque to the cache: it is stored and returned byte for
/// byte, never parsed or mutated.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw response body as stored by the caller
    pub payload: Vec<u8>,
    /// Monotonic timestamp captured at insertion time
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry, stamping the current time.
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived the retention interval.
    ///
    /// Boundary condition: an entry inserted at time `t` becomes eligible
    /// for removal at `t + interval` inclusive, so an age exactly equal to
    /// the interval counts as stale.
    pub fn is_stale(&self, interval: Duration) -> bool {
        self.created_at.elapsed() >= interval
    }

    // == Age ==
    /// Time elapsed since the entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(vec![1, 2, 3]);

        assert_eq!(entry.payload, vec![1, 2, 3]);
        assert!(!entry.is_stale(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_becomes_stale() {
        let entry = CacheEntry::new(b"payload".to_vec());

        assert!(!entry.is_stale(Duration::from_millis(50)));

        sleep(Duration::from_millis(60));

        assert!(entry.is_stale(Duration::from_millis(50)));
    }

    #[test]
    fn test_staleness_boundary_condition() {
        let entry = CacheEntry::new(vec![]);

        // Age >= interval is stale, so a zero interval is stale immediately.
        assert!(entry.is_stale(Duration::ZERO), "entry should be stale at boundary");
    }

    #[test]
    fn test_entry_age_grows() {
        let entry = CacheEntry::new(vec![42]);

        let first = entry.age();
        sleep(Duration::from_millis(10));
        let second = entry.age();

        assert!(second >= first);
    }
}

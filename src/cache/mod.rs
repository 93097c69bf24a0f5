//! Cache Module
//!
//! Provides the time-bounded, concurrency-safe response cache that sits in
//! front of the remote PokeAPI fetches.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::Cache;

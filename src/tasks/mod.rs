//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the client.
//!
//! # Tasks
//! - Reaper: removes cache entries older than the retention interval

mod reaper;

pub use reaper::spawn_reaper;

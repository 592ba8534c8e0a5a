//! Fetch Cache - An in-memory TTL memoization cache
//!
//! Memoizes the results of async fetch functions for a bounded time window,
//! with lazy expiry on read and a periodic background sweep.

pub mod cache;
pub mod config;
pub mod memo;
pub mod tasks;

pub use cache::{CacheEntry, CacheStats, CacheStore};
pub use config::{Config, ConfigError};
pub use memo::{FetchCache, FetchOptions};
pub use tasks::spawn_cleanup_task;

//! Cache Module
//!
//! Provides in-memory key-value storage with TTL expiration.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// TTL in milliseconds used when a write gives no explicit TTL
pub const DEFAULT_TTL_MS: u64 = 60_000;

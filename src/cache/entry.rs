//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Time-to-live in milliseconds
    pub ttl_ms: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_ms` - TTL in milliseconds
    pub fn new(value: V, ttl_ms: u64) -> Self {
        Self {
            value,
            inserted_at: current_timestamp_ms(),
            ttl_ms,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is visible while its age is at most
    /// `ttl_ms`, and expired strictly after that. An entry read exactly at
    /// `inserted_at + ttl_ms` is still a hit.
    ///
    /// # Returns
    /// - `true` if more than `ttl_ms` milliseconds have elapsed since insertion
    /// - `false` otherwise
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms().saturating_sub(self.inserted_at) > self.ttl_ms
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds.
    ///
    /// This method is useful for debugging and statistics purposes.
    ///
    /// # Returns
    /// - `0` if the entry has expired (TTL elapsed)
    /// - the remaining milliseconds otherwise
    pub fn ttl_remaining_ms(&self) -> u64 {
        let expires_at = self.inserted_at + self.ttl_ms;
        expires_at.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

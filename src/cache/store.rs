//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with TTL expiration.
//! There is no capacity bound and no eviction policy beyond TTL; memory is
//! reclaimed by lazy deletion on read and by the periodic sweep.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, DEFAULT_TTL_MS};

// == Cache Store ==
/// Main cache storage with TTL support.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL in milliseconds applied when a write gives no explicit TTL
    default_ttl_ms: u64,
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_MS)
    }
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new empty CacheStore.
    ///
    /// # Arguments
    /// * `default_ttl_ms` - TTL in milliseconds for entries stored without an
    ///   explicit TTL
    pub fn new(default_ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl_ms,
        }
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// Always succeeds. If the key already exists, the value is overwritten
    /// and the TTL window restarts from now.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl_ms` - Optional TTL in milliseconds (uses the default if None)
    pub fn set(&mut self, key: String, value: V, ttl_ms: Option<u64>) {
        let effective_ttl = ttl_ms.unwrap_or(self.default_ttl_ms);
        let entry = CacheEntry::new(value, effective_ttl);
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if found and not expired. An expired entry is
    /// removed as a side effect (lazy deletion) and reported absent. A
    /// missing or expired key is not an error, just `None`.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &str) -> Option<V> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                // Lazy deletion of the stale entry
                self.entries.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// # Arguments
    /// * `key` - The key to delete
    ///
    /// # Returns
    /// `true` if an entry was removed, `false` if the key was absent.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Clear ==
    /// Removes all entries unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// This is the memory-reclamation backstop for keys that are written once
    /// and never read again, which lazy deletion would never touch.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.stats.record_expiration();
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Contains Key ==
    /// Checks whether a key is physically present, expired or not.
    ///
    /// Unlike `get` this does not touch the entry or the statistics; it
    /// inspects raw storage, which is what sweep tests need.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Length ==
    /// Returns the current number of entries in the cache, including entries
    /// that are expired but not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_store_new() {
        let store: CacheStore<String> = CacheStore::new(60_000);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = CacheStore::new(60_000);

        store.set("key1".to_string(), "value1".to_string(), None);
        let value = store.get("key1");

        assert_eq!(value, Some("value1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store: CacheStore<String> = CacheStore::new(60_000);

        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_delete() {
        let mut store = CacheStore::new(60_000);

        store.set("key1".to_string(), "value1".to_string(), None);
        assert!(store.delete("key1"));

        assert!(store.is_empty());
        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_store_delete_nonexistent() {
        let mut store: CacheStore<String> = CacheStore::new(60_000);

        assert!(!store.delete("nonexistent"));
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(60_000);

        store.set("key1".to_string(), "value1".to_string(), None);
        store.set("key1".to_string(), "value2".to_string(), None);

        assert_eq!(store.get("key1"), Some("value2".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_restarts_ttl() {
        let mut store = CacheStore::new(60_000);

        store.set("key1".to_string(), "value1".to_string(), Some(200));
        sleep(Duration::from_millis(150));

        // Re-set with a fresh window
        store.set("key1".to_string(), "value2".to_string(), Some(200));
        sleep(Duration::from_millis(150));

        // 300ms after the first write, but only 150ms into the second window
        assert_eq!(store.get("key1"), Some("value2".to_string()));
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = CacheStore::new(60_000);

        // Scenario: set with 100ms TTL, read at 50ms and at 150ms
        store.set("a".to_string(), 1u32, Some(100));

        sleep(Duration::from_millis(50));
        assert_eq!(store.get("a"), Some(1));

        sleep(Duration::from_millis(100));
        assert_eq!(store.get("a"), None);
    }

    #[test]
    fn test_store_expired_get_removes_entry() {
        let mut store = CacheStore::new(60_000);

        store.set("key1".to_string(), "value1".to_string(), Some(10));
        sleep(Duration::from_millis(50));

        assert_eq!(store.get("key1"), None);
        // Lazy deletion physically removed the entry
        assert!(!store.contains_key("key1"));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_store_clear() {
        let mut store = CacheStore::new(60_000);

        store.set("key1".to_string(), "value1".to_string(), None);
        store.set("key2".to_string(), "value2".to_string(), None);

        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.get("key1"), None);
        assert_eq!(store.get("key2"), None);
    }

    #[test]
    fn test_store_default_ttl_applied() {
        let mut store = CacheStore::new(50);

        store.set("key1".to_string(), "value1".to_string(), None);
        assert_eq!(store.get("key1"), Some("value1".to_string()));

        sleep(Duration::from_millis(100));
        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(60_000);

        store.set("key1".to_string(), "value1".to_string(), None);
        store.get("key1"); // hit
        store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_store_stats_expiration_counted() {
        let mut store = CacheStore::new(60_000);

        store.set("key1".to_string(), "value1".to_string(), Some(10));
        sleep(Duration::from_millis(50));

        assert_eq!(store.get("key1"), None);

        let stats = store.stats();
        assert_eq!(stats.expirations, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 0);
    }

    #[test]
    fn test_store_cleanup_expired() {
        let mut store = CacheStore::new(60_000);

        store.set("key1".to_string(), "value1".to_string(), Some(10));
        store.set("key2".to_string(), "value2".to_string(), Some(60_000));

        // Wait for key1 to expire
        sleep(Duration::from_millis(50));

        let removed = store.cleanup_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(!store.contains_key("key1"));
        assert_eq!(store.get("key2"), Some("value2".to_string()));
    }

    #[test]
    fn test_store_cleanup_without_read() {
        let mut store = CacheStore::new(60_000);

        // Written once, never read: only the sweep can reclaim it
        store.set("write_only".to_string(), "value".to_string(), Some(10));
        sleep(Duration::from_millis(50));

        assert_eq!(store.len(), 1);
        let removed = store.cleanup_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_store_cleanup_nothing_expired() {
        let mut store = CacheStore::new(60_000);

        store.set("key1".to_string(), "value1".to_string(), None);

        let removed = store.cleanup_expired();
        assert_eq!(removed, 0);
        assert_eq!(store.len(), 1);
    }
}

//! Memoization Module
//!
//! Wraps the cache store in a shared async handle and provides the
//! `get_or_fetch` wrapper that memoizes the result of an async fetch
//! function for a bounded time window.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::config::Config;

// == Fetch Options ==
/// Per-call options for [`FetchCache::get_or_fetch`].
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// TTL in milliseconds for the stored result (uses the cache default if None)
    pub ttl_ms: Option<u64>,
    /// Skip the cache entirely: the fetch runs and its result is not stored
    pub bypass: bool,
}

impl FetchOptions {
    /// Options with an explicit TTL.
    pub fn ttl(ttl_ms: u64) -> Self {
        Self {
            ttl_ms: Some(ttl_ms),
            ..Self::default()
        }
    }

    /// Options that bypass the cache.
    pub fn bypass() -> Self {
        Self {
            bypass: true,
            ..Self::default()
        }
    }
}

// == Fetch Cache ==
/// Shared handle over a [`CacheStore`].
///
/// Cheap to clone; clones share the same underlying store. Construct one
/// explicitly and pass it to whatever code needs it, so each test and each
/// application owns its own instance and its own lifecycle.
#[derive(Debug)]
pub struct FetchCache<V> {
    store: Arc<RwLock<CacheStore<V>>>,
}

impl<V> Clone for FetchCache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<V: Clone> Default for FetchCache<V> {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl<V: Clone> FetchCache<V> {
    // == Constructors ==
    /// Creates a new empty cache with the given default TTL in milliseconds.
    pub fn new(default_ttl_ms: u64) -> Self {
        Self {
            store: Arc::new(RwLock::new(CacheStore::new(default_ttl_ms))),
        }
    }

    /// Creates a new empty cache from a [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_ttl_ms)
    }

    // == Store Operations ==
    /// Stores a value with optional TTL. Always succeeds.
    pub async fn set(&self, key: impl Into<String>, value: V, ttl_ms: Option<u64>) {
        self.store.write().await.set(key.into(), value, ttl_ms);
    }

    /// Retrieves a live value by key, or `None` if absent or expired.
    ///
    /// Takes the write lock because an expired entry is removed on read.
    pub async fn get(&self, key: &str) -> Option<V> {
        self.store.write().await.get(key)
    }

    /// Removes an entry by key; returns whether something was removed.
    pub async fn delete(&self, key: &str) -> bool {
        self.store.write().await.delete(key)
    }

    /// Removes all entries unconditionally.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    /// Sweeps all expired entries; returns the number removed.
    pub async fn cleanup(&self) -> usize {
        self.store.write().await.cleanup_expired()
    }

    /// Returns the number of stored entries, swept or not.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Get Or Fetch ==
    /// Memoizes the result of an async fetch function.
    ///
    /// On a cache hit the stored value is returned and `fetch` is never
    /// invoked. On a miss, `fetch` runs with no lock held; a successful
    /// result is stored under `key` and returned, a failure is propagated
    /// unchanged and nothing is stored. A failed fetch must never turn into
    /// a future stale success, so errors are never cached.
    ///
    /// With `options.bypass` set, `fetch` runs directly and the cache is
    /// neither read nor written.
    ///
    /// Two concurrent calls that both miss on the same key each invoke their
    /// own `fetch`; the later write wins. There is no in-flight
    /// de-duplication and no cancellation: a fetch whose caller lost
    /// interest still completes and still populates the cache on success.
    pub async fn get_or_fetch<F, Fut, E>(
        &self,
        key: &str,
        options: FetchOptions,
        fetch: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if options.bypass {
            debug!(key, "cache bypassed");
            return fetch().await;
        }

        if let Some(value) = self.get(key).await {
            debug!(key, "cache hit");
            return Ok(value);
        }

        debug!(key, "cache miss, fetching");
        match fetch().await {
            Ok(value) => {
                self.set(key, value.clone(), options.ttl_ms).await;
                Ok(value)
            }
            Err(err) => {
                warn!(key, "fetch failed, result not cached");
                Err(err)
            }
        }
    }
}

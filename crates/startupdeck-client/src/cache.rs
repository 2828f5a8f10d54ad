use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::Instant;

struct CacheEntry {
    value: Value,
    stored_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.stored_at.elapsed() > self.ttl
    }
}

/// TTL-based in-memory response cache keyed by request signature.
///
/// Entries are disposable snapshots, never authoritative state: freshness is
/// wall-clock elapsed time since `set`, with no validation against the
/// service. Expired entries are removed lazily when accessed; there is no
/// background sweep.
pub struct ResponseCache {
    store: Mutex<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }

    /// Store `value` under `key`, unconditionally overwriting any previous
    /// entry for that key.
    pub async fn set(&self, key: &str, value: Value, ttl: Duration) {
        let mut store = self.store.lock().await;
        store.insert(
            key.to_string(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Fresh value for `key`, or `None`. An expired hit deletes the entry
    /// before returning.
    pub async fn get(&self, key: &str) -> Option<Value> {
        let mut store = self.store.lock().await;
        match store.get(key) {
            Some(entry) if entry.is_expired() => {
                store.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    pub async fn delete(&self, key: &str) {
        self.store.lock().await.remove(key);
    }

    pub async fn clear(&self) {
        self.store.lock().await.clear();
    }

    /// Number of physically present entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Request signature used as the cache key: path plus the serialized body,
/// when one is present.
pub fn response_cache_key(path: &str, body: Option<&Value>) -> String {
    match body {
        Some(body) => format!("{path}:{body}"),
        None => path.to_string(),
    }
}

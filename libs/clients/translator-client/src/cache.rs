//! Stale-while-fresh query cache.
//!
//! A cached value is served as long as it is younger than the stale window;
//! after that the next read misses and the caller refetches.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Identifies a query by HTTP method and path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub method: &'static str,
    pub path: String,
}

impl QueryKey {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: "get",
            path: path.into(),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    fetched_at: Instant,
}

/// Shared cache of query results; clones share storage.
#[derive(Debug, Clone)]
pub struct QueryCache<V> {
    stale_time: Duration,
    entries: Arc<RwLock<HashMap<QueryKey, Entry<V>>>>,
}

impl<V: Clone> QueryCache<V> {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            stale_time,
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn stale_time(&self) -> Duration {
        self.stale_time
    }

    /// The cached value, only while it is still fresh.
    pub async fn get_fresh(&self, key: &QueryKey) -> Option<V> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.fetched_at.elapsed() < self.stale_time)
            .map(|entry| entry.value.clone())
    }

    pub async fn insert(&self, key: QueryKey, value: V) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            Entry {
                value,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Drop one entry so the next read refetches.
    pub async fn invalidate(&self, key: &QueryKey) -> bool {
        self.entries.write().await.remove(key).is_some()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_entry_is_fresh_inside_the_stale_window() {
        let cache = QueryCache::new(Duration::from_secs(300));
        let key = QueryKey::get("/translation/languages");

        cache.insert(key.clone(), 1).await;
        tokio::time::advance(Duration::from_secs(299)).await;

        assert_eq!(cache.get_fresh(&key).await, Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_goes_stale_at_the_window_edge() {
        let cache = QueryCache::new(Duration::from_secs(300));
        let key = QueryKey::get("/translation/languages");

        cache.insert(key.clone(), 1).await;
        tokio::time::advance(Duration::from_secs(300)).await;

        assert_eq!(cache.get_fresh(&key).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_insert_refreshes_the_timestamp() {
        let cache = QueryCache::new(Duration::from_secs(10));
        let key = QueryKey::get("/a");

        cache.insert(key.clone(), 1).await;
        tokio::time::advance(Duration::from_secs(8)).await;
        cache.insert(key.clone(), 2).await;
        tokio::time::advance(Duration::from_secs(8)).await;

        assert_eq!(cache.get_fresh(&key).await, Some(2));
    }

    #[tokio::test]
    async fn test_invalidate_and_clear() {
        let cache = QueryCache::new(Duration::from_secs(60));
        let a = QueryKey::get("/a");
        let b = QueryKey::get("/b");

        cache.insert(a.clone(), "a").await;
        cache.insert(b.clone(), "b").await;

        assert!(cache.invalidate(&a).await);
        assert!(!cache.invalidate(&a).await);
        assert_eq!(cache.get_fresh(&b).await, Some("b"));

        cache.clear().await;
        assert_eq!(cache.get_fresh(&b).await, None);
    }

    #[test]
    fn test_query_key_display() {
        assert_eq!(QueryKey::get("/x").to_string(), "get /x");
    }
}

//! Short lived in-memory cache for storefront responses.

use std::{collections::HashMap, sync::OnceLock, time::Duration};

use tokio::{sync::Mutex, time::Instant};

const DEFAULT_TTL_SECS: u64 = 60;

struct CachedResponse {
    body: String,
    inserted_at: Instant,
}

pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CachedResponse>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: Mutex::new(HashMap::new()) }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().await;
        let expired = match entries.get(key) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => return Some(entry.body.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            entries.remove(key);
        }
        None
    }

    pub async fn insert(&self, key: String, body: String) {
        let mut entries = self.entries.lock().await;
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.inserted_at.elapsed() < ttl);
        entries.insert(key, CachedResponse { body, inserted_at: Instant::now() });
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}

/// Process wide cache; TTL from `STOREFRONT_CACHE_TTL_SECS`.
pub fn response_cache() -> &'static ResponseCache {
    static CACHE: OnceLock<ResponseCache> = OnceLock::new();
    CACHE.get_or_init(|| {
        let ttl_secs = std::env::var("STOREFRONT_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TTL_SECS);
        ResponseCache::new(Duration::from_secs(ttl_secs))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn entries_expire_after_ttl() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert("k".to_string(), "body".to_string()).await;
        assert_eq!(cache.get("k").await.as_deref(), Some("body"));

        tokio::time::advance(Duration::from_secs(61)).await;
        assert_eq!(cache.get("k").await, None);
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn insert_evicts_stale_entries() {
        let cache = ResponseCache::new(Duration::from_secs(10));
        cache.insert("old".to_string(), "1".to_string()).await;
        tokio::time::advance(Duration::from_secs(11)).await;
        cache.insert("new".to_string(), "2".to_string()).await;
        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get("new").await.as_deref(), Some("2"));
    }
}

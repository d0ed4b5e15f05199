use crate::domain::models::{RecipeDetails, RecipeQuery, RecipeSummary};
use crate::error::Result;
use crate::providers::RecipeProvider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

struct CacheEntry<T> {
    stored_at: Instant,
    value: T,
}

/// Per-keyspace TTL map. Stale entries are evicted by the read that observes
/// them; nothing sweeps the map proactively, and there is no size bound
/// beyond expiry. The cache lives for one client session.
struct TtlCache<T> {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
}

impl<T: Clone> TtlCache<T> {
    fn new(ttl: Duration) -> Self {
        TtlCache {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() > self.ttl => {
                entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    fn store(&self, key: String, value: T) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            key,
            CacheEntry {
                stored_at: Instant::now(),
                value,
            },
        );
    }
}

/// Time-bounded memoization decorator over any provider. Hits are served
/// without touching the wrapped provider; misses call through and store the
/// result. Errors are never cached, and concurrent misses for the same key
/// are tolerated as redundant fetches rather than coalesced.
pub struct CachedProvider<P> {
    inner: P,
    search_cache: TtlCache<Vec<RecipeSummary>>,
    details_cache: TtlCache<RecipeDetails>,
}

impl<P> CachedProvider<P> {
    pub fn new(inner: P, ttl: Duration) -> Self {
        CachedProvider {
            inner,
            search_cache: TtlCache::new(ttl),
            details_cache: TtlCache::new(ttl),
        }
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: RecipeProvider> RecipeProvider for CachedProvider<P> {
    fn source_tag(&self) -> &'static str {
        self.inner.source_tag()
    }

    async fn search(&self, query: &RecipeQuery) -> Result<Vec<RecipeSummary>> {
        let key = query.cache_key();
        if let Some(hit) = self.search_cache.get(&key) {
            debug!(%key, "Search cache hit");
            return Ok(hit);
        }

        let results = self.inner.search(query).await?;
        self.search_cache.store(key, results.clone());
        Ok(results)
    }

    async fn details(&self, recipe_id: &str) -> Result<RecipeDetails> {
        let key = format!("details:{recipe_id}");
        if let Some(hit) = self.details_cache.get(&key) {
            debug!(%key, "Details cache hit");
            return Ok(hit);
        }

        let details = self.inner.details(recipe_id).await?;
        self.details_cache.store(key, details.clone());
        Ok(details)
    }
}

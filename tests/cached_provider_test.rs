use async_trait::async_trait;
use recipefinder::domain::models::{RecipeDetails, RecipeQuery, RecipeSummary};
use recipefinder::domain::RecipeQueryBuilder;
use recipefinder::providers::{CachedProvider, RecipeProvider};
use recipefinder::{Error, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

struct CountingProvider {
    search_calls: AtomicUsize,
    details_calls: AtomicUsize,
    fail: bool,
}

impl CountingProvider {
    fn new() -> Self {
        CountingProvider {
            search_calls: AtomicUsize::new(0),
            details_calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        CountingProvider {
            fail: true,
            ..Self::new()
        }
    }
}

#[async_trait]
impl RecipeProvider for CountingProvider {
    fn source_tag(&self) -> &'static str {
        "counting"
    }

    async fn search(&self, _query: &RecipeQuery) -> Result<Vec<RecipeSummary>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Transient("flaky upstream".to_string()));
        }
        Ok(vec![RecipeSummary {
            id: "counting:1".to_string(),
            title: "Stew".to_string(),
            image_url: None,
            source: "counting".to_string(),
            ingredients: vec!["salt".to_string()],
            description: String::new(),
        }])
    }

    async fn details(&self, recipe_id: &str) -> Result<RecipeDetails> {
        self.details_calls.fetch_add(1, Ordering::SeqCst);
        Ok(RecipeDetails {
            id: recipe_id.to_string(),
            title: "Stew".to_string(),
            instructions: "Simmer.".to_string(),
            ingredients: vec!["salt".to_string()],
            image_url: None,
            source: "counting".to_string(),
        })
    }
}

fn query() -> RecipeQuery {
    RecipeQueryBuilder::new().have("salt").build().unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_search_within_ttl_hits_inner_once() {
    let cached = CachedProvider::new(CountingProvider::new(), Duration::from_secs(600));

    let first = cached.search(&query()).await.unwrap();
    let second = cached.search(&query()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(cached.inner().search_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_search_after_ttl_refetches() {
    let cached = CachedProvider::new(CountingProvider::new(), Duration::from_secs(600));

    cached.search(&query()).await.unwrap();
    cached.search(&query()).await.unwrap();
    tokio::time::advance(Duration::from_secs(601)).await;
    cached.search(&query()).await.unwrap();

    assert_eq!(cached.inner().search_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_distinct_queries_do_not_share_entries() {
    let cached = CachedProvider::new(CountingProvider::new(), Duration::from_secs(600));

    cached.search(&query()).await.unwrap();
    let other = RecipeQueryBuilder::new().have("pepper").build().unwrap();
    cached.search(&other).await.unwrap();

    assert_eq!(cached.inner().search_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_details_cached_independently_of_search() {
    let cached = CachedProvider::new(CountingProvider::new(), Duration::from_secs(600));

    cached.details("counting:1").await.unwrap();
    cached.details("counting:1").await.unwrap();
    cached.details("counting:2").await.unwrap();

    assert_eq!(cached.inner().details_calls.load(Ordering::SeqCst), 2);
    assert_eq!(cached.inner().search_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_errors_are_not_cached() {
    let cached = CachedProvider::new(CountingProvider::failing(), Duration::from_secs(600));

    assert!(cached.search(&query()).await.is_err());
    assert!(cached.search(&query()).await.is_err());

    // Both calls reached the wrapped provider.
    assert_eq!(cached.inner().search_calls.load(Ordering::SeqCst), 2);
}

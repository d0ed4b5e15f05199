use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub providers: ProviderConfig,
    pub http: HttpConfig,
    pub cache: CacheConfig,
    pub results: ResultConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub mealdb_url: String,
    pub spoonacular_url: String,
    /// Absent or empty key disables the Spoonacular provider entirely.
    pub spoonacular_api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub ttl_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultConfig {
    /// Results requested from each provider per search call.
    pub provider_page_size: usize,
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let mealdb_url = std::env::var("MEALDB_URL")
            .unwrap_or_else(|_| "https://www.themealdb.com/api/json/v1/1".to_string());

        let spoonacular_url = std::env::var("SPOONACULAR_URL")
            .unwrap_or_else(|_| "https://api.spoonacular.com".to_string());

        let spoonacular_api_key = std::env::var("SPOONACULAR_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let timeout_seconds = std::env::var("HTTP_TIMEOUT")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid HTTP_TIMEOUT value".to_string()))?;

        let max_retries = std::env::var("HTTP_MAX_RETRIES")
            .unwrap_or_else(|_| "3".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid HTTP_MAX_RETRIES value".to_string()))?;

        let initial_backoff_ms = std::env::var("HTTP_BACKOFF_MS")
            .unwrap_or_else(|_| "500".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid HTTP_BACKOFF_MS value".to_string()))?;

        let ttl_seconds = std::env::var("CACHE_TTL")
            .unwrap_or_else(|_| "600".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid CACHE_TTL value".to_string()))?;

        let provider_page_size = std::env::var("PROVIDER_PAGE_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PROVIDER_PAGE_SIZE value".to_string()))?;

        let default_limit = std::env::var("DEFAULT_LIMIT")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid DEFAULT_LIMIT value".to_string()))?;

        let max_limit = std::env::var("MAX_LIMIT")
            .unwrap_or_else(|_| "25".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_LIMIT value".to_string()))?;

        Ok(Settings {
            providers: ProviderConfig {
                mealdb_url,
                spoonacular_url,
                spoonacular_api_key,
            },
            http: HttpConfig {
                timeout_seconds,
                max_retries,
                initial_backoff_ms,
            },
            cache: CacheConfig { ttl_seconds },
            results: ResultConfig {
                provider_page_size,
                default_limit,
                max_limit,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for url in [&self.providers.mealdb_url, &self.providers.spoonacular_url] {
            let parsed = Url::parse(url)?;
            match parsed.scheme() {
                "http" | "https" => {}
                other => {
                    return Err(Error::Config(format!(
                        "Provider URL must use http or https, got '{other}': {url}"
                    )));
                }
            }
        }

        if self.http.timeout_seconds == 0 {
            return Err(Error::Config("HTTP timeout must be non-zero".to_string()));
        }

        if self.results.default_limit == 0 || self.results.max_limit == 0 {
            return Err(Error::Config("Result limits must be non-zero".to_string()));
        }

        if self.results.default_limit > self.results.max_limit {
            return Err(Error::Config(format!(
                "DEFAULT_LIMIT ({}) exceeds MAX_LIMIT ({})",
                self.results.default_limit, self.results.max_limit
            )));
        }

        if self.cache.ttl_seconds == 0 {
            return Err(Error::Config("Cache TTL must be non-zero".to_string()));
        }

        Ok(())
    }
}

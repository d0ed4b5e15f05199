use crate::config::HttpConfig;
use crate::error::{Error, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Status codes worth retrying: rate limiting and upstream hiccups.
const TRANSIENT_STATUS: [StatusCode; 5] = [
    StatusCode::TOO_MANY_REQUESTS,
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];

/// JSON GET helper with retry logic and exponential backoff. All provider
/// traffic is idempotent reads, so every request is safe to retry.
pub struct Fetcher {
    client: Client,
    max_retries: u32,
    initial_backoff: Duration,
}

impl Fetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("RecipeFinder/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(Error::Http)?;

        Ok(Fetcher {
            client,
            max_retries: config.max_retries,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
        })
    }

    /// GET `url` with `params` and decode the JSON body into `T`. Transient
    /// failures are retried up to the configured count; the final error is
    /// returned once retries are exhausted.
    pub async fn get_json<T>(&self, url: &str, params: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut retries = 0;
        let mut backoff = self.initial_backoff;

        loop {
            match self.get_once(url, params).await {
                Ok(body) => return Ok(body),
                Err(e) if retries < self.max_retries && e.is_transient() => {
                    retries += 1;
                    warn!(
                        "Request failed (attempt {}/{}): {}. Retrying in {:?}",
                        retries, self.max_retries, e, backoff
                    );
                    sleep(backoff).await;
                    backoff *= 2;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_once<T>(&self, url: &str, params: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching: {}", url);

        let response = self.client.get(url).query(params).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!("{url} returned 404")));
        }

        if !status.is_success() {
            if TRANSIENT_STATUS.contains(&status) {
                return Err(Error::Transient(format!("HTTP {status} from {url}")));
            }
            return Err(Error::Status(status));
        }

        response.json::<T>().await.map_err(Error::Http)
    }
}

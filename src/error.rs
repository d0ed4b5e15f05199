use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transient upstream error: {0}")]
    Transient(String),

    #[error("Upstream returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid recipe id '{0}': expected '<source>:<id>', e.g. 'mealdb:52795'")]
    InvalidId(String),

    #[error("No provider registered for source '{0}'")]
    UnknownProvider(String),

    #[error("Unknown ranking strategy '{0}'")]
    UnknownStrategy(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether a retry could plausibly change the outcome. Only transport
    /// failures and the transient status codes mapped by the fetcher qualify;
    /// validation, routing, and not-found errors never do.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Transient(_) => true,
            Error::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            _ => false,
        }
    }
}

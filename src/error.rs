use thiserror::Error;

/// Error type for a single request against the catalog service.
///
/// - `Request` — transport errors (wraps `reqwest::Error`)
/// - `Timeout` — the request exceeded the configured timeout
/// - `Status` — any non-2xx status code
/// - `Decode` — the body was not the expected JSON document
/// - `InvalidBaseUrl` — the configured base address is not an http(s) URL
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("API error {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            let url = err
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "<unknown>".into());
            return NetworkError::Timeout { url };
        }
        NetworkError::Request(err)
    }
}

/// Aggregate failure of a catalog load.
///
/// The message is the same whether the listing or one of the detail
/// requests failed; the underlying [`NetworkError`] is kept as the source.
#[derive(Debug, Error)]
#[error("Failed to fetch Pokemon. Please try again.")]
pub struct LoadError {
    #[from]
    source: NetworkError,
}

impl LoadError {
    /// The request failure that aborted the load.
    pub fn network_error(&self) -> &NetworkError {
        &self.source
    }
}

/// Invalid configuration value read from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, NetworkError>;

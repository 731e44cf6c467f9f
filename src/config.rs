use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Number of entries fetched per load (the first generation).
pub const DEFAULT_FETCH_COUNT: u32 = 151;

pub const ENV_BASE_URL: &str = "POKEDEX_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "POKEDEX_TIMEOUT_SECS";
pub const ENV_FETCH_COUNT: &str = "POKEDEX_FETCH_COUNT";

/// Connection and catalog settings shared by the client and the views.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API root, e.g. `https://pokeapi.co/api/v2`
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// How many listing entries a catalog load requests.
    pub fetch_count: u32,
    /// Upper id bound used by detail navigation when no navigation
    /// context is available.
    pub fallback_catalog_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            fetch_count: DEFAULT_FETCH_COUNT,
            fallback_catalog_size: DEFAULT_FETCH_COUNT,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `POKEDEX_BASE_URL`, `POKEDEX_TIMEOUT_SECS`
    /// and `POKEDEX_FETCH_COUNT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            config.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout = Duration::from_secs(parse_positive(ENV_TIMEOUT_SECS, &raw)?.into());
        }
        if let Some(raw) = lookup(ENV_FETCH_COUNT) {
            config = config.with_fetch_count(parse_positive(ENV_FETCH_COUNT, &raw)?);
        }
        Ok(config)
    }

    /// Set the fetch count; the fallback navigation bound follows it.
    pub fn with_fetch_count(mut self, count: u32) -> Self {
        self.fetch_count = count;
        self.fallback_catalog_size = count;
        self
    }
}

fn parse_positive(var: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: raw.to_string(),
        }),
    }
}

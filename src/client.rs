use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{NetworkError, Result};
use crate::models::*;

// ---------------------------------------------------------------------------
// Internal response handling
// ---------------------------------------------------------------------------

/// Shared logic for building a configured [`Client`] and making requests.
struct BaseClient {
    base_url: String,
    http: Client,
}

impl BaseClient {
    fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(NetworkError::InvalidBaseUrl(config.base_url.clone()));
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.to_string(),
            http,
        })
    }

    /// Build the full URL for a given endpoint.
    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// Map the status code, then parse the body as `T`.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let url = response.url().to_string();
        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| NetworkError::Decode {
            url,
            message: e.to_string(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.url(endpoint);
        debug!(%url, "GET");
        let resp = self.http.get(&url).query(query).send().await?;
        self.handle_response(resp).await
    }
}

// ---------------------------------------------------------------------------
// Public client
// ---------------------------------------------------------------------------

/// Main entry point for talking to the PokeAPI.
///
/// ```no_run
/// # async fn run() -> Result<(), pokedex_catalog::NetworkError> {
/// use pokedex_catalog::{ClientConfig, PokeClient};
///
/// let client = PokeClient::new(&ClientConfig::default())?;
/// let pikachu = client.pokemon().get("pikachu").await?;
/// println!("#{} {}", pikachu.id, pikachu.name);
/// # Ok(())
/// # }
/// ```
pub struct PokeClient {
    base: BaseClient,
}

impl PokeClient {
    /// Create a new client from the base address and timeout in `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            base: BaseClient::new(config)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base.base_url
    }

    pub fn pokemon(&self) -> PokemonClient<'_> {
        PokemonClient { base: &self.base }
    }
}

// ---- Pokemon --------------------------------------------------------------

pub struct PokemonClient<'a> {
    base: &'a BaseClient,
}

impl PokemonClient<'_> {
    /// List the first `limit` entries of the catalog.
    pub async fn list(&self, limit: u32) -> Result<Vec<ListingEntry>> {
        let resp: ListResponse = self
            .base
            .get("/pokemon", &[("limit", limit.to_string())])
            .await?;
        Ok(resp.results)
    }

    /// Get a single entry by name or numeric id.
    pub async fn get(&self, key: &str) -> Result<CatalogEntry> {
        let endpoint = format!("/pokemon/{key}");
        let raw: PokemonResponse = self.base.get(&endpoint, &[]).await?;
        raw.into_entry().map_err(|message| NetworkError::Decode {
            url: self.base.url(&endpoint),
            message,
        })
    }
}

// ---------------------------------------------------------------------------
// Loader seam
// ---------------------------------------------------------------------------

/// Where the catalog loader gets its records from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Listing of the first `limit` entries.
    async fn list(&self, limit: u32) -> Result<Vec<ListingEntry>>;

    /// Full record for a name or numeric id.
    async fn entry(&self, key: &str) -> Result<CatalogEntry>;
}

#[async_trait]
impl CatalogSource for PokeClient {
    async fn list(&self, limit: u32) -> Result<Vec<ListingEntry>> {
        self.pokemon().list(limit).await
    }

    async fn entry(&self, key: &str) -> Result<CatalogEntry> {
        self.pokemon().get(key).await
    }
}

//! Catalog loading: one listing request, then every detail request at once.

use futures_util::future::try_join_all;
use tracing::{debug, info, instrument, warn};

use crate::client::CatalogSource;
use crate::error::{LoadError, NetworkError};
use crate::models::CatalogEntry;

/// Message shown when the detail view cannot fetch its entry.
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to fetch Pokemon details";

/// All entries fetched by one load, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    entries: Vec<CatalogEntry>,
}

impl CatalogSnapshot {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: u32) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a CatalogSnapshot {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Fetch the first `count` entries with full detail.
///
/// Detail requests run concurrently without a cap. The first failure
/// aborts the load and no partial snapshot is returned.
#[instrument(skip_all, fields(count = count))]
pub async fn load_catalog<S>(source: &S, count: u32) -> Result<CatalogSnapshot, LoadError>
where
    S: CatalogSource + ?Sized,
{
    let result = async {
        let listing = source.list(count).await?;
        debug!(listed = listing.len(), "fetching details");
        try_join_all(listing.iter().map(|item| source.entry(&item.name))).await
    }
    .await;

    match result {
        Ok(entries) => {
            info!(loaded = entries.len(), "catalog loaded");
            Ok(CatalogSnapshot::new(entries))
        }
        Err(err) => {
            warn!(error = %err, "catalog load failed");
            Err(LoadError::from(err))
        }
    }
}

/// Fetch a single entry for the detail view.
pub async fn fetch_entry<S>(source: &S, id: u32) -> Result<CatalogEntry, NetworkError>
where
    S: CatalogSource + ?Sized,
{
    source.entry(&id.to_string()).await.inspect_err(|err| {
        warn!(id, error = %err, "detail fetch failed");
    })
}

/// What a view shows while, or after, loading the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded(CatalogSnapshot),
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn snapshot(&self) -> Option<&CatalogSnapshot> {
        match self {
            LoadState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl From<Result<CatalogSnapshot, LoadError>> for LoadState {
    fn from(result: Result<CatalogSnapshot, LoadError>) -> Self {
        match result {
            Ok(snapshot) => LoadState::Loaded(snapshot),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }
}

/// Owns a source, a fetch count and the current [`LoadState`].
pub struct CatalogLoader<S> {
    source: S,
    count: u32,
    state: LoadState,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S, count: u32) -> Self {
        Self {
            source,
            count,
            state: LoadState::Loading,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Run a fresh load. The previous snapshot is dropped, never merged.
    pub async fn reload(&mut self) -> &LoadState {
        self.state = LoadState::Loading;
        self.state = load_catalog(&self.source, self.count).await.into();
        &self.state
    }
}

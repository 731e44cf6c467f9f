//! PokeAPI catalog client and view logic for Rust.
//!
//! Fetches a bounded catalog from the [PokeAPI](https://pokeapi.co) and
//! shapes it for three views: a searchable, sortable list, a gallery
//! filtered by type, and a detail page with previous/next navigation.
//! Everything a view needs is returned as plain data; drawing it is up to
//! the caller.
//!
//! # Quick Start
//!
//! ```no_run
//! use pokedex_catalog::{load_catalog, ClientConfig, ListQuery, PokeClient, SortKey};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::default();
//! let client = PokeClient::new(&config)?;
//! let catalog = load_catalog(&client, config.fetch_count).await?;
//!
//! let query = ListQuery::default().with_search("saur").with_sort_key(SortKey::Weight);
//! for entry in query.apply(catalog.entries()) {
//!     println!("{}: {}", entry.id, entry.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod gallery;
pub mod list_view;
pub mod loader;
pub mod models;
pub mod navigation;

// Re-export the main public types at the crate root for convenience.
pub use client::{CatalogSource, PokeClient, PokemonClient};
pub use config::ClientConfig;
pub use error::{ConfigError, LoadError, NetworkError};
pub use format::format_name;
pub use gallery::TypeFilter;
pub use list_view::{ListQuery, SortDirection, SortKey};
pub use loader::{fetch_entry, load_catalog, CatalogLoader, CatalogSnapshot, LoadState};
pub use models::{Ability, CatalogEntry, ListingEntry, Stat, TypeTag};
pub use navigation::{neighbors, NavigationContext, Neighbors, Provenance};

//! Integration tests against the live PokeAPI.
//!
//! These hit the network and are ignored by default. Point
//! `POKEDEX_BASE_URL` at a mirror to run them elsewhere.
//!
//! Run with:
//!
//! ```bash
//! cargo test -- --ignored --nocapture
//! ```

use pokedex_catalog::{
    fetch_entry, format_name, load_catalog, ClientConfig, ListQuery, NetworkError, PokeClient,
    SortKey, TypeFilter, TypeTag,
};

fn client() -> (PokeClient, ClientConfig) {
    let config = ClientConfig::from_env().unwrap();
    (PokeClient::new(&config).unwrap(), config)
}

// ---------------------------------------------------------------------------
// 1. Listing
// ---------------------------------------------------------------------------

#[tokio::test]
#[ignore = "hits the network"]
async fn test_list_first_entries() {
    let (client, _) = client();
    let listing = client.pokemon().list(5).await.unwrap();
    assert_eq!(listing.len(), 5);
    assert_eq!(listing[0].name, "bulbasaur");
    println!("[1] Listed {} entries", listing.len());
}

// ---------------------------------------------------------------------------
// 2. Detail
// ---------------------------------------------------------------------------

#[tokio::test]
#[ignore = "hits the network"]
async fn test_get_entry() {
    let (client, _) = client();
    let mime = client.pokemon().get("mr-mime").await.unwrap();
    assert_eq!(mime.id, 122);
    assert_eq!(format_name(&mime.name), "Mr Mime");
    assert!(mime.has_type(TypeTag::Psychic));
    println!("[2] {} has {} moves", mime.name, mime.moves.len());

    let by_id = fetch_entry(&client, 25).await.unwrap();
    assert_eq!(by_id.name, "pikachu");
}

#[tokio::test]
#[ignore = "hits the network"]
async fn test_missing_entry_is_404() {
    let (client, _) = client();
    let err = client.pokemon().get("not-a-pokemon").await.unwrap_err();
    assert!(matches!(err, NetworkError::Status { status: 404, .. }), "{err}");
}

// ---------------------------------------------------------------------------
// 3. Catalog load + views
// ---------------------------------------------------------------------------

#[tokio::test]
#[ignore = "hits the network"]
async fn test_load_and_browse() {
    let (client, _) = client();
    let catalog = load_catalog(&client, 20).await.unwrap();
    assert_eq!(catalog.len(), 20);
    let ids: Vec<u32> = catalog.iter().map(|e| e.id).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());

    let heaviest = ListQuery::default()
        .with_sort_key(SortKey::Weight)
        .toggled_direction();
    let top = heaviest.apply(catalog.entries());
    println!("[3] Heaviest of the first 20: {}", top[0].name);

    let fire: TypeFilter = [TypeTag::Fire].into_iter().collect();
    let ctx = fire.navigation_context(catalog.entries());
    assert_eq!(ctx.ids(), &[4, 5, 6][..]);
}

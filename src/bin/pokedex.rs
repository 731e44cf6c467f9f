//! Pokedex command-line viewer
//!
//! Prints the list, gallery and detail views of the PokeAPI catalog.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pokedex_catalog::format::{
    format_dex_number, format_height, format_weight, humanize_label, stat_percentage,
};
use pokedex_catalog::loader::DETAIL_ERROR_MESSAGE;
use pokedex_catalog::{
    fetch_entry, format_name, load_catalog, neighbors, CatalogEntry, CatalogSnapshot,
    ClientConfig, ListQuery, NavigationContext, PokeClient, Provenance, SortDirection, SortKey,
    TypeFilter, TypeTag,
};

/// Moves listed on the detail view before the rest is summarized.
const MOVES_SHOWN: usize = 50;
const STAT_BAR_WIDTH: usize = 20;

// ============================================================================
// Command line
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse the PokeAPI catalog from the terminal")]
struct Cli {
    /// API root (overrides POKEDEX_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Per-request timeout in seconds (overrides POKEDEX_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,
    /// Number of entries to load (overrides POKEDEX_FETCH_COUNT)
    #[arg(long, global = true)]
    count: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Searchable, sortable list
    List(ListArgs),
    /// Catalog filtered by type
    Gallery(GalleryArgs),
    /// One entry with previous/next navigation
    Show(ShowArgs),
    /// Type tags accepted by `gallery --type`
    Types,
}

#[derive(Args, Debug, Clone, Default)]
struct ListArgs {
    /// Case-insensitive name search
    #[arg(long, default_value = "")]
    search: String,
    /// id, name, height or weight
    #[arg(long, default_value_t = SortKey::Id)]
    sort: SortKey,
    /// Sort descending
    #[arg(long)]
    desc: bool,
}

impl ListArgs {
    fn query(&self) -> ListQuery {
        let direction = if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        ListQuery::new(self.search.clone(), self.sort, direction)
    }
}

#[derive(Args, Debug, Clone, Default)]
struct GalleryArgs {
    /// Type to include; repeat for several (any match passes)
    #[arg(long = "type")]
    types: Vec<TypeTag>,
}

impl GalleryArgs {
    fn filter(&self) -> TypeFilter {
        self.types.iter().copied().collect()
    }
}

#[derive(Args, Debug)]
struct ShowArgs {
    id: u32,
    /// View whose order drives previous/next (list or gallery)
    #[arg(long)]
    from: Option<Provenance>,
    #[command(flatten)]
    list: ListArgs,
    #[command(flatten)]
    gallery: GalleryArgs,
}

// ============================================================================
// Views
// ============================================================================

fn entry_line(entry: &CatalogEntry) -> String {
    let types = entry
        .types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join("/");
    format!(
        "{:>5}  {:<16} {:<16} {:>7} {:>9}",
        format_dex_number(entry.id),
        format_name(&entry.name),
        types,
        format_height(entry.height),
        format_weight(entry.weight),
    )
}

fn print_entries(entries: &[&CatalogEntry], empty_message: &str) {
    if entries.is_empty() {
        println!("{empty_message}");
        return;
    }
    for entry in entries {
        println!("{}", entry_line(entry));
    }
}

fn print_list(catalog: &CatalogSnapshot, args: &ListArgs) {
    let query = args.query();
    let entries = query.apply(catalog.entries());
    println!(
        "Showing {} Pokemon (sorted by {} {})",
        entries.len(),
        query.sort_key,
        query.sort_direction
    );
    print_entries(&entries, "No Pokemon match your search.");
}

fn print_gallery(catalog: &CatalogSnapshot, args: &GalleryArgs) {
    let filter = args.filter();
    let entries = filter.apply(catalog.entries());
    if filter.is_active() {
        println!(
            "Showing {} Pokemon (filtered by: {})",
            entries.len(),
            filter.summary()
        );
    } else {
        println!("Showing {} Pokemon", entries.len());
    }
    print_entries(
        &entries,
        "No Pokemon found with the selected types. Try different filters!",
    );
}

fn print_detail(entry: &CatalogEntry, context: Option<&NavigationContext>, fallback_max: u32) {
    let nav = neighbors(context, entry.id, fallback_max);
    let link = |target: Option<u32>| match target {
        Some(id) => format_dex_number(id),
        None => "-".to_string(),
    };
    println!("Previous: {}    Next: {}", link(nav.previous), link(nav.next));
    println!();

    println!("{} {}", format_name(&entry.name), format_dex_number(entry.id));
    let types: Vec<&str> = entry.types.iter().map(|t| t.as_str()).collect();
    println!("Types:    {}", types.join(", "));
    println!("Height:   {}", format_height(entry.height));
    println!("Weight:   {}", format_weight(entry.weight));
    println!("Base Exp: {}", entry.base_experience);
    if let Some(sprite) = &entry.sprite {
        println!("Sprite:   {sprite}");
    }

    println!();
    println!("Base Stats");
    for stat in &entry.stats {
        let filled = (stat_percentage(stat.base) / 100.0 * STAT_BAR_WIDTH as f64).round() as usize;
        println!(
            "  {:<16} {:>3} {}",
            humanize_label(&stat.name),
            stat.base,
            "#".repeat(filled)
        );
    }

    println!();
    println!("Abilities");
    for ability in &entry.abilities {
        let hidden = if ability.hidden { " (Hidden)" } else { "" };
        println!("  {}{hidden}", humanize_label(&ability.name));
    }

    println!();
    println!("Moves ({})", entry.moves.len());
    let shown: Vec<String> = entry
        .moves
        .iter()
        .take(MOVES_SHOWN)
        .map(|m| humanize_label(m))
        .collect();
    if !shown.is_empty() {
        println!("  {}", shown.join(", "));
    }
    if entry.moves.len() > MOVES_SHOWN {
        println!("  ... and {} more", entry.moves.len() - MOVES_SHOWN);
    }
}

// ============================================================================
// Main Application
// ============================================================================

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn config_from(cli: &Cli) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env().context("invalid environment configuration")?;
    if let Some(url) = &cli.base_url {
        config.base_url = url.clone();
    }
    if let Some(secs) = cli.timeout {
        config.timeout = Duration::from_secs(secs);
    }
    if let Some(count) = cli.count {
        config = config.with_fetch_count(count);
    }
    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    let config = config_from(&cli)?;
    let client = PokeClient::new(&config).context("failed to create client")?;

    match &cli.command {
        Command::Types => {
            for tag in TypeTag::ALL {
                println!("{tag}");
            }
        }
        Command::List(args) => {
            let catalog = load_catalog(&client, config.fetch_count).await?;
            print_list(&catalog, args);
        }
        Command::Gallery(args) => {
            let catalog = load_catalog(&client, config.fetch_count).await?;
            print_gallery(&catalog, args);
        }
        Command::Show(args) => {
            let context = match args.from {
                Some(source) => {
                    let catalog = load_catalog(&client, config.fetch_count).await?;
                    Some(match source {
                        Provenance::List => args.list.query().navigation_context(catalog.entries()),
                        Provenance::Gallery => {
                            args.gallery.filter().navigation_context(catalog.entries())
                        }
                    })
                }
                None => None,
            };
            let entry = fetch_entry(&client, args.id)
                .await
                .context(DETAIL_ERROR_MESSAGE)?;
            print_detail(&entry, context.as_ref(), config.fallback_catalog_size);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

//! Catalogue entry-point: seeds the in-memory store and prints one listing
//! page as JSON.

use std::ffi::OsString;
use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use game_catalogue::domain::ports::{CatalogueQuery, ListEntriesRequest};
use game_catalogue::domain::{CatalogueQueryService, TagId};
use game_catalogue::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use game_catalogue::listing::{CatalogueListing, listing_url};
use game_catalogue::outbound::InMemoryCatalogueRepository;
use game_catalogue::settings::CatalogueSettings;

/// Query the example video game catalogue.
#[derive(Debug, Parser)]
#[command(name = "catalogue", version)]
struct Args {
    /// Case-insensitive title search.
    #[arg(long)]
    search: Option<String>,
    /// Tag id to filter by; repeat for several tags.
    #[arg(long = "tag", value_name = "TAG_ID")]
    tags: Vec<u64>,
    /// 1-indexed page number.
    #[arg(long)]
    page: Option<usize>,
    /// Base URL used for navigation links.
    #[arg(long, default_value = "http://localhost/games")]
    base_url: Url,
}

impl Args {
    fn to_request(&self) -> ListEntriesRequest {
        ListEntriesRequest {
            search: self.search.clone(),
            tag_ids: self.tags.iter().copied().map(TagId::new).collect(),
            page: self.page,
        }
    }
}

/// Layered settings are read from the environment and configuration files
/// only; the command line belongs to [`Args`].
fn program_name() -> [OsString; 1] {
    [OsString::from("catalogue")]
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = Args::parse();
    let settings = CatalogueSettings::load_from_iter(program_name())
        .map_err(|err| eyre!("failed to load catalogue settings: {err}"))?;
    let example_settings = ExampleDataSettings::load_from_iter(program_name())
        .map_err(|err| eyre!("failed to load example data settings: {err}"))?;

    let repository = Arc::new(InMemoryCatalogueRepository::new());
    seed_example_data_on_startup(&example_settings, Arc::clone(&repository))
        .await
        .wrap_err("example data seeding failed")?;

    let page_size = settings.page_size().wrap_err("invalid page size")?;
    let service = CatalogueQueryService::new(repository)
        .with_page_size(page_size)
        .wrap_err("invalid page size")?;

    let request = args.to_request();
    let request_url = listing_url(&args.base_url, &request);
    let response = service
        .list_entries(request)
        .await
        .wrap_err("catalogue listing failed")?;
    let listing = CatalogueListing::new(response, &request_url);
    info!(
        total_items = listing.meta.total_items(),
        page = listing.meta.page(),
        "catalogue page rendered"
    );

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &listing)?;
    writeln!(stdout)?;
    Ok(())
}

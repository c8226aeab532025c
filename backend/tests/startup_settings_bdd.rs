//! Behavioural tests for the binary's startup path.
//!
//! Settings are loaded through OrthoConfig exactly as `main` loads them, with
//! only the program name on the command line, then the catalogue is seeded and
//! listed.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

mod support;

use std::ffi::OsString;
use std::sync::Arc;

use env_lock::lock_env;
use game_catalogue::domain::CatalogueQueryService;
use game_catalogue::domain::ports::{CatalogueQuery, ListEntriesRequest, ListEntriesResponse};
use game_catalogue::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use game_catalogue::outbound::InMemoryCatalogueRepository;
use game_catalogue::settings::CatalogueSettings;
use ortho_config::OrthoConfig;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use support::RuntimeHandle;

const SETTINGS_VARIABLES: [&str; 5] = [
    "CATALOGUE_PAGE_SIZE",
    "EXAMPLE_DATA_ENABLED",
    "EXAMPLE_DATA_SEED_NAME",
    "EXAMPLE_DATA_GAME_COUNT",
    "EXAMPLE_DATA_REGISTRY_PATH",
];

#[derive(Default, ScenarioState)]
struct StartupWorld {
    overrides: Slot<Vec<(String, String)>>,
    response: Slot<ListEntriesResponse>,
}

impl StartupWorld {
    fn overrides(&self) -> Vec<(String, String)> {
        self.overrides.get().unwrap_or_default()
    }

    fn response(&self) -> ListEntriesResponse {
        self.response.get().expect("catalogue should have started")
    }

    fn load_settings(&self) -> (CatalogueSettings, ExampleDataSettings) {
        let overrides = self.overrides();
        let variables = SETTINGS_VARIABLES.map(|name| {
            let value = overrides
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone());
            (name, value)
        });
        let _guard = lock_env(variables);
        let program = || [OsString::from("catalogue")];
        let catalogue = CatalogueSettings::load_from_iter(program())
            .expect("catalogue settings should load");
        let example_data = ExampleDataSettings::load_from_iter(program())
            .expect("example data settings should load");
        (catalogue, example_data)
    }
}

#[fixture]
fn world() -> StartupWorld {
    StartupWorld::default()
}

#[given("a clean configuration environment")]
fn a_clean_configuration_environment(world: &StartupWorld) {
    world.overrides.set(Vec::new());
}

#[given("the environment sets \"{name}\" to \"{value}\"")]
fn the_environment_sets(world: &StartupWorld, name: String, value: String) {
    let mut overrides = world.overrides();
    overrides.push((name, value));
    world.overrides.set(overrides);
}

#[when("the catalogue starts with its layered settings")]
fn the_catalogue_starts(world: &StartupWorld) {
    let (catalogue_settings, example_data_settings) = world.load_settings();
    let page_size = catalogue_settings
        .page_size()
        .expect("page size should be valid");

    let runtime = RuntimeHandle::new();
    let repository = Arc::new(InMemoryCatalogueRepository::new());
    runtime
        .block_on(seed_example_data_on_startup(
            &example_data_settings,
            Arc::clone(&repository),
        ))
        .expect("startup seeding succeeds");
    let service = CatalogueQueryService::new(repository)
        .with_page_size(page_size)
        .expect("page size accepted");
    let response = runtime
        .block_on(service.list_entries(ListEntriesRequest::default()))
        .expect("listing succeeds");
    world.response.set(response);
}

#[then("the page holds {count:usize} entries")]
fn the_page_holds(world: &StartupWorld, count: usize) {
    assert_eq!(world.response().page.len(), count);
}

#[then("the listing reports {total:usize} matches over {pages:usize} pages")]
fn the_listing_reports(world: &StartupWorld, total: usize, pages: usize) {
    let response = world.response();
    assert_eq!(response.page.meta().total_items(), total);
    assert_eq!(response.page.meta().total_pages(), pages);
}

#[scenario(
    path = "tests/features/startup_settings.feature",
    name = "Default settings list the bundled catalogue"
)]
fn default_settings(world: StartupWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/startup_settings.feature",
    name = "Environment variables reach both settings groups"
)]
fn environment_variables(world: StartupWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/startup_settings.feature",
    name = "Seeding can be switched off from the environment"
)]
fn seeding_switched_off(world: StartupWorld) {
    let _ = world;
}

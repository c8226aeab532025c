//! Shared helpers for backend behavioural tests.

use std::sync::Arc;

use game_catalogue::example_data::{ExampleDataSettings, seed_example_data_on_startup};
use game_catalogue::outbound::InMemoryCatalogueRepository;
use tokio::runtime::Runtime;

/// Wrapper for the non-Clone runtime so it can live in a scenario slot.
#[derive(Clone)]
pub struct RuntimeHandle(pub Arc<Runtime>);

impl RuntimeHandle {
    pub fn new() -> Self {
        Self(Arc::new(Runtime::new().expect("create runtime")))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.block_on(future)
    }
}

/// Repository seeded from the bundled `mossy-owl` registry entry.
#[allow(dead_code, reason = "only the listing scenarios need a seeded store")]
pub fn seeded_repository(runtime: &RuntimeHandle) -> Arc<InMemoryCatalogueRepository> {
    let repository = Arc::new(InMemoryCatalogueRepository::new());
    let settings = ExampleDataSettings {
        enabled: true,
        seed_name: None,
        game_count: None,
        registry_path: None,
    };
    runtime
        .block_on(seed_example_data_on_startup(&settings, Arc::clone(&repository)))
        .expect("seeding succeeds")
        .expect("seeding enabled");
    repository
}

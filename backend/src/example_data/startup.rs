//! Startup seeding orchestration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use example_data::{RegistryError, SeedRegistry};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::CatalogueIngestionRepository;
use crate::domain::{ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError};
use crate::example_data::config::{ExampleDataSettings, SeedingPlanError};

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry file could not be read.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Registry parsing failed.
    #[error("registry parse error: {0}")]
    Registry(#[from] RegistryError),
    /// Seed generation or persistence failed.
    #[error("example data seeding error: {0}")]
    Seeding(#[from] ExampleDataSeedingError),
    /// Settings do not describe a usable run.
    #[error(transparent)]
    Plan(#[from] SeedingPlanError),
}

/// Apply example data on startup when enabled.
///
/// Returns `Ok(None)` when seeding is disabled.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use game_catalogue::example_data::{ExampleDataSettings, seed_example_data_on_startup};
/// use game_catalogue::outbound::InMemoryCatalogueRepository;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ExampleDataSettings {
///     enabled: true,
///     seed_name: Some("mossy-owl".to_owned()),
///     game_count: None,
///     registry_path: None,
/// };
/// let repository = Arc::new(InMemoryCatalogueRepository::new());
/// let outcome = seed_example_data_on_startup(&settings, repository).await?;
/// assert!(outcome.is_some());
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data_on_startup<R>(
    settings: &ExampleDataSettings,
    repository: Arc<R>,
) -> Result<Option<ExampleDataSeedOutcome>, StartupSeedingError>
where
    R: CatalogueIngestionRepository,
{
    let Some(plan) = settings.plan()? else {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    };

    let registry = load_registry(&plan.registry_path)?;
    let seeder = ExampleDataSeeder::new(repository);
    let outcome = seeder
        .seed_from_registry(&registry, &plan.seed_name, plan.game_count)
        .await?;

    info!(
        seed_name = %outcome.seed_name,
        tag_count = outcome.tag_count,
        entry_count = outcome.entry_count,
        review_count = outcome.review_count,
        "example data seeding applied"
    );
    Ok(Some(outcome))
}

/// Read and parse a seed registry file.
///
/// # Errors
///
/// Returns [`StartupSeedingError::RegistryRead`] when the file cannot be
/// opened or is not UTF-8, and [`StartupSeedingError::Registry`] when its
/// contents are invalid.
pub fn load_registry(path: &Path) -> Result<SeedRegistry, StartupSeedingError> {
    let read_error = |source: std::io::Error| StartupSeedingError::RegistryRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "registry path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(Path::new(file_name)).map_err(read_error)?;
    Ok(SeedRegistry::from_json(&contents)?)
}

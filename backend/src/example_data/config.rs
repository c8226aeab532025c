//! Example data settings and the seeding plan derived from them.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_SEED_NAME: &str = "mossy-owl";

fn bundled_registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("example-data")
        .join("seeds.json")
}

/// Layered `EXAMPLE_DATA_*` settings controlling startup seeding.
///
/// Every field may be omitted; [`ExampleDataSettings::plan`] fills the gaps.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Seed the catalogue on startup. Not exposed as a command-line switch,
    /// whose absent value would read as `false`.
    #[ortho_config(default = true, skip_cli)]
    pub enabled: bool,
    /// Registry seed to apply. Defaults to `mossy-owl`.
    pub seed_name: Option<String>,
    /// Replaces the registry's game count for the chosen seed.
    pub game_count: Option<usize>,
    /// Registry file. Defaults to the bundled `fixtures/example-data/seeds.json`.
    pub registry_path: Option<PathBuf>,
}

/// Settings that cannot describe a seeding run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedingPlanError {
    /// The seed name was supplied but is blank.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// A seeding run with every default resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedingPlan {
    pub seed_name: String,
    pub game_count: Option<usize>,
    pub registry_path: PathBuf,
}

impl ExampleDataSettings {
    /// Resolve the run described by these settings.
    ///
    /// Returns `Ok(None)` when seeding is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`SeedingPlanError::EmptySeedName`] for a blank seed name.
    ///
    /// # Examples
    /// ```
    /// use game_catalogue::example_data::ExampleDataSettings;
    ///
    /// let settings = ExampleDataSettings {
    ///     enabled: true,
    ///     seed_name: Some(" rainbow-fox ".to_owned()),
    ///     game_count: Some(3),
    ///     registry_path: None,
    /// };
    /// let plan = settings.plan().expect("valid settings").expect("enabled");
    /// assert_eq!(plan.seed_name, "rainbow-fox");
    /// assert_eq!(plan.game_count, Some(3));
    /// assert!(plan.registry_path.ends_with("seeds.json"));
    /// ```
    pub fn plan(&self) -> Result<Option<SeedingPlan>, SeedingPlanError> {
        if !self.enabled {
            return Ok(None);
        }
        let seed_name = self
            .seed_name
            .as_deref()
            .unwrap_or(DEFAULT_SEED_NAME)
            .trim();
        if seed_name.is_empty() {
            return Err(SeedingPlanError::EmptySeedName);
        }
        Ok(Some(SeedingPlan {
            seed_name: seed_name.to_owned(),
            game_count: self.game_count,
            registry_path: self
                .registry_path
                .clone()
                .unwrap_or_else(bundled_registry_path),
        }))
    }
}

//! Startup wiring for example data seeding.

mod config;
mod startup;

pub use config::{ExampleDataSettings, SeedingPlan, SeedingPlanError};
pub use startup::{StartupSeedingError, load_registry, seed_example_data_on_startup};

//! Errors raised while adding a seed to a registry file.

use thiserror::Error;

use crate::error::RegistryError;

/// Failure modes of [`add_seed`](super::add_seed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddSeedError {
    /// The EFF word list could not be built.
    #[error("word list error: {message}")]
    WordList {
        /// Builder message.
        message: String,
    },
    /// The name derived from an explicit RNG value is already taken.
    #[error("generated seed name '{name}' already exists; supply --name")]
    DuplicateGeneratedName {
        /// Name that collided.
        name: String,
    },
    /// Random RNG values kept producing taken names.
    #[error("failed to generate a unique seed name after {attempts} attempts")]
    NameGenerationExhausted {
        /// Number of names tried.
        attempts: usize,
    },
    /// Reading, validating, or writing the registry failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

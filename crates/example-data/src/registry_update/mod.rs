//! Registry maintenance behind the `example-data-seed` binary.
//!
//! [`AddSeedArgs`] is the clap surface; [`add_seed`] performs the update so
//! tests can drive it without spawning a process.

use std::fmt;

use base_d::{WordDictionary, word, wordlists};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use clap::Parser;
use rand::Rng;

use crate::error::RegistryError;
use crate::registry::{SeedDefinition, SeedRegistry};

mod error;

pub use error::AddSeedError;

/// Games generated for a new seed unless `--game-count` says otherwise.
pub const DEFAULT_GAME_COUNT: usize = 50;
/// Reviewers generated for a new seed unless `--user-count` says otherwise.
pub const DEFAULT_USER_COUNT: usize = 12;
const MAX_NAME_ATTEMPTS: usize = 5;

/// Append a named seed to an example catalogue seed registry.
#[derive(Debug, Clone, Parser)]
#[command(name = "example-data-seed", version, about)]
pub struct AddSeedArgs {
    /// Path to the seed registry JSON file.
    #[arg(long = "registry", value_name = "PATH")]
    pub registry_path: Utf8PathBuf,
    /// RNG seed value; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Seed name; derived from the RNG value when omitted.
    #[arg(long)]
    pub name: Option<String>,
    /// Games to generate.
    #[arg(long, default_value_t = DEFAULT_GAME_COUNT)]
    pub game_count: usize,
    /// Reviewers to generate.
    #[arg(long, default_value_t = DEFAULT_USER_COUNT)]
    pub user_count: usize,
}

/// Seed appended by [`add_seed`].
///
/// # Example
///
/// ```
/// use example_data::registry_update::AddedSeed;
///
/// let added = AddedSeed {
///     name: "mossy-owl".to_owned(),
///     seed: 2026,
///     game_count: 50,
///     user_count: 12,
/// };
/// assert_eq!(
///     added.to_string(),
///     "Added seed \"mossy-owl\" (seed=2026, gameCount=50, userCount=12)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedSeed {
    /// Registry name of the seed.
    pub name: String,
    /// RNG seed value stored in the registry.
    pub seed: u64,
    /// Game count stored in the registry.
    pub game_count: usize,
    /// Reviewer count stored in the registry.
    pub user_count: usize,
}

impl fmt::Display for AddedSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Added seed \"{}\" (seed={}, gameCount={}, userCount={})",
            self.name, self.seed, self.game_count, self.user_count
        )
    }
}

/// Turns RNG values into hyphenated EFF long-list word names.
///
/// # Example
///
/// ```
/// use example_data::registry_update::SeedNamer;
///
/// let namer = SeedNamer::eff_long().expect("word list loads");
/// assert_eq!(namer.name_for(2026), namer.name_for(2026));
/// assert_ne!(namer.name_for(2026), namer.name_for(2027));
/// ```
pub struct SeedNamer {
    dictionary: WordDictionary,
}

impl SeedNamer {
    /// Build a namer over the EFF long word list.
    ///
    /// # Errors
    ///
    /// Returns [`AddSeedError::WordList`] if the dictionary cannot be built.
    pub fn eff_long() -> Result<Self, AddSeedError> {
        let dictionary = WordDictionary::builder()
            .words_from_str(wordlists::EFF_LONG)
            .delimiter("-")
            .case_sensitive(false)
            .build()
            .map_err(|message| AddSeedError::WordList { message })?;
        Ok(Self { dictionary })
    }

    /// Deterministic name for `seed`.
    #[must_use]
    pub fn name_for(&self, seed: u64) -> String {
        word::encode(seed.to_string().as_bytes(), &self.dictionary)
    }
}

/// Append the seed described by `args` to its registry file.
///
/// The file is rewritten atomically, so a failed update leaves the previous
/// contents intact.
///
/// # Errors
///
/// Returns [`AddSeedError`] when the registry cannot be read, the name is
/// taken, or the registry cannot be written.
pub fn add_seed(args: &AddSeedArgs) -> Result<AddedSeed, AddSeedError> {
    add_seed_with(args, || rand::rng().random())
}

fn add_seed_with(
    args: &AddSeedArgs,
    mut random_seed: impl FnMut() -> u64,
) -> Result<AddedSeed, AddSeedError> {
    let (dir, file_name) = open_registry(&args.registry_path)?;
    let registry = SeedRegistry::from_file(&dir, file_name)?;
    let (name, seed) = match args.name.clone() {
        Some(name) => (name, args.seed.unwrap_or_else(&mut random_seed)),
        None => generate_name(&registry, args.seed, random_seed)?,
    };

    let updated = registry.append_seed(SeedDefinition::new(
        name.clone(),
        seed,
        args.game_count,
        args.user_count,
    ))?;
    updated.write_to_file(&dir, file_name)?;

    Ok(AddedSeed {
        name,
        seed,
        game_count: args.game_count,
        user_count: args.user_count,
    })
}

/// Name the new seed after its RNG value.
///
/// An explicit value that maps to a taken name is an error. Random values
/// are redrawn a few times before giving up.
fn generate_name(
    registry: &SeedRegistry,
    explicit_seed: Option<u64>,
    mut random_seed: impl FnMut() -> u64,
) -> Result<(String, u64), AddSeedError> {
    let namer = SeedNamer::eff_long()?;
    if let Some(seed) = explicit_seed {
        let name = namer.name_for(seed);
        return if registry.find_seed(&name).is_ok() {
            Err(AddSeedError::DuplicateGeneratedName { name })
        } else {
            Ok((name, seed))
        };
    }

    (0..MAX_NAME_ATTEMPTS)
        .map(|_| {
            let seed = random_seed();
            (namer.name_for(seed), seed)
        })
        .find(|(name, _)| registry.find_seed(name).is_err())
        .ok_or(AddSeedError::NameGenerationExhausted {
            attempts: MAX_NAME_ATTEMPTS,
        })
}

fn open_registry(path: &Utf8Path) -> Result<(Dir, &Utf8Path), RegistryError> {
    let io_error = |message: String| RegistryError::IoError {
        path: path.to_path_buf(),
        message,
    };
    let file_name = path
        .file_name()
        .map(Utf8Path::new)
        .ok_or_else(|| io_error("registry path must name a file".to_owned()))?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| io_error(err.to_string()))?;
    Ok((dir, file_name))
}

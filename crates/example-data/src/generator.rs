//! Deterministic catalogue generation from seed definitions.
//!
//! The same seed definition always produces an identical catalogue: every
//! random choice flows from one `ChaCha8Rng` seeded with the definition's
//! seed value.

use chrono::NaiveDate;
use fake::Fake;
use fake::faker::lorem::raw::{Paragraph, Sentence};
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::registry::{SeedDefinition, SeedRegistry};
use crate::seed::{
    ExampleCatalogueSeed, ExampleGameSeed, ExampleReviewSeed, ExampleTagSeed, ExampleUserSeed,
};
use crate::validation::{is_valid_display_name, normalise_display_name};

/// Fewest tags attached to a generated game.
pub const MIN_TAGS_PER_GAME: usize = 1;

/// Most tags attached to a generated game.
pub const MAX_TAGS_PER_GAME: usize = 3;

/// Fewest reviews left on a generated game.
pub const MIN_REVIEWS_PER_GAME: usize = 2;

/// Most reviews left on a generated game.
pub const MAX_REVIEWS_PER_GAME: usize = 5;

const MAX_NAME_ATTEMPTS: usize = 100;

/// Comments are attached to roughly 7 reviews out of 10.
const COMMENT_NUMERATOR: u32 = 7;
const COMMENT_DENOMINATOR: u32 = 10;

const COMMENT_MAX_CHARS: usize = 3000;

/// 1990-01-01, counted from 0001-01-01 as day 1.
const EARLIEST_RELEASE_DAY: i32 = 726_468;

/// Days between 1990-01-01 and 2024-12-31.
const RELEASE_WINDOW_DAYS: i32 = 12_783;

/// Generates a complete example catalogue from a seed definition.
///
/// The catalogue contains:
///
/// - One tag per registry tag name, numbered from 1 in registry order
/// - `user_count` reviewers with valid display names
/// - `game_count` games titled `Jeu vidéo {n}` for `n` in `0..game_count`,
///   each with a lorem description, a release date between 1990 and 2024,
///   1 to 3 tags, and 2 to 5 reviews from distinct reviewers
///
/// Tag and review counts are clamped to what the registry and user pool can
/// supply.
///
/// # Errors
///
/// Returns [`GenerationError`] if:
/// - The seed requests games but no users
/// - Display name generation fails after maximum retries
/// - A record count does not fit the identifier range
///
/// # Example
///
/// ```
/// use example_data::{SeedRegistry, generate_example_catalogue};
///
/// let json = r#"{
///     "version": 1,
///     "tagNames": ["RPG", "Puzzle"],
///     "seeds": [{"name": "test", "seed": 42, "gameCount": 3, "userCount": 4}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid");
/// let seed_def = registry.find_seed("test").expect("found");
/// let catalogue = generate_example_catalogue(&registry, seed_def).expect("generated");
///
/// assert_eq!(catalogue.games.len(), 3);
/// let again = generate_example_catalogue(&registry, seed_def).expect("generated");
/// assert_eq!(catalogue, again);
/// ```
pub fn generate_example_catalogue(
    registry: &SeedRegistry,
    seed_def: &SeedDefinition,
) -> Result<ExampleCatalogueSeed, GenerationError> {
    if seed_def.game_count() > 0 && seed_def.user_count() == 0 {
        return Err(GenerationError::NoReviewers {
            game_count: seed_def.game_count(),
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());

    let tags = registry
        .tag_names()
        .iter()
        .enumerate()
        .map(|(index, name)| {
            Ok(ExampleTagSeed {
                id: identifier(index, "tag", registry.tag_names().len())?,
                name: name.trim().to_owned(),
            })
        })
        .collect::<Result<Vec<_>, GenerationError>>()?;

    let mut users = Vec::with_capacity(seed_def.user_count());
    for index in 0..seed_def.user_count() {
        users.push(ExampleUserSeed {
            id: identifier(index, "user", seed_def.user_count())?,
            display_name: generate_display_name(&mut rng)?,
        });
    }

    let tag_ids: Vec<u64> = tags.iter().map(|tag| tag.id).collect();
    let user_ids: Vec<u64> = users.iter().map(|user| user.id).collect();
    let mut games = Vec::with_capacity(seed_def.game_count());
    for index in 0..seed_def.game_count() {
        let id = identifier(index, "game", seed_def.game_count())?;
        games.push(generate_game(&mut rng, id, index, &tag_ids, &user_ids));
    }

    Ok(ExampleCatalogueSeed { tags, users, games })
}

fn identifier(index: usize, kind: &'static str, count: usize) -> Result<u64, GenerationError> {
    u64::try_from(index)
        .ok()
        .and_then(|value| value.checked_add(1))
        .ok_or(GenerationError::IdentifierOverflow { kind, count })
}

fn generate_game(
    rng: &mut ChaCha8Rng,
    id: u64,
    index: usize,
    tag_ids: &[u64],
    user_ids: &[u64],
) -> ExampleGameSeed {
    let description: String = Paragraph(EN, 2..4).fake_with_rng(rng);
    let release_date = release_date(rng);

    let mut game_tags = select_subset(rng, tag_ids, MIN_TAGS_PER_GAME, MAX_TAGS_PER_GAME);
    game_tags.sort_unstable();

    let mut reviewers = select_subset(rng, user_ids, MIN_REVIEWS_PER_GAME, MAX_REVIEWS_PER_GAME);
    reviewers.sort_unstable();
    let reviews = reviewers
        .into_iter()
        .map(|user_id| generate_review(rng, user_id))
        .collect();

    ExampleGameSeed {
        id,
        title: format!("Jeu vidéo {index}"),
        description,
        release_date,
        tag_ids: game_tags,
        reviews,
    }
}

fn generate_review(rng: &mut ChaCha8Rng, user_id: u64) -> ExampleReviewSeed {
    let rating = rng.random_range(1..=5_u8);
    let comment = rng
        .random_ratio(COMMENT_NUMERATOR, COMMENT_DENOMINATOR)
        .then(|| {
            let sentence: String = Sentence(EN, 4..12).fake_with_rng(rng);
            sentence.chars().take(COMMENT_MAX_CHARS).collect()
        });
    ExampleReviewSeed {
        user_id,
        rating,
        comment,
    }
}

fn release_date(rng: &mut ChaCha8Rng) -> NaiveDate {
    let offset = rng.random_range(0..=RELEASE_WINDOW_DAYS);
    NaiveDate::from_num_days_from_ce_opt(EARLIEST_RELEASE_DAY + offset).unwrap_or(NaiveDate::MIN)
}

/// Builds "First Last" names, normalising them until one passes validation.
fn generate_display_name(rng: &mut ChaCha8Rng) -> Result<String, GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);
        let candidate = normalise_display_name(&format!("{first} {last}"));

        if is_valid_display_name(&candidate) {
            return Ok(candidate);
        }
    }

    Err(GenerationError::DisplayNameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

/// Selects a deterministic subset of `items` of between `min_count` and
/// `max_count` elements, clamped to the number available.
fn select_subset<T: Clone>(
    rng: &mut ChaCha8Rng,
    items: &[T],
    min_count: usize,
    max_count: usize,
) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }

    let clamped_min = min_count.min(items.len());
    let clamped_max = max_count.min(items.len());

    let count = if clamped_min == clamped_max {
        clamped_min
    } else {
        rng.random_range(clamped_min..=clamped_max)
    };

    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

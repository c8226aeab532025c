//! Example data seeding orchestration.
//!
//! Converts deterministic example-data registry outputs into domain tags and
//! catalogue entries, then delegates persistence to the ingestion port.

use std::sync::Arc;

use example_data::{
    ExampleCatalogueSeed, ExampleGameSeed, ExampleTagSeed, GenerationError, RegistryError,
    SeedDefinition, SeedRegistry, generate_example_catalogue,
};
use thiserror::Error;

use crate::domain::ports::{CatalogueIngestionRepository, CatalogueIngestionRepositoryError};
use crate::domain::{
    CatalogueEntry, CatalogueEntryDraft, CatalogueValidationError, EntryId, Rating,
    RatingOutOfRange, Review, ReviewDraft, ReviewId, Tag, TagDraft, TagId, UserId,
};

/// Result of applying example data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleDataSeedOutcome {
    /// Registry seed that was applied.
    pub seed_name: String,
    /// Number of tags written.
    pub tag_count: usize,
    /// Number of catalogue entries written.
    pub entry_count: usize,
    /// Number of reviews across all entries.
    pub review_count: usize,
}

/// Errors raised while preparing or applying example data.
#[derive(Debug, Error)]
pub enum ExampleDataSeedingError {
    /// Seed registry lookups failed.
    #[error("seed registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Catalogue generation failed.
    #[error("example data generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A generated record failed domain validation.
    #[error("generated record failed validation: {0}")]
    Invalid(#[from] CatalogueValidationError),
    /// A generated rating is outside the star range.
    #[error("generated rating is invalid: {0}")]
    Rating(#[from] RatingOutOfRange),
    /// Persistence adapter failed while seeding.
    #[error("example data persistence error: {0}")]
    Persistence(#[from] CatalogueIngestionRepositoryError),
}

/// Service that orchestrates example data seeding.
#[derive(Clone)]
pub struct ExampleDataSeeder<R> {
    repository: Arc<R>,
}

impl<R> ExampleDataSeeder<R> {
    /// Create a new seeder with the given persistence adapter.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> ExampleDataSeeder<R>
where
    R: CatalogueIngestionRepository,
{
    /// Generate the named seed and write its tags and entries.
    ///
    /// `game_count_override` replaces the registry's game count when set.
    /// Tags are written before entries so that entries never reference a
    /// tag the store does not know.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleDataSeedingError`] if registry lookup, generation,
    /// validation, or persistence fails.
    pub async fn seed_from_registry(
        &self,
        registry: &SeedRegistry,
        seed_name: &str,
        game_count_override: Option<usize>,
    ) -> Result<ExampleDataSeedOutcome, ExampleDataSeedingError> {
        let seed_def = registry.find_seed(seed_name)?;
        let seed_def = SeedDefinition::new(
            seed_def.name().to_owned(),
            seed_def.seed(),
            game_count_override.unwrap_or(seed_def.game_count()),
            seed_def.user_count(),
        );

        let catalogue = generate_example_catalogue(registry, &seed_def)?;
        let (tags, entries) = convert_catalogue(catalogue)?;
        let review_count = entries.iter().map(CatalogueEntry::review_count).sum();

        self.repository.upsert_tags(&tags).await?;
        self.repository.upsert_entries(&entries).await?;

        Ok(ExampleDataSeedOutcome {
            seed_name: seed_def.name().to_owned(),
            tag_count: tags.len(),
            entry_count: entries.len(),
            review_count,
        })
    }
}

/// Map generated seeds onto validated domain records.
///
/// Review ids are assigned sequentially across the whole catalogue, in game
/// order, starting at 1.
pub fn convert_catalogue(
    catalogue: ExampleCatalogueSeed,
) -> Result<(Vec<Tag>, Vec<CatalogueEntry>), ExampleDataSeedingError> {
    let tags = catalogue
        .tags
        .into_iter()
        .map(convert_tag)
        .collect::<Result<Vec<_>, _>>()?;

    let mut next_review_id = 1_u64;
    let mut entries = Vec::with_capacity(catalogue.games.len());
    for game in catalogue.games {
        entries.push(convert_game(game, &mut next_review_id)?);
    }
    Ok((tags, entries))
}

fn convert_tag(seed: ExampleTagSeed) -> Result<Tag, CatalogueValidationError> {
    Tag::new(TagDraft {
        id: TagId::new(seed.id),
        name: seed.name,
    })
}

fn convert_game(
    game: ExampleGameSeed,
    next_review_id: &mut u64,
) -> Result<CatalogueEntry, ExampleDataSeedingError> {
    let entry_id = EntryId::new(game.id);
    let mut reviews = Vec::with_capacity(game.reviews.len());
    for seed in game.reviews {
        let review = Review::new(ReviewDraft {
            id: ReviewId::new(*next_review_id),
            entry_id,
            user_id: UserId::new(seed.user_id),
            rating: Rating::try_from(seed.rating)?,
            comment: seed.comment,
        })?;
        *next_review_id = next_review_id.saturating_add(1);
        reviews.push(review);
    }

    Ok(CatalogueEntry::new(CatalogueEntryDraft {
        id: entry_id,
        slug: None,
        title: game.title,
        description: game.description,
        release_date: game.release_date,
        tag_ids: game.tag_ids.into_iter().map(TagId::new).collect(),
        reviews,
    })?)
}

#[cfg(test)]
mod tests {
    //! Unit tests for example data seeding orchestration.

    use super::*;
    use crate::domain::ports::MockCatalogueIngestionRepository;
    use rstest::{fixture, rstest};

    #[fixture]
    fn registry() -> SeedRegistry {
        SeedRegistry::from_json(
            r#"{
                "version": 1,
                "tagNames": ["RPG", "Action", "Aventure", "Puzzle"],
                "seeds": [
                    { "name": "mossy-owl", "seed": 2026, "gameCount": 12, "userCount": 6 }
                ]
            }"#,
        )
        .expect("valid registry")
    }

    #[rstest]
    #[tokio::test]
    async fn seeds_tags_then_entries(registry: SeedRegistry) {
        let mut repo = MockCatalogueIngestionRepository::new();
        let mut sequence = mockall::Sequence::new();
        repo.expect_upsert_tags()
            .withf(|tags| tags.len() == 4)
            .times(1)
            .in_sequence(&mut sequence)
            .return_once(|_| Ok(()));
        repo.expect_upsert_entries()
            .withf(|entries| entries.len() == 12)
            .times(1)
            .in_sequence(&mut sequence)
            .return_once(|_| Ok(()));
        let seeder = ExampleDataSeeder::new(Arc::new(repo));

        let outcome = seeder
            .seed_from_registry(&registry, "mossy-owl", None)
            .await
            .expect("seeding succeeds");

        assert_eq!(outcome.seed_name, "mossy-owl");
        assert_eq!(outcome.tag_count, 4);
        assert_eq!(outcome.entry_count, 12);
        assert!(outcome.review_count >= 2 * 12);
    }

    #[rstest]
    #[tokio::test]
    async fn game_count_override_is_applied(registry: SeedRegistry) {
        let mut repo = MockCatalogueIngestionRepository::new();
        repo.expect_upsert_tags().return_once(|_| Ok(()));
        repo.expect_upsert_entries()
            .withf(|entries| entries.len() == 3)
            .return_once(|_| Ok(()));
        let seeder = ExampleDataSeeder::new(Arc::new(repo));

        let outcome = seeder
            .seed_from_registry(&registry, "mossy-owl", Some(3))
            .await
            .expect("seeding succeeds");

        assert_eq!(outcome.entry_count, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_seed_is_a_registry_error(registry: SeedRegistry) {
        let mut repo = MockCatalogueIngestionRepository::new();
        repo.expect_upsert_tags().never();
        let seeder = ExampleDataSeeder::new(Arc::new(repo));

        let error = seeder
            .seed_from_registry(&registry, "rainbow-fox", None)
            .await
            .expect_err("seed missing");

        assert!(matches!(error, ExampleDataSeedingError::Registry(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn persistence_errors_surface(registry: SeedRegistry) {
        let mut repo = MockCatalogueIngestionRepository::new();
        repo.expect_upsert_tags()
            .return_once(|_| Err(CatalogueIngestionRepositoryError::duplicate_tag_name("RPG")));
        repo.expect_upsert_entries().never();
        let seeder = ExampleDataSeeder::new(Arc::new(repo));

        let error = seeder
            .seed_from_registry(&registry, "mossy-owl", None)
            .await
            .expect_err("tag clash");

        assert!(matches!(error, ExampleDataSeedingError::Persistence(_)));
    }

    #[rstest]
    fn converted_entries_have_consistent_aggregates(registry: SeedRegistry) {
        let seed = registry.find_seed("mossy-owl").expect("seed exists");
        let catalogue = generate_example_catalogue(&registry, seed).expect("generated");
        let (_, entries) = convert_catalogue(catalogue).expect("converted");

        for entry in &entries {
            assert_eq!(entry.histogram().total(), entry.review_count());
            assert!(entry.average_rating().is_some());
            assert!(entry.slug().starts_with("jeu-video-"));
        }
        let mut review_ids: Vec<ReviewId> = entries
            .iter()
            .flat_map(|entry| entry.reviews().iter().map(Review::id))
            .collect();
        let total = review_ids.len();
        review_ids.dedup();
        assert_eq!(review_ids.len(), total);
    }
}

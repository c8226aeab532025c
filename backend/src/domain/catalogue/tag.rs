//! Tag entity.

use serde::{Deserialize, Serialize};

use super::validation::validate_non_empty_field;
use super::{CatalogueValidationError, TagId};

/// Input payload for [`Tag::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct TagDraft {
    pub id: TagId,
    pub name: String,
}

/// Named label that entries reference by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    id: TagId,
    name: String,
}

impl Tag {
    /// Validate and construct a tag. The name is stored trimmed.
    pub fn new(draft: TagDraft) -> Result<Self, CatalogueValidationError> {
        Self::try_from(draft)
    }

    /// Tag identifier.
    pub fn id(&self) -> TagId {
        self.id
    }
    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl TryFrom<TagDraft> for Tag {
    type Error = CatalogueValidationError;

    fn try_from(draft: TagDraft) -> Result<Self, Self::Error> {
        let name = validate_non_empty_field(draft.name, "tag.name")?;
        Ok(Self {
            id: draft.id,
            name: name.trim().to_owned(),
        })
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        TagDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

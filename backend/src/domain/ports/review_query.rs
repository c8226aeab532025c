//! Driving port for review lookups.

use async_trait::async_trait;

use crate::domain::{EntryId, Error, UserId};

/// Domain use-case port for review reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewQuery: Send + Sync {
    /// Whether `user_id` already reviewed `entry_id`.
    async fn has_reviewed(&self, entry_id: EntryId, user_id: UserId) -> Result<bool, Error>;
}

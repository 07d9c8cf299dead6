//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{StoryId, UserId};

use crate::domain::entities::{Story, StoryDraft};
use crate::error::StoryResult;

/// Story repository trait
#[trait_variant::make(StoryRepository: Send)]
pub trait LocalStoryRepository {
    /// Insert a story for `author_id` and return its id
    async fn create(&self, author_id: UserId, draft: &StoryDraft) -> StoryResult<StoryId>;

    /// Find a story with its author
    async fn find_by_id(&self, id: StoryId) -> StoryResult<Option<Story>>;

    /// All stories, newest first
    async fn find_all(&self) -> StoryResult<Vec<Story>>;

    /// Overwrite a story owned by `author_id`; `false` when no row matched
    async fn update(&self, id: StoryId, author_id: UserId, draft: &StoryDraft) -> StoryResult<bool>;

    /// `false` when no row matched
    async fn delete(&self, id: StoryId) -> StoryResult<bool>;
}

//! Story Service
//!
//! Create and update derive the word count from the content and classify it
//! before the repository is touched.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::error::app_error::AppError;
use kernel::id::{StoryId, UserId};
use kernel::validation;

use crate::domain::classification::validate_word_count;
use crate::domain::entities::{Story, StoryDraft};
use crate::domain::repository::StoryRepository;
use crate::domain::services::count_words;
use crate::domain::value_objects::StoryStatus;
use crate::error::{StoryError, StoryResult};

const MAX_TITLE_CHARS: usize = 255;
const MAX_SLUG_CHARS: usize = 255;

/// Unvalidated story fields as submitted by a client.
#[derive(Debug, Clone, Default)]
pub struct StoryInput {
    pub title: String,
    pub content: String,
    pub slug: String,
    pub excerpt: Option<String>,
    /// Status code; `None` or blank means draft
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    /// Declared numeric story type
    pub story_type: i64,
}

/// Story CRUD service
pub struct StoryService<R>
where
    R: StoryRepository,
{
    repo: Arc<R>,
}

impl<R> StoryService<R>
where
    R: StoryRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, author_id: UserId, input: StoryInput) -> StoryResult<StoryId> {
        let draft = prepare_draft(input)?;
        let story_id = self.repo.create(author_id, &draft).await?;

        tracing::info!(
            story_id = %story_id,
            author_id = %author_id,
            story_type = %draft.story_type,
            word_count = draft.word_count,
            "Story created"
        );

        Ok(story_id)
    }

    pub async fn find_by_id(&self, story_id: StoryId) -> StoryResult<Story> {
        self.repo
            .find_by_id(story_id)
            .await?
            .ok_or(StoryError::NotFound)
    }

    pub async fn find_stories(&self) -> StoryResult<Vec<Story>> {
        self.repo.find_all().await
    }

    pub async fn update(
        &self,
        story_id: StoryId,
        author_id: UserId,
        input: StoryInput,
    ) -> StoryResult<()> {
        let draft = prepare_draft(input)?;

        if !self.repo.update(story_id, author_id, &draft).await? {
            return Err(StoryError::NotFound);
        }

        tracing::info!(
            story_id = %story_id,
            author_id = %author_id,
            word_count = draft.word_count,
            "Story updated"
        );

        Ok(())
    }

    pub async fn delete(&self, story_id: StoryId) -> StoryResult<()> {
        if !self.repo.delete(story_id).await? {
            return Err(StoryError::NotFound);
        }

        tracing::info!(story_id = %story_id, "Story deleted");

        Ok(())
    }
}

/// Validate the fields, count the words and classify them.
pub fn prepare_draft(input: StoryInput) -> StoryResult<StoryDraft> {
    let title = validation::max_chars("title", &input.title, MAX_TITLE_CHARS)?;
    let content = validation::required("content", &input.content)?;
    let slug = validation::max_chars("slug", &input.slug, MAX_SLUG_CHARS)?;
    let status = parse_status(input.status.as_deref())?;
    let excerpt = input
        .excerpt
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());

    let word_count = count_words(&content);
    let story_type = validate_word_count(input.story_type, word_count)?;

    Ok(StoryDraft {
        title,
        content,
        slug,
        excerpt,
        status,
        published_at: input.published_at,
        story_type,
        word_count,
    })
}

fn parse_status(code: Option<&str>) -> StoryResult<StoryStatus> {
    match code.map(str::trim) {
        None | Some("") => Ok(StoryStatus::Draft),
        Some(code) => StoryStatus::from_code(code).ok_or_else(|| {
            StoryError::from(AppError::bad_request(
                "The status field must be one of draft, published, archived",
            ))
        }),
    }
}

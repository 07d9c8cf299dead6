//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::StoryInput;
use crate::domain::entities::{Author, Story};
use crate::domain::value_objects::{StoryStatus, StoryType};

// ============================================================================
// Requests
// ============================================================================

/// Create/update story request
///
/// Missing text fields deserialize as empty so validation can name them.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Numeric story type: 1 flash fiction, 2 short story, 3 novelette, 4 novella
    #[serde(rename = "type", default)]
    pub story_type: i64,
}

impl From<StoryRequest> for StoryInput {
    fn from(req: StoryRequest) -> Self {
        StoryInput {
            title: req.title,
            content: req.content,
            slug: req.slug,
            excerpt: req.excerpt,
            status: req.status,
            published_at: req.published_at,
            story_type: req.story_type,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.value(),
            first_name: author.first_name,
            last_name: author.last_name,
            username: author.username,
            email: author.email,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StoryResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: AuthorResponse,
    pub slug: String,
    pub excerpt: Option<String>,
    pub status: StoryStatus,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub story_type: StoryType,
    pub word_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Story> for StoryResponse {
    fn from(story: Story) -> Self {
        Self {
            id: story.id.value(),
            title: story.title,
            content: story.content,
            author: story.author.into(),
            slug: story.slug,
            excerpt: story.excerpt,
            status: story.status,
            published_at: story.published_at,
            story_type: story.story_type,
            word_count: story.word_count,
            created_at: story.created_at,
            updated_at: story.updated_at,
        }
    }
}

/// `data` of GET /api/story/{id}
#[derive(Debug, Clone, Serialize)]
pub struct StoryData {
    pub story: StoryResponse,
}

/// `data` of GET /api/story/
#[derive(Debug, Clone, Serialize)]
pub struct StoriesData {
    pub stories: Vec<StoryResponse>,
}

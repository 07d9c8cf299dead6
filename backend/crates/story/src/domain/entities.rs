//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{StoryId, UserId};

use super::value_objects::{StoryStatus, StoryType};

/// Public profile of the user who wrote a story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

/// A persisted story joined with its author.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub slug: String,
    pub excerpt: Option<String>,
    pub status: StoryStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub story_type: StoryType,
    pub word_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated story content ready to be written.
///
/// `word_count` is derived from `content` and `story_type` has already been
/// classified against it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryDraft {
    pub title: String,
    pub content: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub status: StoryStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub story_type: StoryType,
    pub word_count: u32,
}

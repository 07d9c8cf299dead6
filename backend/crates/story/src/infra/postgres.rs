//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{StoryId, UserId};
use sqlx::PgPool;

use crate::domain::entities::{Author, Story, StoryDraft};
use crate::domain::repository::StoryRepository;
use crate::domain::value_objects::{StoryStatus, StoryType};
use crate::error::{StoryError, StoryResult};

const SELECT_STORY_WITH_AUTHOR: &str = r#"
    SELECT
        s.id,
        s.title,
        s.content,
        s.slug,
        s.excerpt,
        s.status,
        s.published_at,
        s.type AS story_type,
        s.word_count,
        s.created_at,
        s.updated_at,
        u.id AS author_id,
        u.first_name AS author_first_name,
        u.last_name AS author_last_name,
        u.username AS author_username,
        u.email AS author_email
    FROM stories s
    INNER JOIN users u ON u.id = s.author_id
"#;

/// PostgreSQL-backed story repository
#[derive(Clone)]
pub struct PgStoryRepository {
    pool: PgPool,
}

impl PgStoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl StoryRepository for PgStoryRepository {
    async fn create(&self, author_id: UserId, draft: &StoryDraft) -> StoryResult<StoryId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO stories (
                title,
                content,
                author_id,
                slug,
                excerpt,
                status,
                published_at,
                type,
                word_count
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(author_id.value())
        .bind(&draft.slug)
        .bind(draft.excerpt.as_deref())
        .bind(draft.status.code())
        .bind(draft.published_at)
        .bind(draft.story_type.code())
        .bind(word_count_to_db(draft.word_count))
        .fetch_one(&self.pool)
        .await?;

        Ok(StoryId::from_db(id))
    }

    async fn find_by_id(&self, id: StoryId) -> StoryResult<Option<Story>> {
        let query = format!("{SELECT_STORY_WITH_AUTHOR} WHERE s.id = $1");
        let row = sqlx::query_as::<_, StoryRow>(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        row.map(StoryRow::into_story).transpose()
    }

    async fn find_all(&self) -> StoryResult<Vec<Story>> {
        let query = format!("{SELECT_STORY_WITH_AUTHOR} ORDER BY s.created_at DESC, s.id DESC");
        let rows = sqlx::query_as::<_, StoryRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(StoryRow::into_story).collect()
    }

    async fn update(&self, id: StoryId, author_id: UserId, draft: &StoryDraft) -> StoryResult<bool> {
        let affected = sqlx::query(
            r#"
            UPDATE stories
            SET
                title = $1,
                content = $2,
                slug = $3,
                excerpt = $4,
                status = $5,
                published_at = $6,
                type = $7,
                word_count = $8,
                updated_at = NOW()
            WHERE id = $9 AND author_id = $10
            "#,
        )
        .bind(&draft.title)
        .bind(&draft.content)
        .bind(&draft.slug)
        .bind(draft.excerpt.as_deref())
        .bind(draft.status.code())
        .bind(draft.published_at)
        .bind(draft.story_type.code())
        .bind(word_count_to_db(draft.word_count))
        .bind(id.value())
        .bind(author_id.value())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn delete(&self, id: StoryId) -> StoryResult<bool> {
        let affected = sqlx::query("DELETE FROM stories WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }
}

/// Classified counts never exceed 40,000.
fn word_count_to_db(word_count: u32) -> i32 {
    i32::try_from(word_count).unwrap_or(i32::MAX)
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct StoryRow {
    id: i64,
    title: String,
    content: String,
    slug: String,
    excerpt: Option<String>,
    status: String,
    published_at: Option<DateTime<Utc>>,
    story_type: String,
    word_count: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_id: i64,
    author_first_name: String,
    author_last_name: String,
    author_username: String,
    author_email: String,
}

impl StoryRow {
    fn into_story(self) -> StoryResult<Story> {
        let status = StoryStatus::from_code(&self.status)
            .ok_or_else(|| StoryError::Internal(format!("unknown story status: {}", self.status)))?;
        let story_type = StoryType::from_code(&self.story_type).ok_or_else(|| {
            StoryError::Internal(format!("unknown story type: {}", self.story_type))
        })?;
        let word_count = u32::try_from(self.word_count)
            .map_err(|_| StoryError::Internal(format!("negative word count: {}", self.word_count)))?;

        Ok(Story {
            id: StoryId::from_db(self.id),
            title: self.title,
            content: self.content,
            author: Author {
                id: UserId::from_db(self.author_id),
                first_name: self.author_first_name,
                last_name: self.author_last_name,
                username: self.author_username,
                email: self.author_email,
            },
            slug: self.slug,
            excerpt: self.excerpt,
            status,
            published_at: self.published_at,
            story_type,
            word_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

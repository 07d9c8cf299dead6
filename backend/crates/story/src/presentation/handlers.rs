//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::error::app_error::AppError;
use kernel::id::{StoryId, UserId};
use kernel::response::ApiResponse;
use std::sync::Arc;

use crate::application::StoryService;
use crate::domain::repository::StoryRepository;
use crate::error::StoryResult;
use crate::presentation::dto::{CreatedResponse, StoriesData, StoryData, StoryRequest};

/// Shared state for story handlers
#[derive(Clone)]
pub struct StoryAppState<R>
where
    R: StoryRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> StoryAppState<R>
where
    R: StoryRepository + Clone + Send + Sync + 'static,
{
    fn service(&self) -> StoryService<R> {
        StoryService::new(self.repo.clone())
    }
}

/// POST /api/story/create/{author_id}
pub async fn create_story<R>(
    State(state): State<StoryAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StoryRequest>, JsonRejection>,
) -> StoryResult<(StatusCode, Json<ApiResponse<CreatedResponse>>)>
where
    R: StoryRepository + Clone + Send + Sync + 'static,
{
    let Path(author_id) = path.map_err(AppError::from)?;
    let author_id = UserId::parse_field(author_id, "author_id")?;
    let Json(req) = payload.map_err(AppError::from)?;

    let story_id = state.service().create(author_id, req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CreatedResponse {
            id: story_id.value(),
        })),
    ))
}

/// GET /api/story/{id}
pub async fn get_story<R>(
    State(state): State<StoryAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> StoryResult<Json<ApiResponse<StoryData>>>
where
    R: StoryRepository + Clone + Send + Sync + 'static,
{
    let Path(story_id) = path.map_err(AppError::from)?;
    let story = state.service().find_by_id(StoryId::parse(story_id)?).await?;

    Ok(Json(ApiResponse::success(StoryData {
        story: story.into(),
    })))
}

/// GET /api/story/
pub async fn list_stories<R>(
    State(state): State<StoryAppState<R>>,
) -> StoryResult<Json<ApiResponse<StoriesData>>>
where
    R: StoryRepository + Clone + Send + Sync + 'static,
{
    let stories = state.service().find_stories().await?;

    Ok(Json(ApiResponse::success(StoriesData {
        stories: stories.into_iter().map(Into::into).collect(),
    })))
}

/// PATCH /api/story/{id}/user/{user_id}
pub async fn update_story<R>(
    State(state): State<StoryAppState<R>>,
    path: Result<Path<(i64, i64)>, PathRejection>,
    payload: Result<Json<StoryRequest>, JsonRejection>,
) -> StoryResult<Json<ApiResponse<()>>>
where
    R: StoryRepository + Clone + Send + Sync + 'static,
{
    let Path((story_id, author_id)) = path.map_err(AppError::from)?;
    let story_id = StoryId::parse(story_id)?;
    let author_id = UserId::parse_field(author_id, "user_id")?;
    let Json(req) = payload.map_err(AppError::from)?;

    state.service().update(story_id, author_id, req.into()).await?;

    Ok(Json(ApiResponse::success(())))
}

/// DELETE /api/story/{id}
pub async fn delete_story<R>(
    State(state): State<StoryAppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> StoryResult<Json<ApiResponse<()>>>
where
    R: StoryRepository + Clone + Send + Sync + 'static,
{
    let Path(story_id) = path.map_err(AppError::from)?;
    state.service().delete(StoryId::parse(story_id)?).await?;

    Ok(Json(ApiResponse::success(())))
}

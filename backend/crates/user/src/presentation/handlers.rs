//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::error::app_error::AppError;
use kernel::id::UserId;
use kernel::response::ApiResponse;
use platform::password::SecretHasher;
use std::sync::Arc;

use crate::application::UserService;
use crate::domain::repository::UserRepository;
use crate::error::UserResult;
use crate::presentation::dto::{CreatedResponse, UserData, UserRequest, UsersData};

/// Shared state for user handlers
#[derive(Clone)]
pub struct UserAppState<R, H>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    H: SecretHasher + Clone + 'static,
{
    pub repo: Arc<R>,
    pub hasher: Arc<H>,
}

impl<R, H> UserAppState<R, H>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    H: SecretHasher + Clone + 'static,
{
    fn service(&self) -> UserService<R, H> {
        UserService::new(self.repo.clone(), self.hasher.clone())
    }
}

/// POST /api/user/create
pub async fn create_user<R, H>(
    State(state): State<UserAppState<R, H>>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> UserResult<(StatusCode, Json<ApiResponse<CreatedResponse>>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    H: SecretHasher + Clone + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;
    let user_id = state.service().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CreatedResponse {
            id: user_id.value(),
        })),
    ))
}

/// GET /api/user/{id}
pub async fn get_user<R, H>(
    State(state): State<UserAppState<R, H>>,
    path: Result<Path<i64>, PathRejection>,
) -> UserResult<Json<ApiResponse<UserData>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    H: SecretHasher + Clone + 'static,
{
    let Path(user_id) = path.map_err(AppError::from)?;
    let user = state.service().find_by_id(UserId::parse(user_id)?).await?;

    Ok(Json(ApiResponse::success(UserData { user: user.into() })))
}

/// GET /api/user/
pub async fn list_users<R, H>(
    State(state): State<UserAppState<R, H>>,
) -> UserResult<Json<ApiResponse<UsersData>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    H: SecretHasher + Clone + 'static,
{
    let users = state.service().find_users().await?;

    Ok(Json(ApiResponse::success(UsersData {
        users: users.into_iter().map(Into::into).collect(),
    })))
}

/// PATCH /api/user/{id}
pub async fn update_user<R, H>(
    State(state): State<UserAppState<R, H>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> UserResult<Json<ApiResponse<()>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    H: SecretHasher + Clone + 'static,
{
    let Path(user_id) = path.map_err(AppError::from)?;
    let user_id = UserId::parse(user_id)?;
    let Json(req) = payload.map_err(AppError::from)?;

    state.service().update(user_id, req.into()).await?;

    Ok(Json(ApiResponse::success(())))
}

/// DELETE /api/user/{id}
pub async fn delete_user<R, H>(
    State(state): State<UserAppState<R, H>>,
    path: Result<Path<i64>, PathRejection>,
) -> UserResult<Json<ApiResponse<()>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    H: SecretHasher + Clone + 'static,
{
    let Path(user_id) = path.map_err(AppError::from)?;
    state.service().delete(UserId::parse(user_id)?).await?;

    Ok(Json(ApiResponse::success(())))
}

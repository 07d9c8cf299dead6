//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use kernel::error::app_error::AppError;
use kernel::response::ApiResponse;
use platform::password::SecretHasher;
use std::sync::Arc;

use crate::application::SignInUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::{CredentialRepository, TokenSaver};
use crate::domain::signing::HmacSigner;
use crate::error::AuthResult;
use crate::presentation::dto::{SignInRequest, TokenResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R, H>
where
    R: CredentialRepository + TokenSaver + Clone + Send + Sync + 'static,
    H: SecretHasher + Clone + 'static,
{
    pub repo: Arc<R>,
    pub hasher: Arc<H>,
    pub signer: Arc<HmacSigner>,
    pub config: Arc<AuthConfig>,
}

/// POST /api/auth/signin
pub async fn sign_in<R, H>(
    State(state): State<AuthAppState<R, H>>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> AuthResult<Json<ApiResponse<TokenResponse>>>
where
    R: CredentialRepository + TokenSaver + Clone + Send + Sync + 'static,
    H: SecretHasher + Clone + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;

    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.signer.clone(),
        state.hasher.clone(),
        state.config.clone(),
    );
    let output = use_case.execute(req.into()).await?;

    Ok(Json(ApiResponse::success(TokenResponse {
        token: output.token,
    })))
}

//! Auth Router

use axum::{Router, routing::post};
use platform::password::{Argon2Hasher, SecretHasher};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{CredentialRepository, TokenSaver};
use crate::domain::signing::HmacSigner;
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, hasher: Argon2Hasher, config: AuthConfig) -> Router {
    auth_router_generic(repo, hasher, config)
}

/// Create a generic Auth router for any repository and hasher
pub fn auth_router_generic<R, H>(repo: R, hasher: H, config: AuthConfig) -> Router
where
    R: CredentialRepository + TokenSaver + Clone + Send + Sync + 'static,
    H: SecretHasher + Clone + 'static,
{
    let signer = HmacSigner::new(
        config.refresh_token_secret.as_bytes(),
        config.signing_method,
    );
    let state = AuthAppState {
        repo: Arc::new(repo),
        hasher: Arc::new(hasher),
        signer: Arc::new(signer),
        config: Arc::new(config),
    };

    Router::new()
        .route("/signin", post(handlers::sign_in::<R, H>))
        .with_state(state)
}

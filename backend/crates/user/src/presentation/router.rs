//! User Router

use axum::{
    Router,
    routing::{get, post},
};
use platform::password::{Argon2Hasher, SecretHasher};
use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, UserAppState};

/// Create the user router with PostgreSQL repository and Argon2id hashing
pub fn user_router(repo: PgUserRepository, hasher: Argon2Hasher) -> Router {
    user_router_generic(repo, hasher)
}

/// Create a generic user router for any repository and hasher
pub fn user_router_generic<R, H>(repo: R, hasher: H) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
    H: SecretHasher + Clone + 'static,
{
    let state = UserAppState {
        repo: Arc::new(repo),
        hasher: Arc::new(hasher),
    };

    Router::new()
        .route("/", get(handlers::list_users::<R, H>))
        .route("/create", post(handlers::create_user::<R, H>))
        .route(
            "/{id}",
            get(handlers::get_user::<R, H>)
                .patch(handlers::update_user::<R, H>)
                .delete(handlers::delete_user::<R, H>),
        )
        .with_state(state)
}

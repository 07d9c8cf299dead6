//! Story Router

use axum::{
    Router,
    routing::{get, patch, post},
};
use std::sync::Arc;

use crate::domain::repository::StoryRepository;
use crate::infra::postgres::PgStoryRepository;
use crate::presentation::handlers::{self, StoryAppState};

/// Create the story router with PostgreSQL repository
pub fn story_router(repo: PgStoryRepository) -> Router {
    story_router_generic(repo)
}

/// Create a generic story router for any repository implementation
pub fn story_router_generic<R>(repo: R) -> Router
where
    R: StoryRepository + Clone + Send + Sync + 'static,
{
    let state = StoryAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", get(handlers::list_stories::<R>))
        .route("/create/{author_id}", post(handlers::create_story::<R>))
        .route(
            "/{id}",
            get(handlers::get_story::<R>).delete(handlers::delete_story::<R>),
        )
        .route("/{id}/user/{user_id}", patch(handlers::update_story::<R>))
        .with_state(state)
}

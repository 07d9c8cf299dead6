//! Story Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Story types, word counting, classification, repository traits
//! - `application/` - Story service (word count, classification, persistence)
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Classification
//! The word count is always derived from the submitted content and must fall in
//! the band of the declared [`StoryType`]; nothing is persisted otherwise.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::story_service::StoryService;
pub use domain::classification::{StoryErrorKind, StoryValidationError, validate_word_count};
pub use domain::services::count_words;
pub use domain::value_objects::{StoryStatus, StoryType};
pub use error::{StoryError, StoryResult};
pub use infra::postgres::PgStoryRepository;
pub use presentation::router::{story_router, story_router_generic};

#[cfg(test)]
mod tests;

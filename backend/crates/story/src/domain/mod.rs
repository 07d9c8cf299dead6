//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Story, Author, StoryDraft)
//! - Domain value objects (StoryType, StoryStatus)
//! - Domain services (word counting)
//! - Word-count classification rules
//! - Repository traits (interfaces)

pub mod classification;
pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

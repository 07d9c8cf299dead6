//! Application Layer
//!
//! Story service orchestrating word counting, classification and persistence.

pub mod story_service;

pub use story_service::{StoryInput, StoryService};

//! Application Layer
//!
//! User service.

pub mod user_service;

pub use user_service::{UserInput, UserService};

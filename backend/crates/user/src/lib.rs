//! User Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - User service
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Passwords are hashed with the platform [`platform::password::SecretHasher`]
//! and never leave the repository layer.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::user_service::{UserInput, UserService};
pub use error::{UserError, UserResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::{user_router, user_router_generic};

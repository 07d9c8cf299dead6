//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Token record, claims, signing, repository traits
//! - `application/` - Token issuance and the sign-in use case
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Refresh tokens
//! - Claims `{id, exp}` signed as a compact JWS with HMAC (HS256 by default)
//! - Only `argon2id(sha256(token))` is stored; the raw token goes to the client
//! - Persisting the hash runs under a short deadline

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{SignInInput, SignInOutput, SignInUseCase, TokenIssuer};
pub use domain::{
    HashFunction, HmacSigner, SigningError, SigningMethod, Token, TokenSaver, TokenSigner,
    UserClaims,
};
pub use error::{AuthError, AuthResult, TokenError};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::{auth_router, auth_router_generic};

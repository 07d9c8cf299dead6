//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{credential::Credential, token::Token};
use crate::error::AuthResult;

/// Persists issued refresh tokens
#[trait_variant::make(TokenSaver: Send)]
pub trait LocalTokenSaver {
    /// Store the hashed token record
    async fn save_token(&self, token: &Token) -> AuthResult<()>;
}

/// Credential lookup for sign-in
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find the user id and password hash for a username
    async fn find_credentials_by_username(&self, username: &str)
    -> AuthResult<Option<Credential>>;
}

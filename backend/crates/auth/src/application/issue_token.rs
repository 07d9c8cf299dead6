//! Refresh Token Issuance
//!
//! Sign claims, hash the signed token and persist only the hash. The raw token
//! goes back to the caller and nowhere else.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::crypto::sha256;
use platform::password::SecretHasher;

use crate::domain::entity::{claims::UserClaims, token::Token};
use crate::domain::repository::TokenSaver;
use crate::domain::signing::TokenSigner;
use crate::error::TokenError;

/// Issues refresh tokens that all expire at the same instant.
///
/// Immutable after construction; build a new issuer to move the expiry.
pub struct TokenIssuer<G, H, S>
where
    G: TokenSigner,
    H: SecretHasher,
    S: TokenSaver,
{
    signer: Arc<G>,
    hasher: Arc<H>,
    saver: Arc<S>,
    expires_at: DateTime<Utc>,
    save_timeout: Duration,
}

impl<G, H, S> TokenIssuer<G, H, S>
where
    G: TokenSigner,
    H: SecretHasher,
    S: TokenSaver,
{
    pub fn new(
        signer: Arc<G>,
        hasher: Arc<H>,
        saver: Arc<S>,
        expires_at: DateTime<Utc>,
        save_timeout: Duration,
    ) -> Self {
        Self {
            signer,
            hasher,
            saver,
            expires_at,
            save_timeout,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Sign, hash, persist, then return the signed token.
    ///
    /// The stored hash is Argon2id over the SHA-256 digest of the signed
    /// string. A save slower than the configured deadline counts as a save
    /// failure.
    pub async fn generate_token(&self, user_id: UserId) -> Result<String, TokenError> {
        let claims = UserClaims::new(user_id, self.expires_at);
        let token = self.signer.sign(&claims)?;

        let digest = sha256(token.as_bytes());
        let token_hash = self.hasher.hash(&digest)?;

        let record = Token::new(token_hash, user_id, self.expires_at);
        match tokio::time::timeout(self.save_timeout, self.saver.save_token(&record)).await {
            Ok(Ok(())) => Ok(token),
            Ok(Err(e)) => Err(TokenError::Save(Box::new(e))),
            Err(_) => Err(TokenError::SaveTimeout),
        }
    }
}

//! Refresh Token Record

use chrono::{DateTime, Utc};
use kernel::id::UserId;

/// Persisted form of an issued refresh token.
///
/// `token_hash` is the Argon2id hash of the SHA-256 digest of the signed
/// token, never the signed token itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_hash: String,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
}

impl Token {
    pub fn new(token_hash: String, user_id: UserId, expires_at: DateTime<Utc>) -> Self {
        Self {
            token_hash,
            user_id,
            expires_at,
            revoked: false,
        }
    }
}

//! Token Claims

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use serde::Serialize;

/// Claims carried by a refresh token. Built per issuance, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserClaims {
    pub id: UserId,
    /// Expiry as unix seconds
    pub exp: i64,
}

impl UserClaims {
    pub fn new(id: UserId, expires_at: DateTime<Utc>) -> Self {
        Self {
            id,
            exp: expires_at.timestamp(),
        }
    }
}

//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use platform::crypto::{random_bytes, to_base64_url};

use crate::domain::signing::SigningMethod;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared HMAC secret for refresh tokens
    pub refresh_token_secret: String,
    /// Refresh token lifetime (1 week)
    pub refresh_token_ttl: Duration,
    /// Deadline for persisting an issued token
    pub save_timeout: Duration,
    pub signing_method: SigningMethod,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            refresh_token_secret: String::new(),
            refresh_token_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            save_timeout: Duration::from_secs(1),
            signing_method: SigningMethod::HS256,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    pub fn new(refresh_token_secret: impl Into<String>) -> Self {
        Self {
            refresh_token_secret: refresh_token_secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random refresh token secret (for development)
    pub fn development() -> Self {
        Self::new(to_base64_url(&random_bytes(32)))
    }

    pub fn with_pepper(mut self, pepper: Option<Vec<u8>>) -> Self {
        self.password_pepper = pepper;
        self
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("refresh_token_secret", &"[REDACTED]")
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .field("save_timeout", &self.save_timeout)
            .field("signing_method", &self.signing_method)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

//! Sign In Use Case
//!
//! Verifies a username and password, then issues a refresh token.

use std::fmt;
use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use kernel::id::UserId;
use kernel::validation;
use platform::password::{ClearTextPassword, SecretHasher};

use crate::application::config::AuthConfig;
use crate::application::issue_token::TokenIssuer;
use crate::domain::repository::{CredentialRepository, TokenSaver};
use crate::domain::signing::TokenSigner;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Raw refresh token, returned to the client only
    pub token: String,
    pub user_id: UserId,
}

impl fmt::Debug for SignInOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInOutput")
            .field("token", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Sign in use case
pub struct SignInUseCase<R, G, H>
where
    R: CredentialRepository + TokenSaver,
    G: TokenSigner,
    H: SecretHasher,
{
    repo: Arc<R>,
    signer: Arc<G>,
    hasher: Arc<H>,
    config: Arc<AuthConfig>,
}

impl<R, G, H> SignInUseCase<R, G, H>
where
    R: CredentialRepository + TokenSaver,
    G: TokenSigner,
    H: SecretHasher,
{
    pub fn new(repo: Arc<R>, signer: Arc<G>, hasher: Arc<H>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            signer,
            hasher,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let username = validation::required("username", &input.username)?;
        validation::required("password", &input.password)?;

        let credential = self
            .repo
            .find_credentials_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Passwords were normalized the same way when they were hashed
        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !self
            .hasher
            .verify(password.as_bytes(), &credential.password_hash)
        {
            return Err(AuthError::InvalidCredentials);
        }

        let ttl = TimeDelta::from_std(self.config.refresh_token_ttl)
            .map_err(|e| AuthError::Internal(format!("refresh token ttl: {e}")))?;

        let issuer = TokenIssuer::new(
            self.signer.clone(),
            self.hasher.clone(),
            self.repo.clone(),
            Utc::now() + ttl,
            self.config.save_timeout,
        );
        let token = issuer.generate_token(credential.user_id).await?;

        tracing::info!(
            user_id = %credential.user_id,
            expires_at = %issuer.expires_at(),
            "User signed in"
        );

        Ok(SignInOutput {
            token,
            user_id: credential.user_id,
        })
    }
}

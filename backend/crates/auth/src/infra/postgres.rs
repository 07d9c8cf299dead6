//! PostgreSQL Repository Implementation

use chrono::Utc;
use kernel::id::UserId;
use sqlx::PgPool;

use crate::domain::entity::{credential::Credential, token::Token};
use crate::domain::repository::{CredentialRepository, TokenSaver};
use crate::error::AuthResult;

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Delete refresh tokens whose expiry has passed
    pub async fn cleanup_expired(&self) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at < $1")
            .bind(Utc::now())
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(tokens_deleted = deleted, "Cleaned up expired refresh tokens");

        Ok(deleted)
    }
}

impl TokenSaver for PgAuthRepository {
    async fn save_token(&self, token: &Token) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (
                token_hash,
                user_id,
                expires_at,
                revoked
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&token.token_hash)
        .bind(token.user_id.value())
        .bind(token.expires_at)
        .bind(token.revoked)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

impl CredentialRepository for PgAuthRepository {
    async fn find_credentials_by_username(
        &self,
        username: &str,
    ) -> AuthResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            "SELECT id, password FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| Credential {
            user_id: UserId::from_db(r.id),
            password_hash: r.password,
        }))
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: i64,
    password: String,
}

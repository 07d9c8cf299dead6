//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, person_name::PersonName, user_name::UserName};
use crate::error::UserResult;

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &NewUser) -> UserResult<UserId> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (
                first_name,
                last_name,
                username,
                email,
                password
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(user.first_name.as_str())
        .bind(user.last_name.as_str())
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(UserId::from_db(id))
    }

    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                first_name,
                last_name,
                username,
                email,
                created_at,
                updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_all(&self) -> UserResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                first_name,
                last_name,
                username,
                email,
                created_at,
                updated_at
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }

    async fn update(&self, id: UserId, user: &NewUser) -> UserResult<bool> {
        let affected = sqlx::query(
            r#"
            UPDATE users
            SET
                first_name = $1,
                last_name = $2,
                username = $3,
                email = $4,
                password = $5,
                updated_at = NOW()
            WHERE id = $6
            "#,
        )
        .bind(user.first_name.as_str())
        .bind(user.last_name.as_str())
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(id.value())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn delete(&self, id: UserId) -> UserResult<bool> {
        let affected = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }

    async fn exists_by_email_or_username(
        &self,
        email: &Email,
        username: &UserName,
    ) -> UserResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM users WHERE email = $1 OR username = $2)",
        )
        .bind(email.as_str())
        .bind(username.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    username: String,
    email: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId::from_db(self.id),
            first_name: PersonName::from_db(self.first_name),
            last_name: PersonName::from_db(self.last_name),
            username: UserName::from_db(self.username),
            email: Email::from_db(self.email),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

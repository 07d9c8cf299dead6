//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, person_name::PersonName, user_name::UserName};

/// Stored user account, without its password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub username: UserName,
    pub email: Email,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated account fields plus the already hashed password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub username: UserName,
    pub email: Email,
    pub password_hash: String,
}

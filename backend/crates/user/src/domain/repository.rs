//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::UserResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return its id
    async fn create(&self, user: &NewUser) -> UserResult<UserId>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>>;

    /// All users, oldest first
    async fn find_all(&self) -> UserResult<Vec<User>>;

    /// Overwrite every field; `false` when no row matched
    async fn update(&self, id: UserId, user: &NewUser) -> UserResult<bool>;

    /// `false` when no row matched
    async fn delete(&self, id: UserId) -> UserResult<bool>;

    /// Check whether either credential is already taken
    async fn exists_by_email_or_username(
        &self,
        email: &Email,
        username: &UserName,
    ) -> UserResult<bool>;
}

//! User Service
//!
//! Validates account fields, rejects taken credentials and hashes passwords
//! before anything reaches the repository.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::{ClearTextPassword, SecretHasher};

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, person_name::PersonName, user_name::UserName};
use crate::error::{UserError, UserResult};

/// Unvalidated account fields as submitted by a client.
///
/// No `Debug`: the clear-text password must not reach the logs.
#[derive(Clone, Default)]
pub struct UserInput {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub email: String,
}

/// User CRUD service
pub struct UserService<R, H>
where
    R: UserRepository,
    H: SecretHasher,
{
    repo: Arc<R>,
    hasher: Arc<H>,
}

impl<R, H> UserService<R, H>
where
    R: UserRepository,
    H: SecretHasher,
{
    pub fn new(repo: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repo, hasher }
    }

    pub async fn create(&self, input: UserInput) -> UserResult<UserId> {
        let fields = ValidatedUser::parse(input)?;

        if self
            .repo
            .exists_by_email_or_username(&fields.email, &fields.username)
            .await?
        {
            return Err(UserError::DuplicateCredentials);
        }

        let user = self.hash_password(fields)?;
        let user_id = self.repo.create(&user).await?;

        tracing::info!(user_id = %user_id, username = %user.username, "User created");

        Ok(user_id)
    }

    pub async fn find_by_id(&self, user_id: UserId) -> UserResult<User> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound)
    }

    pub async fn find_users(&self) -> UserResult<Vec<User>> {
        self.repo.find_all().await
    }

    /// Replace every field. The new password is hashed like on create.
    pub async fn update(&self, user_id: UserId, input: UserInput) -> UserResult<()> {
        let user = self.hash_password(ValidatedUser::parse(input)?)?;

        if !self.repo.update(user_id, &user).await? {
            return Err(UserError::NotFound);
        }

        tracing::info!(user_id = %user_id, "User updated");

        Ok(())
    }

    pub async fn delete(&self, user_id: UserId) -> UserResult<()> {
        if !self.repo.delete(user_id).await? {
            return Err(UserError::NotFound);
        }

        tracing::info!(user_id = %user_id, "User deleted");

        Ok(())
    }

    fn hash_password(&self, fields: ValidatedUser) -> UserResult<NewUser> {
        let password_hash = self.hasher.hash(fields.password.as_bytes())?;

        Ok(NewUser {
            first_name: fields.first_name,
            last_name: fields.last_name,
            username: fields.username,
            email: fields.email,
            password_hash,
        })
    }
}

struct ValidatedUser {
    first_name: PersonName,
    last_name: PersonName,
    username: UserName,
    email: Email,
    password: ClearTextPassword,
}

impl ValidatedUser {
    /// Fields are checked in payload order so the first offending one is reported.
    fn parse(input: UserInput) -> UserResult<Self> {
        Ok(Self {
            first_name: PersonName::first(&input.first_name)?,
            last_name: PersonName::last(&input.last_name)?,
            username: UserName::new(&input.username)?,
            password: ClearTextPassword::new(input.password)?,
            email: Email::new(input.email)?,
        })
    }
}

//! Sign-in Credential

use kernel::id::UserId;

/// Stored password hash of a user, looked up by username at sign-in.
#[derive(Clone)]
pub struct Credential {
    pub user_id: UserId,
    pub password_hash: String,
}

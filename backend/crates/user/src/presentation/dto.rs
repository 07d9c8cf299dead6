//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::UserInput;
use crate::domain::entity::user::User;

// ============================================================================
// Requests
// ============================================================================

/// Create/update user request
///
/// Missing fields deserialize as empty so validation can name them.
#[derive(Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
}

impl From<UserRequest> for UserInput {
    fn from(req: UserRequest) -> Self {
        UserInput {
            first_name: req.first_name,
            last_name: req.last_name,
            username: req.username,
            password: req.password,
            email: req.email,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Public view of an account. The password hash is never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            first_name: user.first_name.to_string(),
            last_name: user.last_name.to_string(),
            username: user.username.to_string(),
            email: user.email.to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// `data` of GET /api/user/{id}
#[derive(Debug, Clone, Serialize)]
pub struct UserData {
    pub user: UserResponse,
}

/// `data` of GET /api/user/
#[derive(Debug, Clone, Serialize)]
pub struct UsersData {
    pub users: Vec<UserResponse>,
}

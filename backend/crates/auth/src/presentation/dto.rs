//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::SignInInput;

/// Sign in request
#[derive(Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl From<SignInRequest> for SignInInput {
    fn from(req: SignInRequest) -> Self {
        SignInInput {
            username: req.username,
            password: req.password,
        }
    }
}

/// `data` of POST /api/auth/signin
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

//! User Name Value Object
//!
//! Public handle used to sign in. Any characters, 6 to 30 of them.

use derive_more::Display;
use kernel::error::app_error::AppResult;
use kernel::validation;

pub const USER_NAME_MIN_LENGTH: usize = 6;

pub const USER_NAME_MAX_LENGTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: &str) -> AppResult<Self> {
        let value = validation::min_chars("username", raw, USER_NAME_MIN_LENGTH)?;
        let value = validation::max_chars("username", &value, USER_NAME_MAX_LENGTH)?;
        Ok(Self(value))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//! Person Name Value Object
//!
//! First and last names share the same rules; the field name is carried only
//! for error messages.

use derive_more::Display;
use kernel::error::app_error::AppResult;
use kernel::validation;

pub const PERSON_NAME_MIN_LENGTH: usize = 3;

pub const PERSON_NAME_MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(field: &str, raw: &str) -> AppResult<Self> {
        let value = validation::min_chars(field, raw, PERSON_NAME_MIN_LENGTH)?;
        let value = validation::max_chars(field, &value, PERSON_NAME_MAX_LENGTH)?;
        Ok(Self(value))
    }

    pub fn first(raw: &str) -> AppResult<Self> {
        Self::new("first_name", raw)
    }

    pub fn last(raw: &str) -> AppResult<Self> {
        Self::new("last_name", raw)
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

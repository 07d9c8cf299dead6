//! Common ID Types
//!
//! Type-safe wrappers around the database serial keys.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::app_error::{AppError, AppResult};

/// Generic typed ID over a positive `BIGSERIAL` key.
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
///
/// assert!(UserId::new(0).is_none());
/// assert_eq!(UserId::new(7).map(|id| id.value()), Some(7));
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// `None` unless `value > 0`.
    pub fn new(value: i64) -> Option<Self> {
        (value > 0).then(|| Self::from_db(value))
    }

    /// Validate a raw id coming from a URI segment named `id`.
    pub fn parse(value: i64) -> AppResult<Self> {
        Self::parse_field(value, "id")
    }

    /// Validate a raw id, naming the offending field in the error.
    pub fn parse_field(value: i64, field: &str) -> AppResult<Self> {
        Self::new(value).ok_or_else(|| {
            AppError::bad_request(format!("The {field} field must be greater than 0"))
        })
    }

    /// Wrap a key read back from the database.
    pub fn from_db(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Self::new(value).ok_or_else(|| serde::de::Error::custom("id must be greater than 0"))
    }
}

/// Marker types for different entity IDs
pub mod markers {
    pub struct User;

    pub struct Story;
}

pub type UserId = Id<markers::User>;
pub type StoryId = Id<markers::Story>;

//! Domain Value Objects
//!
//! Story type and publication status. Both are stored as their string codes.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// StoryType
// ============================================================================

/// Length category of a story.
///
/// Numeric ids are what clients submit in the `type` field; any other id is an
/// unknown type and never classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryType {
    FlashFiction = 1,
    ShortStory = 2,
    Novelette = 3,
    Novella = 4,
}

impl StoryType {
    pub const ALL: [StoryType; 4] = [
        Self::FlashFiction,
        Self::ShortStory,
        Self::Novelette,
        Self::Novella,
    ];

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::FlashFiction => "flash_fiction",
            Self::ShortStory => "short_story",
            Self::Novelette => "novelette",
            Self::Novella => "novella",
        }
    }

    /// Word-count band as `(exclusive lower, inclusive upper)`.
    #[inline]
    pub const fn word_range(&self) -> (u32, u32) {
        match self {
            Self::FlashFiction => (100, 1_000),
            Self::ShortStory => (1_000, 7_500),
            Self::Novelette => (7_500, 20_000),
            Self::Novella => (20_000, 40_000),
        }
    }

    #[inline]
    pub const fn accepts(&self, word_count: u32) -> bool {
        let (lower, upper) = self.word_range();
        word_count > lower && word_count <= upper
    }

    /// Human-readable band, used in classification errors.
    pub const fn range_message(&self) -> &'static str {
        match self {
            Self::FlashFiction => "word count for flash fiction should be between 100 and 1000",
            Self::ShortStory => "word count for short story should be between 1000 and 7500",
            Self::Novelette => "word count for novelette should be between 7500 and 20,000",
            Self::Novella => "word count for novella should be between 20,000 and 40,000",
        }
    }

    #[inline]
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::FlashFiction),
            2 => Some(Self::ShortStory),
            3 => Some(Self::Novelette),
            4 => Some(Self::Novella),
            _ => None,
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Canonical string for a declared numeric id; empty for unknown ids.
    pub fn label_for_id(id: i64) -> &'static str {
        Self::from_id(id).map_or("", |t| t.code())
    }
}

impl fmt::Display for StoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// StoryStatus
// ============================================================================

/// Publication status. Descriptive only: any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl StoryStatus {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

impl fmt::Display for StoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

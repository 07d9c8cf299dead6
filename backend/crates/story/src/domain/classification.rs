//! Word-Count Classification
//!
//! Decides whether a computed word count fits the band of the declared story
//! type. Pure and total: unknown type ids produce an error, never a panic.

use thiserror::Error;

use super::value_objects::StoryType;

const INVALID_TYPE_MESSAGE: &str = "invalid story type";

/// What went wrong, tagged by the declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryErrorKind {
    /// Known type, count outside its band.
    WordCountOutOfRange(StoryType),
    /// The declared numeric id matches no story type.
    InvalidType(i64),
}

impl StoryErrorKind {
    /// Canonical type string, empty for unknown ids.
    pub fn type_label(&self) -> &'static str {
        match self {
            Self::WordCountOutOfRange(story_type) => story_type.code(),
            Self::InvalidType(id) => StoryType::label_for_id(*id),
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Self::WordCountOutOfRange(story_type) => story_type.range_message(),
            Self::InvalidType(_) => INVALID_TYPE_MESSAGE,
        }
    }
}

/// Rejected word count for a declared story type.
///
/// Equality compares the [`StoryErrorKind`] only, so two errors for the same
/// declared type are equal whatever their word counts. This is coarse: callers
/// that need the count must read [`Self::word_count`].
#[derive(Debug, Clone, Error)]
#[error(
    "story error: {} (story type: {}, word count: {word_count})",
    .kind.reason(),
    .kind.type_label()
)]
pub struct StoryValidationError {
    kind: StoryErrorKind,
    word_count: u32,
}

impl StoryValidationError {
    pub fn new(kind: StoryErrorKind, word_count: u32) -> Self {
        Self { kind, word_count }
    }

    pub fn kind(&self) -> StoryErrorKind {
        self.kind
    }

    pub fn word_count(&self) -> u32 {
        self.word_count
    }

    pub fn reason(&self) -> &'static str {
        self.kind.reason()
    }

    /// The declared type when it was a known one.
    pub fn story_type(&self) -> Option<StoryType> {
        match self.kind {
            StoryErrorKind::WordCountOutOfRange(story_type) => Some(story_type),
            StoryErrorKind::InvalidType(_) => None,
        }
    }
}

impl PartialEq for StoryValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for StoryValidationError {}

impl StoryType {
    /// `Ok` iff `word_count` lies in this type's `(lower, upper]` band.
    pub fn validate_word_count(self, word_count: u32) -> Result<(), StoryValidationError> {
        if self.accepts(word_count) {
            Ok(())
        } else {
            Err(StoryValidationError::new(
                StoryErrorKind::WordCountOutOfRange(self),
                word_count,
            ))
        }
    }
}

/// Classify a declared numeric story type against a computed word count.
///
/// ```rust
/// use story::{StoryType, validate_word_count};
///
/// assert_eq!(validate_word_count(1, 500), Ok(StoryType::FlashFiction));
///
/// let err = validate_word_count(4, 1000).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "story error: word count for novella should be between 20,000 and 40,000 \
///      (story type: novella, word count: 1000)"
/// );
/// ```
pub fn validate_word_count(
    declared_type: i64,
    word_count: u32,
) -> Result<StoryType, StoryValidationError> {
    let story_type = StoryType::from_id(declared_type).ok_or_else(|| {
        StoryValidationError::new(StoryErrorKind::InvalidType(declared_type), word_count)
    })?;
    story_type.validate_word_count(word_count)?;
    Ok(story_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_fiction_full_range() {
        for wc in 0..=100 {
            assert!(validate_word_count(1, wc).is_err(), "wc={wc} should fail");
        }
        for wc in 101..=1000 {
            assert_eq!(validate_word_count(1, wc), Ok(StoryType::FlashFiction));
        }
        assert!(validate_word_count(1, 1001).is_err());
    }

    #[test]
    fn test_band_edges_for_every_type() {
        for story_type in StoryType::ALL {
            let (lower, upper) = story_type.word_range();
            assert!(story_type.validate_word_count(lower).is_err());
            assert!(story_type.validate_word_count(lower + 1).is_ok());
            assert!(story_type.validate_word_count(upper).is_ok());
            assert!(story_type.validate_word_count(upper + 1).is_err());
        }
    }

    #[test]
    fn test_range_messages() {
        let cases = [
            (
                1,
                5000,
                "story error: word count for flash fiction should be between 100 and 1000 \
                 (story type: flash_fiction, word count: 5000)",
            ),
            (
                2,
                1000,
                "story error: word count for short story should be between 1000 and 7500 \
                 (story type: short_story, word count: 1000)",
            ),
            (
                3,
                20001,
                "story error: word count for novelette should be between 7500 and 20,000 \
                 (story type: novelette, word count: 20001)",
            ),
            (
                4,
                1000,
                "story error: word count for novella should be between 20,000 and 40,000 \
                 (story type: novella, word count: 1000)",
            ),
        ];

        for (declared, wc, expected) in cases {
            let err = validate_word_count(declared, wc).unwrap_err();
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_invalid_type() {
        for declared in [0, 5, -1, 70_000, -40_000, i64::MAX] {
            let err = validate_word_count(declared, 500).unwrap_err();
            assert_eq!(err.kind(), StoryErrorKind::InvalidType(declared));
            assert_eq!(err.reason(), "invalid story type");
            assert!(err.story_type().is_none());
        }

        let err = validate_word_count(0, 500).unwrap_err();
        assert_eq!(
            err.to_string(),
            "story error: invalid story type (story type: , word count: 500)"
        );
    }

    #[test]
    fn test_equality_is_keyed_on_declared_type() {
        let a = validate_word_count(4, 10).unwrap_err();
        let b = validate_word_count(4, 99_999).unwrap_err();
        let c = validate_word_count(3, 10).unwrap_err();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a.word_count(), b.word_count());
    }

    #[test]
    fn test_classification_is_idempotent() {
        for (declared, wc) in [(1, 50), (2, 3000), (3, 7500), (9, 10)] {
            let first = validate_word_count(declared, wc);
            let second = validate_word_count(declared, wc);
            match (first, second) {
                (Ok(a), Ok(b)) => assert_eq!(a, b),
                (Err(a), Err(b)) => {
                    assert_eq!(a.kind(), b.kind());
                    assert_eq!(a.word_count(), b.word_count());
                    assert_eq!(a.to_string(), b.to_string());
                }
                _ => panic!("classification changed between calls"),
            }
        }
    }
}

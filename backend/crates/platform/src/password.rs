//! Password Policy and Secret Hashing
//!
//! - [`ClearTextPassword`]: NFKC-normalized, policy-checked, zeroized on drop
//! - [`SecretHasher`]: adaptive one-way hashing of arbitrary bytes
//! - [`Argon2Hasher`]: Argon2id implementation with optional pepper
//!
//! The same hasher protects account passwords and refresh-token digests, so it
//! accepts raw bytes rather than text.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

pub const MIN_PASSWORD_LENGTH: usize = 7;

pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("The password field must be at least {min} characters")]
    TooShort { min: usize, actual: usize },

    #[error("The password field must be at most {max} characters")]
    TooLong { max: usize, actual: usize },

    #[error("The password field is required")]
    EmptyOrWhitespace,

    #[error("The password field contains invalid control characters")]
    InvalidCharacter,
}

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization.
///
/// Not `Clone`, and `Debug` output is redacted.
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("hunter22".to_string()).unwrap();
/// assert_eq!(password.as_bytes(), b"hunter22");
/// assert!(ClearTextPassword::new("short".to_string()).is_err());
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Normalize with NFKC, then check length (in code points), blankness and
    /// control characters.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let raw = Zeroizing::new(raw);
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        if normalized
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Secret Hasher
// ============================================================================

/// Adaptive one-way hash over raw bytes, producing a self-describing string.
pub trait SecretHasher: Send + Sync {
    fn hash(&self, secret: &[u8]) -> Result<String, PasswordHashError>;

    /// `false` for a mismatch and for an unparseable `encoded` hash.
    fn verify(&self, secret: &[u8], encoded: &str) -> bool;
}

/// Argon2id with the crate defaults (m=19 MiB, t=2, p=1) and a random 128-bit salt.
///
/// When a pepper is configured it is appended to the secret before hashing and
/// must match at verification time.
#[derive(Clone, Default)]
pub struct Argon2Hasher {
    pepper: Option<Vec<u8>>,
}

impl Argon2Hasher {
    pub fn new(pepper: Option<Vec<u8>>) -> Self {
        Self { pepper }
    }

    fn peppered(&self, secret: &[u8]) -> Zeroizing<Vec<u8>> {
        let mut combined = secret.to_vec();
        if let Some(pepper) = &self.pepper {
            combined.extend_from_slice(pepper);
        }
        Zeroizing::new(combined)
    }
}

impl fmt::Debug for Argon2Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argon2Hasher")
            .field("pepper", &self.pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl SecretHasher for Argon2Hasher {
    fn hash(&self, secret: &[u8]) -> Result<String, PasswordHashError> {
        let input = self.peppered(secret);
        let salt = SaltString::generate(OsRng);

        let hash = Argon2::default()
            .hash_password(&input, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(hash.to_string())
    }

    fn verify(&self, secret: &[u8], encoded: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(encoded) else {
            return false;
        };
        let input = self.peppered(secret);

        Argon2::default().verify_password(&input, &parsed).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_too_short() {
        let result = ClearTextPassword::new("sixsix".to_string());
        assert_eq!(
            result.unwrap_err(),
            PasswordPolicyError::TooShort { min: 7, actual: 6 }
        );
    }

    #[test]
    fn test_password_minimum_length_accepted() {
        assert!(ClearTextPassword::new("seven77".to_string()).is_ok());
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = ClearTextPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_whitespace_only() {
        let result = ClearTextPassword::new("        ".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::EmptyOrWhitespace);
    }

    #[test]
    fn test_password_control_character() {
        let result = ClearTextPassword::new("abc\u{0007}defg".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::InvalidCharacter);
    }

    #[test]
    fn test_unicode_password_counts_code_points() {
        assert!(ClearTextPassword::new("パスワード安全".to_string()).is_ok());
    }

    #[test]
    fn test_policy_message() {
        let err = ClearTextPassword::new("abc".to_string()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The password field must be at least 7 characters"
        );
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2Hasher::default();
        let encoded = hasher.hash(b"TestPassword123!").unwrap();

        assert!(encoded.starts_with("$argon2id$"));
        assert!(PasswordHash::new(&encoded).is_ok());
        assert!(hasher.verify(b"TestPassword123!", &encoded));
        assert!(!hasher.verify(b"WrongPassword123!", &encoded));
    }

    #[test]
    fn test_hash_binary_digest() {
        let hasher = Argon2Hasher::default();
        let digest = [0xffu8, 0x00, 0x80, 0x7f];
        let encoded = hasher.hash(&digest).unwrap();
        assert!(hasher.verify(&digest, &encoded));
    }

    #[test]
    fn test_hash_with_pepper() {
        let peppered = Argon2Hasher::new(Some(b"my_secret_pepper".to_vec()));
        let encoded = peppered.hash(b"TestPassword123!").unwrap();

        assert!(peppered.verify(b"TestPassword123!", &encoded));
        assert!(!Argon2Hasher::default().verify(b"TestPassword123!", &encoded));
    }

    #[test]
    fn test_salted_hashes_differ() {
        let hasher = Argon2Hasher::default();
        assert_ne!(hasher.hash(b"same").unwrap(), hasher.hash(b"same").unwrap());
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(!Argon2Hasher::default().verify(b"anything", "not_a_valid_hash"));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret-value".to_string()).unwrap();
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret-value"));

        let hasher = Argon2Hasher::new(Some(b"pepper".to_vec()));
        assert!(format!("{:?}", hasher).contains("REDACTED"));
    }
}

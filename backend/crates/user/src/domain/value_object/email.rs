//! Email Value Object
//!
//! Format check only; ownership of the address is never verified.

use kernel::error::app_error::{AppError, AppResult};
use std::str::FromStr;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

const INVALID_EMAIL: &str = "The email field must be a valid email address";

/// Email address, trimmed and lowercased
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into().trim().to_lowercase();

        if email.is_empty() {
            return Err(AppError::bad_request("The email field is required"));
        }

        if email.len() > EMAIL_MAX_LENGTH || !Self::is_valid_format(&email) {
            return Err(AppError::bad_request(INVALID_EMAIL));
        }

        Ok(Self(email))
    }

    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty() || local.len() > 64 || domain.contains('@') {
            return false;
        }

        if local.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return false;
        }

        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        !(domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) || domain.contains(".."))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("reader@example.com").is_ok());
        assert!(Email::new("first.last@example.co.uk").is_ok());
        assert!(Email::new("reader+stories@example.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        for raw in [
            "readerexample.com",
            "reader@",
            "@example.com",
            "reader@@example.com",
            "reader@example",
            "reader@-example.com",
            "reader@example..com",
            "read er@example.com",
        ] {
            let err = Email::new(raw).unwrap_err();
            assert_eq!(err.message(), INVALID_EMAIL, "{raw}");
        }
    }

    #[test]
    fn test_email_required() {
        let err = Email::new("   ").unwrap_err();
        assert_eq!(err.message(), "The email field is required");
    }

    #[test]
    fn test_email_case_normalization() {
        let email: Email = " Reader@Example.COM ".parse().unwrap();
        assert_eq!(email.as_str(), "reader@example.com");
    }
}

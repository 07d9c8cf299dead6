//! Token Signing
//!
//! Compact JWS (`header.claims.signature`, base64url without padding) signed
//! with a keyed HMAC. The hash function is part of the [`SigningMethod`] so an
//! algorithm without a linked implementation fails at signing time.

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use platform::crypto::to_base64_url;
use serde::Serialize;
use sha2::{Sha256, Sha384, Sha512};
use std::fmt;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::domain::entity::claims::UserClaims;

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("the requested hash function is unavailable")]
    HashUnavailable,

    #[error("key is invalid")]
    InvalidKey,

    #[error("failed to encode token: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Hash functions a signing method may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFunction {
    Sha256,
    Sha384,
    Sha512,
    /// Recognised but not linked into this build
    Blake2b384,
}

impl HashFunction {
    pub const fn is_available(&self) -> bool {
        !matches!(self, Self::Blake2b384)
    }
}

/// Algorithm name written to the token header plus the HMAC hash function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningMethod {
    pub name: &'static str,
    pub hash: HashFunction,
}

impl SigningMethod {
    pub const HS256: Self = Self::new("HS256", HashFunction::Sha256);
    pub const HS384: Self = Self::new("HS384", HashFunction::Sha384);
    pub const HS512: Self = Self::new("HS512", HashFunction::Sha512);

    pub const fn new(name: &'static str, hash: HashFunction) -> Self {
        Self { name, hash }
    }
}

impl Default for SigningMethod {
    fn default() -> Self {
        Self::HS256
    }
}

/// Turns claims into a signed, self-contained token string.
pub trait TokenSigner: Send + Sync {
    fn sign(&self, claims: &UserClaims) -> Result<String, SigningError>;
}

#[derive(Serialize)]
struct Header {
    alg: &'static str,
    typ: &'static str,
}

/// HMAC signer over a shared secret.
#[derive(Clone)]
pub struct HmacSigner {
    key: Zeroizing<Vec<u8>>,
    method: SigningMethod,
}

impl HmacSigner {
    pub fn new(key: impl Into<Vec<u8>>, method: SigningMethod) -> Self {
        Self {
            key: Zeroizing::new(key.into()),
            method,
        }
    }

    fn mac(&self, data: &[u8]) -> Result<Vec<u8>, SigningError> {
        match self.method.hash {
            HashFunction::Sha256 => mac_with::<Hmac<Sha256>>(&self.key, data),
            HashFunction::Sha384 => mac_with::<Hmac<Sha384>>(&self.key, data),
            HashFunction::Sha512 => mac_with::<Hmac<Sha512>>(&self.key, data),
            HashFunction::Blake2b384 => Err(SigningError::HashUnavailable),
        }
    }
}

fn mac_with<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> Result<Vec<u8>, SigningError> {
    let mut mac = <M as Mac>::new_from_slice(key).map_err(|_| SigningError::InvalidKey)?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

impl TokenSigner for HmacSigner {
    fn sign(&self, claims: &UserClaims) -> Result<String, SigningError> {
        if !self.method.hash.is_available() {
            return Err(SigningError::HashUnavailable);
        }
        if self.key.is_empty() {
            return Err(SigningError::InvalidKey);
        }

        let header = serde_json::to_vec(&Header {
            alg: self.method.name,
            typ: "JWT",
        })?;
        let payload = serde_json::to_vec(claims)?;

        let signing_input = format!("{}.{}", to_base64_url(&header), to_base64_url(&payload));
        let signature = self.mac(signing_input.as_bytes())?;

        Ok(format!("{}.{}", signing_input, to_base64_url(&signature)))
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner")
            .field("key", &"[REDACTED]")
            .field("method", &self.method)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
    use chrono::{TimeZone, Utc};
    use kernel::id::UserId;

    fn from_base64_url(segment: &str) -> Vec<u8> {
        URL_SAFE_NO_PAD.decode(segment).unwrap()
    }

    fn claims() -> UserClaims {
        let expires_at = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        UserClaims::new(UserId::new(42).unwrap(), expires_at)
    }

    #[test]
    fn test_hs256_known_answer() {
        let signer = HmacSigner::new("secret", SigningMethod::HS256);
        let token = signer.sign(&claims()).unwrap();
        assert_eq!(
            token,
            "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
             eyJpZCI6NDIsImV4cCI6MTg5MzQ1NjAwMH0.\
             G8ouX_KHpAG9x01J-_s41hHJtRUlY9zo8D-H2FKzlmw"
        );
    }

    #[test]
    fn test_token_has_three_segments() {
        for method in [SigningMethod::HS256, SigningMethod::HS384, SigningMethod::HS512] {
            let token = HmacSigner::new("secret", method).sign(&claims()).unwrap();
            let parts: Vec<&str> = token.split('.').collect();
            assert_eq!(parts.len(), 3);

            let header = from_base64_url(parts[0]);
            let header: serde_json::Value = serde_json::from_slice(&header).unwrap();
            assert_eq!(header["alg"], method.name);
        }
    }

    #[test]
    fn test_signature_length_follows_hash() {
        let sig_len = |method| {
            let token = HmacSigner::new("secret", method).sign(&claims()).unwrap();
            from_base64_url(token.rsplit('.').next().unwrap()).len()
        };
        assert_eq!(sig_len(SigningMethod::HS256), 32);
        assert_eq!(sig_len(SigningMethod::HS384), 48);
        assert_eq!(sig_len(SigningMethod::HS512), 64);
    }

    #[test]
    fn test_unavailable_hash_function() {
        let method = SigningMethod::new("HS256", HashFunction::Blake2b384);
        let err = HmacSigner::new("secret", method).sign(&claims()).unwrap_err();
        assert!(matches!(err, SigningError::HashUnavailable));
        assert_eq!(err.to_string(), "the requested hash function is unavailable");
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let err = HmacSigner::new("", SigningMethod::HS256)
            .sign(&claims())
            .unwrap_err();
        assert!(matches!(err, SigningError::InvalidKey));
    }

    #[test]
    fn test_debug_redacts_key() {
        let debug = format!("{:?}", HmacSigner::new("top-secret", SigningMethod::HS256));
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("top-secret"));
    }
}

//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain vocabulary:
//! - Cryptographic utilities (SHA-256, Base64url, random bytes)
//! - Secret hashing (Argon2id) behind the [`password::SecretHasher`] seam
//! - Clear-text password policy with zeroization

pub mod crypto;
pub mod password;

//! Domain Layer
//!
//! Refresh-token records, claims, signing and persistence seams.

pub mod entity;
pub mod repository;
pub mod signing;

pub use entity::{claims::UserClaims, credential::Credential, token::Token};
pub use repository::{CredentialRepository, TokenSaver};
pub use signing::{HashFunction, HmacSigner, SigningError, SigningMethod, TokenSigner};

//! Application Layer
//!
//! Refresh-token issuance and the sign-in use case.

pub mod config;
pub mod issue_token;
pub mod sign_in;

pub use issue_token::TokenIssuer;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};

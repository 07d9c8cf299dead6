//! Shared Kernel - vocabulary shared by every bounded context
//!
//! - Unified error type, error kinds and conversions from library errors
//! - Typed serial ids for users and stories
//! - The JSON response envelope returned by every endpoint
//! - Field validation rules shared by the request payloads

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod response;
pub mod validation;

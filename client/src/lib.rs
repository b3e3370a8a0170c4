//! # IdVerify Client
//!
//! Browser-side half of the verification flow, usable from any Rust
//! front end:
//! - `api` - typed HTTP client for `/api/verification/*`
//! - `session` - session-scoped storage for the correlation id
//! - `auth` - device class, fallback strategy and the authentication widget seam
//! - `flow` - the phone → authenticate → personal info wizard

pub mod api;
pub mod auth;
pub mod error;
pub mod flow;
pub mod session;

#[cfg(test)]
mod tests;

pub use api::{VerificationApi, VerificationApiClient};
pub use auth::{AuthResult, AuthStrategy, Authenticator, DeviceClass};
pub use error::{ClientError, ClientResult};
pub use flow::VerificationFlow;
pub use session::{MemorySessionStore, SessionStore};

//! Domain entities with lifecycle and state.

pub mod access_token;
pub mod session;

#[cfg(test)]
mod tests;

pub use access_token::{CachedToken, DEFAULT_REFRESH_MARGIN_SECONDS};
pub use session::{VerificationSession, VerificationStep, CORRELATION_ID_KEY};

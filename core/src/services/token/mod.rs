//! Provider access token management
//!
//! Keeps one client-credentials token per process and refreshes it a fixed
//! margin before the provider-reported expiry.

mod cache;
mod clock;
mod config;

#[cfg(test)]
mod tests;

pub use cache::TokenCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::TokenCacheConfig;

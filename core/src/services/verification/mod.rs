//! Verification orchestration module
//!
//! This module provides the start → validate → complete workflow:
//! - Provider trait implemented by the HTTPS adapter and the in-process mock
//! - Orchestrator sharing one token cache across all calls
//! - Error wrapping with caller-facing summaries

mod mock;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use mock::{MockVerificationProvider, RecordedCall};
pub use service::{
    VerificationService, COMPLETION_FAILED_MESSAGE, START_FAILED_MESSAGE,
    VALIDATION_FAILED_MESSAGE,
};
pub use traits::VerificationProviderTrait;

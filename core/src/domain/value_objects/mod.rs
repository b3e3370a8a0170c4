//! Value objects exchanged between the orchestrator and the provider.

pub mod requests;
pub mod results;

#[cfg(test)]
mod tests;

pub use requests::{
    CompleteVerificationRequest, IndividualProfile, PostalAddress, StartVerificationRequest,
    ValidateVerificationRequest,
};
pub use results::{
    CompletionResult, ProviderOutcome, StartVerificationResult, TokenGrant, ValidationResult,
};

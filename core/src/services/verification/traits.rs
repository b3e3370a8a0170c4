//! Trait for the remote identity-verification provider

use async_trait::async_trait;

use crate::domain::value_objects::{
    CompletionResult, IndividualProfile, ProviderOutcome, StartVerificationRequest,
    StartVerificationResult, TokenGrant, ValidationResult,
};
use crate::errors::ProviderError;

/// Trait for verification provider integration
///
/// Implementations issue one remote call per method and never retry.
#[async_trait]
pub trait VerificationProviderTrait: Send + Sync {
    /// Exchange client credentials for a bearer token
    async fn request_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<TokenGrant, ProviderError>;

    /// Begin a phone-based verification
    async fn start_verification(
        &self,
        access_token: &str,
        request: &StartVerificationRequest,
    ) -> Result<StartVerificationResult, ProviderError>;

    /// Ask the provider whether phone possession was proven
    async fn validate_phone(
        &self,
        access_token: &str,
        correlation_id: &str,
    ) -> Result<ProviderOutcome<ValidationResult>, ProviderError>;

    /// Submit the identity details for the final check
    async fn complete_verification(
        &self,
        access_token: &str,
        correlation_id: &str,
        individual: &IndividualProfile,
    ) -> Result<ProviderOutcome<CompletionResult>, ProviderError>;
}

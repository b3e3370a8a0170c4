//! Verification orchestrator

use idv_shared::utils::mask_phone_number;
use std::sync::Arc;

use crate::domain::value_objects::{
    CompleteVerificationRequest, CompletionResult, ProviderOutcome, StartVerificationRequest,
    StartVerificationResult, ValidateVerificationRequest, ValidationResult,
};
use crate::errors::{DomainError, DomainResult, ProviderError};
use crate::services::token::TokenCache;

use super::traits::VerificationProviderTrait;

pub const START_FAILED_MESSAGE: &str = "Failed to start verification process";
pub const VALIDATION_FAILED_MESSAGE: &str = "Phone validation failed";
pub const COMPLETION_FAILED_MESSAGE: &str = "Verification completion failed";

/// Drives start, validate and complete against the provider.
///
/// Every call obtains a bearer token from the shared cache first. Provider
/// faults are logged and wrapped into `DomainError::Application`; a
/// `Rejected` outcome is a normal result and is returned as is.
pub struct VerificationService<P: VerificationProviderTrait + ?Sized> {
    provider: Arc<P>,
    token_cache: Arc<TokenCache<P>>,
}

impl<P: VerificationProviderTrait + ?Sized> VerificationService<P> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `provider` - Provider adapter
    /// * `token_cache` - Token cache wrapping the same provider
    pub fn new(provider: Arc<P>, token_cache: Arc<TokenCache<P>>) -> Self {
        Self {
            provider,
            token_cache,
        }
    }

    /// Start a verification for a phone number
    ///
    /// # Returns
    ///
    /// * `Ok(StartVerificationResult)` - Auth token and a fresh correlation id
    /// * `Err(DomainError::Application)` - Token or provider failure
    pub async fn start_verification(
        &self,
        request: StartVerificationRequest,
    ) -> DomainResult<StartVerificationResult> {
        let masked_phone = mask_phone_number(request.phone_number());
        tracing::info!(
            phone = %masked_phone,
            flow_type = request.flow_type(),
            event = "verification_start_requested",
            "Starting verification"
        );

        let result = async {
            let token = self.token_cache.get_token().await?;
            self.provider.start_verification(&token, &request).await
        }
        .await
        .map_err(|e| self.wrap_failure(e, START_FAILED_MESSAGE, "verification_start_failed"))?;

        tracing::info!(
            phone = %masked_phone,
            correlation_id = %result.correlation_id,
            event = "verification_started",
            "Verification started"
        );

        Ok(result)
    }

    /// Check phone possession for an ongoing verification
    pub async fn validate_phone(
        &self,
        request: ValidateVerificationRequest,
    ) -> DomainResult<ProviderOutcome<ValidationResult>> {
        let correlation_id = request.correlation_id();

        let outcome = async {
            let token = self.token_cache.get_token().await?;
            self.provider.validate_phone(&token, correlation_id).await
        }
        .await
        .map_err(|e| self.wrap_failure(e, VALIDATION_FAILED_MESSAGE, "phone_validation_failed"))?;

        tracing::info!(
            correlation_id = correlation_id,
            accepted = outcome.is_accepted(),
            event = "phone_validated",
            "Phone validation finished"
        );

        Ok(outcome)
    }

    /// Submit the individual's details to finish a verification
    pub async fn complete_verification(
        &self,
        request: CompleteVerificationRequest,
    ) -> DomainResult<ProviderOutcome<CompletionResult>> {
        let correlation_id = request.correlation_id();

        let outcome = async {
            let token = self.token_cache.get_token().await?;
            self.provider
                .complete_verification(&token, correlation_id, request.individual())
                .await
        }
        .await
        .map_err(|e| {
            self.wrap_failure(e, COMPLETION_FAILED_MESSAGE, "verification_completion_failed")
        })?;

        tracing::info!(
            correlation_id = correlation_id,
            accepted = outcome.is_accepted(),
            event = "verification_completed",
            "Verification completion finished"
        );

        Ok(outcome)
    }

    fn wrap_failure(&self, error: ProviderError, message: &str, event: &str) -> DomainError {
        tracing::error!(error = %error, event = event, "{}", message);
        DomainError::application(message, error)
    }
}

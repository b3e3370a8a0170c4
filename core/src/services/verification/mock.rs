//! In-process provider for development and tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use uuid::Uuid;

use crate::domain::value_objects::{
    CompletionResult, IndividualProfile, ProviderOutcome, StartVerificationRequest,
    StartVerificationResult, TokenGrant, ValidationResult,
};
use crate::errors::ProviderError;

use super::service::{COMPLETION_FAILED_MESSAGE, VALIDATION_FAILED_MESSAGE};
use super::traits::VerificationProviderTrait;

/// A call received by the mock, in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Token,
    Start { phone_number: String, flow_type: String },
    Validate { correlation_id: String },
    Complete { correlation_id: String, first_name: String },
}

/// Scriptable verification provider.
///
/// By default every call succeeds: tokens live one hour, each start returns a
/// new random correlation id, validate and complete accept.
pub struct MockVerificationProvider {
    token_requests: AtomicUsize,
    token_lifetime_seconds: i64,
    token_delay: Option<Duration>,
    pub fail_token: bool,
    pub fail_start: bool,
    pub fail_validate: bool,
    pub fail_complete: bool,
    pub reject_validate: bool,
    pub reject_complete: bool,
    fixed_start: Option<StartVerificationResult>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl Default for MockVerificationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockVerificationProvider {
    pub fn new() -> Self {
        Self {
            token_requests: AtomicUsize::new(0),
            token_lifetime_seconds: 3600,
            token_delay: None,
            fail_token: false,
            fail_start: false,
            fail_validate: false,
            fail_complete: false,
            reject_validate: false,
            reject_complete: false,
            fixed_start: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_token_lifetime(mut self, seconds: i64) -> Self {
        self.token_lifetime_seconds = seconds;
        self
    }

    /// Hold each token request open for `delay` before answering
    pub fn with_token_delay(mut self, delay: Duration) -> Self {
        self.token_delay = Some(delay);
        self
    }

    /// Always answer start with this result
    pub fn with_start_result(mut self, result: StartVerificationResult) -> Self {
        self.fixed_start = Some(result);
        self
    }

    /// Number of token exchanges performed so far
    pub fn token_requests(&self) -> usize {
        self.token_requests.load(Ordering::SeqCst)
    }

    /// Every call received so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: RecordedCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    fn next_steps(step: &str) -> HashMap<String, String> {
        HashMap::from([(step.to_string(), "v3-".to_string() + step)])
    }
}

#[async_trait]
impl VerificationProviderTrait for MockVerificationProvider {
    async fn request_token(
        &self,
        _client_id: &str,
        _client_secret: &str,
    ) -> Result<TokenGrant, ProviderError> {
        let count = self.token_requests.fetch_add(1, Ordering::SeqCst) + 1;
        self.record(RecordedCall::Token);

        if let Some(delay) = self.token_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_token {
            return Err(ProviderError::authentication("mock token endpoint unavailable"));
        }

        Ok(TokenGrant::new(
            format!("mock-token-{}", count),
            self.token_lifetime_seconds,
        ))
    }

    async fn start_verification(
        &self,
        _access_token: &str,
        request: &StartVerificationRequest,
    ) -> Result<StartVerificationResult, ProviderError> {
        self.record(RecordedCall::Start {
            phone_number: request.phone_number().to_string(),
            flow_type: request.flow_type().to_string(),
        });

        if self.fail_start {
            return Err(ProviderError::verification("mock start failed"));
        }

        Ok(self.fixed_start.clone().unwrap_or_else(|| StartVerificationResult {
            auth_token: format!("mock-auth-{}", Uuid::new_v4()),
            correlation_id: Uuid::new_v4().to_string(),
        }))
    }

    async fn validate_phone(
        &self,
        _access_token: &str,
        correlation_id: &str,
    ) -> Result<ProviderOutcome<ValidationResult>, ProviderError> {
        self.record(RecordedCall::Validate {
            correlation_id: correlation_id.to_string(),
        });

        if self.fail_validate {
            return Err(ProviderError::verification("mock validate failed"));
        }
        if self.reject_validate {
            return Ok(ProviderOutcome::rejected(VALIDATION_FAILED_MESSAGE));
        }

        Ok(ProviderOutcome::Accepted(ValidationResult {
            success: true,
            challenge_missing: false,
            phone_number: Some("2001001686".to_string()),
            next: Self::next_steps("complete"),
        }))
    }

    async fn complete_verification(
        &self,
        _access_token: &str,
        correlation_id: &str,
        individual: &IndividualProfile,
    ) -> Result<ProviderOutcome<CompletionResult>, ProviderError> {
        self.record(RecordedCall::Complete {
            correlation_id: correlation_id.to_string(),
            first_name: individual.first_name.clone(),
        });

        if self.fail_complete {
            return Err(ProviderError::verification("mock complete failed"));
        }
        if self.reject_complete {
            return Ok(ProviderOutcome::rejected(COMPLETION_FAILED_MESSAGE));
        }

        Ok(ProviderOutcome::Accepted(CompletionResult {
            success: true,
            change_detected: false,
            next: Self::next_steps("done"),
        }))
    }
}

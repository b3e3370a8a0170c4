//! HTTPS client for the provider's v3 API
//!
//! One request per operation, no retries, reqwest's default timeouts.
//! Faults are mapped into the core `ProviderError` kinds: anything that goes
//! wrong during the token exchange is `Authentication`, everything else is
//! `Verification`.

use async_trait::async_trait;
use idv_shared::config::ProviderSettings;
use idv_shared::utils::mask_phone_number;
use serde::de::DeserializeOwned;

use idv_core::domain::value_objects::{
    CompletionResult, IndividualProfile, ProviderOutcome, StartVerificationRequest,
    StartVerificationResult, TokenGrant, ValidationResult,
};
use idv_core::errors::ProviderError;
use idv_core::services::verification::{
    VerificationProviderTrait, COMPLETION_FAILED_MESSAGE, VALIDATION_FAILED_MESSAGE,
};

use super::environment::ServerEnvironment;
use super::models::{
    CompleteRequestBody, CompleteResponseBody, StartRequestBody, StartResponseBody,
    TokenResponse, ValidateRequestBody, ValidateResponseBody,
};
use crate::InfrastructureError;

/// Redirect target sent with every start call
pub const FINAL_TARGET_URL: &str = "https://www.example.com";
/// Let the user retry the one-time passcode
pub const ALLOW_OTP_RETRY: bool = true;
// TODO: thread the caller's address from the HTTP layer instead of a loopback placeholder
pub const PLACEHOLDER_CLIENT_IP: &str = "127.0.0.1";

/// Provider API client over HTTPS
#[derive(Debug, Clone)]
pub struct ProveApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProveApiClient {
    /// Client for one of the fixed server environments
    pub fn new(environment: ServerEnvironment) -> Self {
        Self::with_base_url(environment.base_url())
    }

    /// Client against an explicit base URL, e.g. a local stub
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build from settings; an explicit base URL overrides the environment
    ///
    /// # Errors
    ///
    /// * `InfrastructureError::Config` - The base URL override is not a valid URL
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self, InfrastructureError> {
        match settings.base_url.as_deref().filter(|url| !url.trim().is_empty()) {
            Some(url) => {
                reqwest::Url::parse(url).map_err(|e| {
                    InfrastructureError::Config(format!("Invalid provider base URL '{}': {}", url, e))
                })?;
                Ok(Self::with_base_url(url))
            }
            None => Ok(Self::new(ServerEnvironment::from_name(
                &settings.server_environment,
            ))),
        }
    }

    /// Replace the underlying reqwest client
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn fetch_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<TokenGrant, InfrastructureError> {
        let params = [
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .http
            .post(self.endpoint("token"))
            .form(&params)
            .send()
            .await?;

        let response = Self::ensure_success(response, "token request").await?;
        Self::read_payload::<TokenResponse>(response)
            .await?
            .and_then(TokenResponse::into_grant)
            .ok_or_else(|| InfrastructureError::Provider("token request returned no token".to_string()))
    }

    async fn post_json<B, T>(
        &self,
        access_token: &str,
        path: &str,
        body: &B,
        operation: &'static str,
    ) -> Result<Option<T>, InfrastructureError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(access_token)
            .json(body)
            .send()
            .await?;

        let response = Self::ensure_success(response, operation).await?;
        Self::read_payload(response).await
    }

    /// Checks HTTP response status; returns the response on success or an error with details.
    async fn ensure_success(
        response: reqwest::Response,
        operation: &'static str,
    ) -> Result<reqwest::Response, InfrastructureError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            operation = operation,
            status = status,
            event = "provider_error_status",
            "Provider returned a non-success status"
        );
        Err(InfrastructureError::Provider(format!(
            "{} returned status {}: {}",
            operation, status, body
        )))
    }

    /// An empty body or a JSON `null` means the provider sent no payload
    async fn read_payload<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Option<T>, InfrastructureError> {
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice::<Option<T>>(&bytes)
            .map_err(|e| InfrastructureError::Provider(format!("Malformed provider payload: {}", e)))
    }
}

#[async_trait]
impl VerificationProviderTrait for ProveApiClient {
    async fn request_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<TokenGrant, ProviderError> {
        tracing::debug!(event = "provider_token_request", "Requesting provider access token");
        self.fetch_token(client_id, client_secret)
            .await
            .map_err(|e| ProviderError::authentication(e.to_string()))
    }

    async fn start_verification(
        &self,
        access_token: &str,
        request: &StartVerificationRequest,
    ) -> Result<StartVerificationResult, ProviderError> {
        let body = StartRequestBody {
            phone_number: request.phone_number(),
            ssn: request.ssn_last_four(),
            flow_type: request.flow_type(),
            final_target_url: FINAL_TARGET_URL,
            allow_otp_retry: ALLOW_OTP_RETRY,
            ip_address: PLACEHOLDER_CLIENT_IP,
        };
        tracing::debug!(
            phone = %mask_phone_number(request.phone_number()),
            event = "provider_start_request",
            "Calling provider start"
        );

        self.post_json::<_, StartResponseBody>(access_token, "v3/start", &body, "start request")
            .await
            .map_err(|e| ProviderError::verification(e.to_string()))?
            .map(StartVerificationResult::from)
            .ok_or_else(|| ProviderError::verification("start request returned no payload"))
    }

    async fn validate_phone(
        &self,
        access_token: &str,
        correlation_id: &str,
    ) -> Result<ProviderOutcome<ValidationResult>, ProviderError> {
        let body = ValidateRequestBody { correlation_id };

        let payload = self
            .post_json::<_, ValidateResponseBody>(access_token, "v3/validate", &body, "validate request")
            .await
            .map_err(|e| ProviderError::verification(e.to_string()))?;

        Ok(match payload {
            Some(result) => ProviderOutcome::Accepted(result),
            None => ProviderOutcome::rejected(VALIDATION_FAILED_MESSAGE),
        })
    }

    async fn complete_verification(
        &self,
        access_token: &str,
        correlation_id: &str,
        individual: &IndividualProfile,
    ) -> Result<ProviderOutcome<CompletionResult>, ProviderError> {
        let body = CompleteRequestBody {
            correlation_id,
            individual: individual.into(),
        };

        let payload = self
            .post_json::<_, CompleteResponseBody>(access_token, "v3/complete", &body, "complete request")
            .await
            .map_err(|e| ProviderError::verification(e.to_string()))?;

        Ok(match payload {
            Some(result) => ProviderOutcome::Accepted(result),
            None => ProviderOutcome::rejected(COMPLETION_FAILED_MESSAGE),
        })
    }
}

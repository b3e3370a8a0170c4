//! Typed HTTP client for the verification endpoints

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use idv_core::domain::value_objects::{
    CompleteVerificationRequest, CompletionResult, IndividualProfile, ProviderOutcome,
    StartVerificationRequest, StartVerificationResult, ValidateVerificationRequest,
    ValidationResult,
};
use idv_shared::types::ApiResponse;

use crate::error::{ClientError, ClientResult};

/// The three backend calls the wizard makes
#[async_trait]
pub trait VerificationApi: Send + Sync {
    async fn start(&self, request: &StartVerificationRequest) -> ClientResult<StartVerificationResult>;

    async fn validate(
        &self,
        request: &ValidateVerificationRequest,
    ) -> ClientResult<ProviderOutcome<ValidationResult>>;

    async fn complete(
        &self,
        request: &CompleteVerificationRequest,
    ) -> ClientResult<ProviderOutcome<CompletionResult>>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartBody<'a> {
    phone_number: &'a str,
    #[serde(rename = "lastFourSSN")]
    last_four_ssn: &'a str,
    flow_type: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateBody<'a> {
    correlation_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompleteBody<'a> {
    correlation_id: &'a str,
    individual: &'a IndividualProfile,
}

/// `reqwest` implementation against a running server
#[derive(Debug, Clone)]
pub struct VerificationApiClient {
    http: Client,
    base_url: String,
}

impl VerificationApiClient {
    /// `base_url` is the server root, e.g. `http://localhost:8080`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, T>(&self, endpoint: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}/api/verification/{}", self.base_url, endpoint);
        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        let envelope: ApiResponse<T> = response.json().await?;

        if !status.is_success() || !envelope.success {
            let message = envelope
                .message
                .unwrap_or_else(|| "An error occurred".to_string());
            tracing::warn!(
                endpoint = endpoint,
                status = status.as_u16(),
                event = "verification_api_error",
                "{}",
                message
            );
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
                errors: envelope.errors.unwrap_or_default(),
            });
        }

        envelope.data.ok_or_else(|| ClientError::Api {
            status: status.as_u16(),
            message: format!("Response to {} carried no data", endpoint),
            errors: Default::default(),
        })
    }
}

#[async_trait]
impl VerificationApi for VerificationApiClient {
    async fn start(&self, request: &StartVerificationRequest) -> ClientResult<StartVerificationResult> {
        let body = StartBody {
            phone_number: request.phone_number(),
            last_four_ssn: request.ssn_last_four(),
            flow_type: request.flow_type(),
        };
        self.post("start", &body).await
    }

    async fn validate(
        &self,
        request: &ValidateVerificationRequest,
    ) -> ClientResult<ProviderOutcome<ValidationResult>> {
        let body = ValidateBody {
            correlation_id: request.correlation_id(),
        };
        self.post("validate", &body).await
    }

    async fn complete(
        &self,
        request: &CompleteVerificationRequest,
    ) -> ClientResult<ProviderOutcome<CompletionResult>> {
        let body = CompleteBody {
            correlation_id: request.correlation_id(),
            individual: request.individual(),
        };
        self.post("complete", &body).await
    }
}

#[async_trait]
impl<T: VerificationApi + ?Sized> VerificationApi for std::sync::Arc<T> {
    async fn start(&self, request: &StartVerificationRequest) -> ClientResult<StartVerificationResult> {
        (**self).start(request).await
    }

    async fn validate(
        &self,
        request: &ValidateVerificationRequest,
    ) -> ClientResult<ProviderOutcome<ValidationResult>> {
        (**self).validate(request).await
    }

    async fn complete(
        &self,
        request: &CompleteVerificationRequest,
    ) -> ClientResult<ProviderOutcome<CompletionResult>> {
        (**self).complete(request).await
    }
}

//! Request and response bodies of the provider's v3 API

use serde::{Deserialize, Serialize};

use idv_core::domain::value_objects::{
    CompletionResult, IndividualProfile, StartVerificationResult, TokenGrant, ValidationResult,
};

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<i64>,
}

impl TokenResponse {
    pub fn into_grant(self) -> Option<TokenGrant> {
        match (self.access_token, self.expires_in) {
            (Some(token), Some(expires_in)) if !token.is_empty() => {
                Some(TokenGrant::new(token, expires_in))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StartRequestBody<'a> {
    pub phone_number: &'a str,
    pub ssn: &'a str,
    pub flow_type: &'a str,
    pub final_target_url: &'a str,
    #[serde(rename = "allowOTPRetry")]
    pub allow_otp_retry: bool,
    pub ip_address: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StartResponseBody {
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default)]
    pub correlation_id: Option<String>,
}

impl From<StartResponseBody> for StartVerificationResult {
    fn from(body: StartResponseBody) -> Self {
        Self {
            auth_token: body.auth_token.unwrap_or_default(),
            correlation_id: body.correlation_id.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidateRequestBody<'a> {
    pub correlation_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompleteRequestBody<'a> {
    pub correlation_id: &'a str,
    pub individual: IndividualBody<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IndividualBody<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email_addresses: &'a [String],
    pub addresses: Vec<AddressBody<'a>>,
    pub dob: &'a str,
    pub ssn: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddressBody<'a> {
    pub address: &'a str,
    pub city: &'a str,
    pub postal_code: &'a str,
}

impl<'a> From<&'a IndividualProfile> for IndividualBody<'a> {
    fn from(profile: &'a IndividualProfile) -> Self {
        Self {
            first_name: &profile.first_name,
            last_name: &profile.last_name,
            email_addresses: &profile.email_addresses,
            addresses: profile
                .addresses
                .iter()
                .map(|a| AddressBody {
                    address: &a.address,
                    city: &a.city,
                    postal_code: &a.post_code,
                })
                .collect(),
            dob: &profile.dob,
            ssn: &profile.ssn,
        }
    }
}

/// Validate and complete answers are passed through as the domain types
pub(crate) type ValidateResponseBody = ValidationResult;
pub(crate) type CompleteResponseBody = CompletionResult;

//! Provider responses as seen by the domain.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// Token issued by the client-credentials exchange
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    /// Lifetime in seconds as reported by the provider
    pub expires_in: i64,
}

impl TokenGrant {
    pub fn new(access_token: impl Into<String>, expires_in: i64) -> Self {
        Self {
            access_token: access_token.into(),
            expires_in,
        }
    }
}

impl std::fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenGrant")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Result of a successful start call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartVerificationResult {
    /// Handed to the browser authentication widget
    pub auth_token: String,
    /// Ties the validate and complete calls to this verification
    pub correlation_id: String,
}

/// Provider verdict on the phone possession check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub challenge_missing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub next: HashMap<String, String>,
}

/// Provider verdict on the submitted identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub change_detected: bool,
    #[serde(default)]
    pub next: HashMap<String, String>,
}

/// Outcome of a validate or complete call that reached the provider.
///
/// `Rejected` means the provider answered without a usable payload. It is a
/// normal business result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutcome<T> {
    Accepted(T),
    Rejected { reason: String },
}

impl<T> ProviderOutcome<T> {
    pub fn rejected(reason: impl Into<String>) -> Self {
        ProviderOutcome::Rejected {
            reason: reason.into(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ProviderOutcome::Accepted(_))
    }

    pub fn accepted(&self) -> Option<&T> {
        match self {
            ProviderOutcome::Accepted(data) => Some(data),
            ProviderOutcome::Rejected { .. } => None,
        }
    }

    pub fn into_accepted(self) -> Option<T> {
        match self {
            ProviderOutcome::Accepted(data) => Some(data),
            ProviderOutcome::Rejected { .. } => None,
        }
    }
}

// {"success": true, "data": ...} / {"success": false, "message": ...}
impl<T: Serialize> Serialize for ProviderOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProviderOutcome", 2)?;
        match self {
            ProviderOutcome::Accepted(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            ProviderOutcome::Rejected { reason } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("message", reason)?;
            }
        }
        state.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ProviderOutcome<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw<T> {
            success: bool,
            data: Option<T>,
            message: Option<String>,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        match (raw.success, raw.data) {
            (true, Some(data)) => Ok(ProviderOutcome::Accepted(data)),
            (true, None) => Err(serde::de::Error::missing_field("data")),
            (false, _) => Ok(ProviderOutcome::Rejected {
                reason: raw.message.unwrap_or_default(),
            }),
        }
    }
}

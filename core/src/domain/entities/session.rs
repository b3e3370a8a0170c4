//! Client-side verification session state.

use serde::{Deserialize, Serialize};

/// Session storage key under which the correlation id is persisted
pub const CORRELATION_ID_KEY: &str = "correlationId";

/// Position in the verification wizard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerificationStep {
    /// Phone number and SSN suffix entry
    #[default]
    Phone,
    /// Handed off to the vendor authentication widget
    Authenticate,
    /// Full profile entry
    PersonalInfo,
    /// Terminal state
    Success,
}

impl VerificationStep {
    /// One-based step number as shown in the progress bar; `None` once finished
    pub fn number(&self) -> Option<u8> {
        match self {
            VerificationStep::Phone => Some(1),
            VerificationStep::Authenticate => Some(2),
            VerificationStep::PersonalInfo => Some(3),
            VerificationStep::Success => None,
        }
    }
}

/// State of one user's walk through start → validate → complete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationSession {
    /// Issued by the provider on start
    pub correlation_id: Option<String>,
    /// Short-lived token for the authentication widget
    pub auth_token: Option<String>,
    pub current_step: VerificationStep,
}

impl VerificationSession {
    /// A session resumed after a reload: only the correlation id survives
    pub fn resumed(correlation_id: Option<String>) -> Self {
        Self {
            correlation_id,
            auth_token: None,
            current_step: VerificationStep::Phone,
        }
    }

    /// Record a successful start and move to the authentication step
    pub fn started(&mut self, correlation_id: String, auth_token: String) {
        self.correlation_id = Some(correlation_id);
        self.auth_token = Some(auth_token);
        self.current_step = VerificationStep::Authenticate;
    }

    /// Drop everything and return to the first step
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_complete(&self) -> bool {
        self.current_step == VerificationStep::Success
    }
}

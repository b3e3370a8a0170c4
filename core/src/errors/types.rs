//! Error types for request validation and provider calls
//!
//! Messages here are meant for logs. The presentation layer decides what,
//! if anything, reaches the client.

use thiserror::Error;

/// Validation errors raised while building request value objects
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length for field: {field} (expected: {expected}, actual: {actual})")]
    InvalidLength {
        field: String,
        expected: usize,
        actual: usize,
    },
}

impl ValidationError {
    pub(crate) fn required(field: &str) -> Self {
        ValidationError::RequiredField {
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid_format(field: &str) -> Self {
        ValidationError::InvalidFormat {
            field: field.to_string(),
        }
    }

    /// Name of the offending field, as exposed on the HTTP surface
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::InvalidLength { field, .. } => field,
        }
    }
}

/// Failures reported by the verification provider adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The client-credentials exchange failed or returned no token
    #[error("Authentication with verification provider failed: {message}")]
    Authentication { message: String },

    /// A start/validate/complete call failed in transport or returned no usable payload
    #[error("Verification provider request failed: {message}")]
    Verification { message: String },
}

impl ProviderError {
    pub fn authentication(message: impl Into<String>) -> Self {
        ProviderError::Authentication {
            message: message.into(),
        }
    }

    pub fn verification(message: impl Into<String>) -> Self {
        ProviderError::Verification {
            message: message.into(),
        }
    }
}

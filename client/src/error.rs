//! Client-side error types

use idv_core::errors::ValidationError;
use idv_shared::types::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Input rejected before anything was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request never produced a readable response
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with `success: false`
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        errors: FieldErrors,
    },

    /// The authentication widget reported failure
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// No correlation id: start was never called or the session was reset
    #[error("No verification in progress")]
    MissingSession,

    /// The provider answered but declined the step
    #[error("{0}")]
    Rejected(String),
}

impl ClientError {
    /// Per-field messages from a 400 response, empty otherwise
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ClientError::Api { errors, .. } if !errors.is_empty() => Some(errors),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

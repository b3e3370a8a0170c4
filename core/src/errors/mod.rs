//! Domain-specific error types and error handling.

mod types;


pub use types::{ProviderError, ValidationError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Malformed input; never retried
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// A downstream fault, wrapped with a caller-facing summary.
    /// The provider error stays attached as the source for logging.
    #[error("{message}")]
    Application {
        message: String,
        #[source]
        source: ProviderError,
    },
}

impl DomainError {
    pub fn application(message: impl Into<String>, source: ProviderError) -> Self {
        DomainError::Application {
            message: message.into(),
            source,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the identity
//! verification backend. It provides the HTTPS implementation of the core
//! provider trait and the factory that selects a provider from configuration.
//!
//! ## Architecture
//!
//! - **Provider**: `reqwest` client for the provider's token and v3 endpoints
//! - **Environments**: fixed set of provider deployments (`uat-us`, `prod-us`,
//!   `uat-eu`, `prod-eu`)

// Re-export core types for convenience
pub use idv_core::errors::*;

/// Provider module - HTTPS adapter and factory
pub mod provider;

pub use provider::{create_provider, ProveApiClient, ServerEnvironment};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider answered with an error status or an unusable payload
    #[error("Provider error: {0}")]
    Provider(String),
}

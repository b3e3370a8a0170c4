//! Verification Provider Module
//!
//! HTTPS adapter for the identity verification provider plus the factory
//! that picks between it and the in-process mock.

pub mod environment;
pub mod http_client;
mod models;

#[cfg(test)]
mod tests;

use idv_shared::config::{Environment, ProviderKind, ProviderSettings};
use std::sync::Arc;

use idv_core::services::verification::{MockVerificationProvider, VerificationProviderTrait};

use crate::InfrastructureError;

pub use environment::ServerEnvironment;
pub use http_client::ProveApiClient;

/// Create the provider selected by configuration
///
/// The mock accepts every identity, so it is refused in production.
///
/// # Errors
///
/// * `InfrastructureError::Config` - The mock was selected in production, or
///   the remote provider was selected without credentials or with an invalid
///   base URL
pub fn create_provider(
    settings: &ProviderSettings,
    environment: Environment,
) -> Result<Arc<dyn VerificationProviderTrait>, InfrastructureError> {
    match settings.provider {
        ProviderKind::Mock if environment.is_production() => {
            tracing::error!(
                environment = %environment,
                event = "mock_provider_refused",
                "Mock verification provider is not allowed in production"
            );
            Err(InfrastructureError::Config(
                "PROVIDER=mock is not allowed in production; set PROVIDER=prove with credentials"
                    .to_string(),
            ))
        }
        ProviderKind::Mock => {
            tracing::warn!(
                environment = %environment,
                event = "mock_provider_selected",
                "Using in-process mock verification provider"
            );
            Ok(Arc::new(MockVerificationProvider::new()))
        }
        ProviderKind::Prove => {
            if !settings.has_credentials() {
                return Err(InfrastructureError::Config(
                    "PROVIDER_CLIENT_ID and PROVIDER_CLIENT_SECRET must be set".to_string(),
                ));
            }
            let client = ProveApiClient::from_settings(settings)?;
            tracing::info!(
                base_url = client.base_url(),
                event = "remote_provider_selected",
                "Using remote verification provider"
            );
            Ok(Arc::new(client))
        }
    }
}

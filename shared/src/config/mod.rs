//! Configuration module
//!
//! - `environment` - Environment detection
//! - `provider` - Verification provider credentials and token cache tuning
//! - `server` - HTTP server and CORS configuration

pub mod environment;
pub mod provider;
pub mod server;

use serde::{Deserialize, Serialize};

pub use environment::Environment;
pub use provider::{ProviderKind, ProviderSettings, TokenCacheSettings};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Verification provider configuration
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Token cache configuration
    #[serde(default)]
    pub token_cache: TokenCacheSettings,
}

impl AppConfig {
    /// Load configuration from plain environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            provider: ProviderSettings::from_env(),
            token_cache: TokenCacheSettings::from_env(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

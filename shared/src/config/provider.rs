//! Verification provider configuration module

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which provider implementation the server wires in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// In-process mock, for local development
    #[default]
    Mock,
    /// The remote provider API over HTTPS
    Prove,
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(ProviderKind::Mock),
            "prove" | "remote" => Ok(ProviderKind::Prove),
            _ => Err(format!("Invalid provider: {}", s)),
        }
    }
}

/// Credentials and endpoint selection for the verification provider
#[derive(Clone, Deserialize, Serialize)]
pub struct ProviderSettings {
    /// Provider implementation
    #[serde(default)]
    pub provider: ProviderKind,

    /// OAuth client id for the client-credentials exchange
    #[serde(default)]
    pub client_id: String,

    /// OAuth client secret for the client-credentials exchange
    #[serde(default)]
    pub client_secret: String,

    /// One of `uat-us`, `prod-us`, `uat-eu`, `prod-eu`
    #[serde(default = "default_server_environment")]
    pub server_environment: String,

    /// Overrides the environment's base URL (local stubs, tests)
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            client_id: String::new(),
            client_secret: String::new(),
            server_environment: default_server_environment(),
            base_url: None,
        }
    }
}

impl ProviderSettings {
    /// Create settings for the remote provider
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        server_environment: impl Into<String>,
    ) -> Self {
        Self {
            provider: ProviderKind::Prove,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            server_environment: server_environment.into(),
            base_url: None,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("PROVIDER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            client_id: std::env::var("PROVIDER_CLIENT_ID").unwrap_or_default(),
            client_secret: std::env::var("PROVIDER_CLIENT_SECRET").unwrap_or_default(),
            server_environment: std::env::var("PROVIDER_SERVER_ENVIRONMENT")
                .unwrap_or_else(|_| default_server_environment()),
            base_url: std::env::var("PROVIDER_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Whether credentials were supplied
    pub fn has_credentials(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

// The client secret must never end up in logs.
impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("provider", &self.provider)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("server_environment", &self.server_environment)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Access-token cache tuning
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct TokenCacheSettings {
    /// Seconds before the provider-reported expiry at which a token stops being served
    #[serde(default = "default_refresh_margin_seconds")]
    pub refresh_margin_seconds: i64,
}

impl Default for TokenCacheSettings {
    fn default() -> Self {
        Self {
            refresh_margin_seconds: default_refresh_margin_seconds(),
        }
    }
}

impl TokenCacheSettings {
    /// Read `TOKEN_REFRESH_MARGIN_SECONDS`
    pub fn from_env() -> Self {
        Self {
            refresh_margin_seconds: std::env::var("TOKEN_REFRESH_MARGIN_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_refresh_margin_seconds),
        }
    }
}

fn default_server_environment() -> String {
    String::from("uat-us")
}

fn default_refresh_margin_seconds() -> i64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let settings = ProviderSettings::new("client", "s3cr3t", "prod-us");
        let rendered = format!("{:?}", settings);
        assert!(rendered.contains("client"));
        assert!(!rendered.contains("s3cr3t"));
    }

    #[test]
    fn test_defaults() {
        let settings = ProviderSettings::default();
        assert_eq!(settings.provider, ProviderKind::Mock);
        assert_eq!(settings.server_environment, "uat-us");
        assert!(!settings.has_credentials());
        assert_eq!(TokenCacheSettings::default().refresh_margin_seconds, 300);
    }

    #[test]
    fn test_parse_provider_kind() {
        assert_eq!("PROVE".parse::<ProviderKind>(), Ok(ProviderKind::Prove));
        assert_eq!("mock".parse::<ProviderKind>(), Ok(ProviderKind::Mock));
        assert!("twilio".parse::<ProviderKind>().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let settings: ProviderSettings =
            serde_json::from_str(r#"{"provider":"prove","client_id":"id"}"#).unwrap();
        assert_eq!(settings.provider, ProviderKind::Prove);
        assert_eq!(settings.server_environment, "uat-us");
        assert!(settings.base_url.is_none());
    }
}

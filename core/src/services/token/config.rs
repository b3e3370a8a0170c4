//! Configuration for the token cache

use idv_shared::config::{ProviderSettings, TokenCacheSettings};
use std::fmt;

use crate::domain::entities::DEFAULT_REFRESH_MARGIN_SECONDS;

/// Credentials and refresh policy for the provider access token
#[derive(Clone)]
pub struct TokenCacheConfig {
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Seconds subtracted from the reported lifetime before a token is refreshed
    pub refresh_margin_seconds: i64,
}

impl TokenCacheConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_margin_seconds: DEFAULT_REFRESH_MARGIN_SECONDS,
        }
    }

    /// Build from the shared provider and cache settings
    pub fn from_settings(provider: &ProviderSettings, cache: &TokenCacheSettings) -> Self {
        Self {
            client_id: provider.client_id.clone(),
            client_secret: provider.client_secret.clone(),
            refresh_margin_seconds: cache.refresh_margin_seconds,
        }
    }

    pub fn with_refresh_margin(mut self, seconds: i64) -> Self {
        self.refresh_margin_seconds = seconds;
        self
    }
}

impl fmt::Debug for TokenCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCacheConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_margin_seconds", &self.refresh_margin_seconds)
            .finish()
    }
}

//! In-memory cache for the provider access token

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::entities::CachedToken;
use crate::errors::ProviderError;
use crate::services::verification::VerificationProviderTrait;

use super::clock::{Clock, SystemClock};
use super::config::TokenCacheConfig;

/// Process-wide holder of the provider access token.
///
/// Readers take the shared lock and return the cached value while it is
/// fresh. On a miss, callers serialise on `refresh_guard` and re-check the
/// entry before fetching, so a burst of concurrent misses costs exactly one
/// call to the token endpoint.
pub struct TokenCache<P: VerificationProviderTrait + ?Sized> {
    provider: Arc<P>,
    config: TokenCacheConfig,
    clock: Arc<dyn Clock>,
    entry: RwLock<Option<CachedToken>>,
    refresh_guard: Mutex<()>,
}

impl<P: VerificationProviderTrait + ?Sized> TokenCache<P> {
    /// Create an empty cache reading the wall clock
    pub fn new(provider: Arc<P>, config: TokenCacheConfig) -> Self {
        Self::with_clock(provider, config, Arc::new(SystemClock))
    }

    /// Create an empty cache with an explicit time source
    pub fn with_clock(provider: Arc<P>, config: TokenCacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            provider,
            config,
            clock,
            entry: RwLock::new(None),
            refresh_guard: Mutex::new(()),
        }
    }

    /// Return a usable bearer token, fetching a new one when needed
    ///
    /// # Errors
    ///
    /// * `ProviderError::Authentication` - The token exchange failed. Any
    ///   previously cached entry is left as it was.
    pub async fn get_token(&self) -> Result<String, ProviderError> {
        if let Some(value) = self.fresh_value().await {
            return Ok(value);
        }

        let _guard = self.refresh_guard.lock().await;

        // Another caller may have refreshed while we waited
        if let Some(value) = self.fresh_value().await {
            return Ok(value);
        }

        let grant = self
            .provider
            .request_token(&self.config.client_id, &self.config.client_secret)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    event = "token_fetch_failed",
                    "Failed to obtain provider access token"
                );
                match e {
                    ProviderError::Authentication { .. } => e,
                    other => ProviderError::authentication(other.to_string()),
                }
            })?;

        let margin = self.config.refresh_margin_seconds;
        if grant.expires_in <= margin {
            tracing::warn!(
                expires_in = grant.expires_in,
                refresh_margin = margin,
                event = "token_not_cached",
                "Provider token lifetime does not exceed the refresh margin; not caching"
            );
            return Ok(grant.access_token);
        }

        let Some(token) = CachedToken::from_grant(&grant, self.clock.now(), margin) else {
            tracing::warn!(
                expires_in = grant.expires_in,
                event = "token_not_cached",
                "Provider token lifetime is out of range; not caching"
            );
            return Ok(grant.access_token);
        };
        tracing::info!(
            expires_at = %token.expires_at(),
            event = "token_refreshed",
            "Provider access token refreshed"
        );
        *self.entry.write().await = Some(token);

        Ok(grant.access_token)
    }

    /// Instant the cached token stops being served, if one is held
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.entry.read().await.as_ref().map(CachedToken::expires_at)
    }

    async fn fresh_value(&self) -> Option<String> {
        let now = self.clock.now();
        self.entry
            .read()
            .await
            .as_ref()
            .filter(|token| token.is_fresh_at(now))
            .map(|token| token.value().to_string())
    }
}

//! Cached provider access token.

use chrono::{DateTime, Duration, Utc};
use std::fmt;

use crate::domain::value_objects::TokenGrant;

/// Default number of seconds before the provider-reported expiry at which
/// a cached token is no longer handed out
pub const DEFAULT_REFRESH_MARGIN_SECONDS: i64 = 300;

/// A bearer token together with the instant it stops being served.
///
/// `expires_at` already has the refresh margin subtracted, so the token is
/// usable strictly before that instant and never at or after it.
#[derive(Clone, PartialEq, Eq)]
pub struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    /// Build a cache entry from a freshly issued grant
    ///
    /// # Arguments
    ///
    /// * `grant` - Token and lifetime reported by the provider
    /// * `fetched_at` - When the grant was received
    /// * `margin_seconds` - Safety margin subtracted from the lifetime
    ///
    /// Returns `None` when the resulting instant is not representable.
    pub fn from_grant(
        grant: &TokenGrant,
        fetched_at: DateTime<Utc>,
        margin_seconds: i64,
    ) -> Option<Self> {
        let lifetime = grant
            .expires_in
            .checked_sub(margin_seconds)
            .and_then(Duration::try_seconds)?;
        let expires_at = fetched_at.checked_add_signed(lifetime)?;

        Some(Self {
            value: grant.access_token.clone(),
            expires_at,
        })
    }

    /// The bearer string
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Instant from which the token must be refreshed
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Whether the token may still be served at `now`
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

impl fmt::Debug for CachedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedToken")
            .field("value", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

//! Authentication handoff
//!
//! The vendor widget is not reimplemented; the flow drives it through
//! [`Authenticator`]. Which fallback the widget uses is decided once, from
//! the device class, when the flow is created.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ClientResult;

static MOBILE_USER_AGENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini")
        .expect("valid user agent regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    pub fn from_user_agent(user_agent: &str) -> Self {
        if MOBILE_USER_AGENT.is_match(user_agent) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Fallback the widget uses when instant authentication is not possible
///
/// Each variant names the vendor builder configuration an [`Authenticator`]
/// must set up. This pairing is the reverse of the earlier browser client,
/// which used the OTP fallback on mobile and the instant link on desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStrategy {
    /// Mobile: `withAuthFinishStep` + `withInstantLinkFallback`, default role;
    /// a link is sent to the phone
    MobileLinkFallback,
    /// Desktop: `withAuthFinishStep` + `withOtpFallback` + `withRole("secondary")`;
    /// the user types a one-time passcode
    DesktopOtpFallback,
}

impl AuthStrategy {
    pub fn for_device(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Mobile => AuthStrategy::MobileLinkFallback,
            DeviceClass::Desktop => AuthStrategy::DesktopOtpFallback,
        }
    }

    /// `flowType` sent with the start request
    pub fn flow_type(&self) -> &'static str {
        match self {
            AuthStrategy::MobileLinkFallback => "mobile",
            AuthStrategy::DesktopOtpFallback => "desktop",
        }
    }
}

/// What the widget reports once the user finished authenticating
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    pub auth_id: String,
}

/// Vendor authentication widget
///
/// `authenticate` resolves when the widget reports completion and fails
/// with [`ClientError::Authentication`](crate::error::ClientError) when it
/// reports failure. There is no timeout: user prompts may wait indefinitely.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, auth_token: &str, strategy: AuthStrategy) -> ClientResult<AuthResult>;
}

#[async_trait]
impl<T: Authenticator + ?Sized> Authenticator for std::sync::Arc<T> {
    async fn authenticate(&self, auth_token: &str, strategy: AuthStrategy) -> ClientResult<AuthResult> {
        (**self).authenticate(auth_token, strategy).await
    }
}

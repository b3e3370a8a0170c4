//! Provider server environments

use std::fmt;

/// Deployment of the provider API a client talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ServerEnvironment {
    #[default]
    UatUs,
    ProdUs,
    UatEu,
    ProdEu,
}

impl ServerEnvironment {
    /// Resolve a configured name. Anything unrecognised falls back to `uat-us`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "uat-us" => ServerEnvironment::UatUs,
            "prod-us" => ServerEnvironment::ProdUs,
            "uat-eu" => ServerEnvironment::UatEu,
            "prod-eu" => ServerEnvironment::ProdEu,
            other => {
                tracing::warn!(
                    server_environment = other,
                    event = "unknown_server_environment",
                    "Unknown provider server environment, using uat-us"
                );
                ServerEnvironment::UatUs
            }
        }
    }

    /// Base URL of the provider API in this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            ServerEnvironment::UatUs => "https://platform.uat.proveapis.com",
            ServerEnvironment::ProdUs => "https://platform.proveapis.com",
            ServerEnvironment::UatEu => "https://platform.uat.eu.proveapis.com",
            ServerEnvironment::ProdEu => "https://platform.eu.proveapis.com",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ServerEnvironment::UatUs => "uat-us",
            ServerEnvironment::ProdUs => "prod-us",
            ServerEnvironment::UatEu => "uat-eu",
            ServerEnvironment::ProdEu => "prod-eu",
        }
    }
}

impl fmt::Display for ServerEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

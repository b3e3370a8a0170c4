//! Shared utilities and common types for the identity verification server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The uniform API response envelope
//! - Utility functions (phone and SSN validation, log masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, Environment, ProviderKind, ProviderSettings, ServerConfig, TokenCacheSettings,
};
pub use types::ApiResponse;
pub use utils::{phone, validation};

//! # IdVerify Core
//!
//! Core business logic for the identity verification backend.
//! This crate contains the request value objects, the provider access token
//! cache, the provider trait and the verification orchestrator.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;

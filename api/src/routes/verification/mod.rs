//! Verification route handlers
//!
//! This module contains the three steps of phone-based identity verification:
//! - Start (phone number and SSN suffix, returns the widget token)
//! - Validate (phone possession check)
//! - Complete (full identity check)

pub mod complete;
pub mod start;
pub mod validate;

use std::sync::Arc;

use idv_core::services::verification::{VerificationProviderTrait, VerificationService};

pub use complete::complete_verification;
pub use start::start_verification;
pub use validate::validate_phone;

/// Application state that holds shared services
pub struct AppState<P>
where
    P: VerificationProviderTrait + ?Sized,
{
    pub verification_service: Arc<VerificationService<P>>,
}

impl<P: VerificationProviderTrait + ?Sized> AppState<P> {
    pub fn new(verification_service: Arc<VerificationService<P>>) -> Self {
        Self {
            verification_service,
        }
    }
}

impl<P: VerificationProviderTrait + ?Sized> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            verification_service: Arc::clone(&self.verification_service),
        }
    }
}

//! Business services containing domain logic and use cases.

pub mod token;
pub mod verification;

// Re-export commonly used types
pub use token::{Clock, ManualClock, SystemClock, TokenCache, TokenCacheConfig};
pub use verification::{MockVerificationProvider, VerificationProviderTrait, VerificationService};

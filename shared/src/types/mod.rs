//! Type definitions shared between the server and its clients
//!
//! - `response` - the uniform API response envelope

pub mod response;

pub use response::{ApiResponse, FieldErrors};

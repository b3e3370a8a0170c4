pub mod error;

pub use error::{domain_error_response, field_errors, json_error_handler, validation_response};

//! API response envelope

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Field name to the list of messages reported for it
pub type FieldErrors = HashMap<String, Vec<String>>;

/// Standard API response wrapper
///
/// Every endpoint answers with this shape, on success and on failure:
///
/// ```json
/// { "success": true, "data": { ... }, "message": "..." }
/// { "success": false, "message": "...", "errors": { "PhoneNumber": ["..."] } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Response data (present on success)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Field-level validation errors (present on 400 responses)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            errors: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors: None,
        }
    }

    /// Create a validation error response carrying per-field messages
    pub fn validation(message: impl Into<String>, errors: FieldErrors) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors: Some(errors),
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Map the data to a different type
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            message: self.message,
            errors: self.errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_omits_errors() {
        let response = ApiResponse::success(json!({"correlationId": "corr-1"}), "ok");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], json!(true));
        assert_eq!(value["data"]["correlationId"], json!("corr-1"));
        assert_eq!(value["message"], json!("ok"));
        assert!(value.get("errors").is_none());
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let response: ApiResponse<()> = ApiResponse::error("An error occurred");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], json!(false));
        assert!(value.get("data").is_none());
        assert_eq!(value["message"], json!("An error occurred"));
    }

    #[test]
    fn test_validation_envelope_lists_fields() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "LastFourSSN".to_string(),
            vec!["must be exactly 4 digits".to_string()],
        );
        let response: ApiResponse<()> = ApiResponse::validation("Invalid request data", errors);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["errors"]["LastFourSSN"][0], json!("must be exactly 4 digits"));
    }

    #[test]
    fn test_envelope_deserializes_without_optional_fields() {
        let response: ApiResponse<String> =
            serde_json::from_value(json!({"success": false})).unwrap();
        assert!(!response.is_success());
        assert!(response.message.is_none());
        assert!(response.into_data().is_none());
    }
}

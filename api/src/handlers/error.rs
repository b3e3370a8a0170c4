//! Conversion of validation and domain errors into the response envelope

use actix_web::{error::JsonPayloadError, HttpRequest, HttpResponse};
use validator::{ValidationErrors, ValidationErrorsKind};

use idv_core::errors::DomainError;
use idv_shared::types::{ApiResponse, FieldErrors};

pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request data";

/// Field key used when the body could not be parsed at all
pub const BODY_FIELD: &str = "Body";

/// Flatten validator output into `{"Parent.Child[0].Field": [messages]}`
/// with PascalCase property names
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    collect(errors, None, &mut out);
    out
}

fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut FieldErrors) {
    for (field, kind) in errors.errors() {
        let name = match prefix {
            Some(prefix) => format!("{}.{}", prefix, property_name(field)),
            None => property_name(field),
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages = out.entry(name).or_default();
                messages.extend(field_errors.iter().map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, Some(&name), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, Some(&format!("{}[{}]", name, index)), out);
                }
            }
        }
    }
}

/// `last_four_ssn` / `lastFourSSN` → `LastFourSSN`, `first_name` → `FirstName`
pub fn property_name(field: &str) -> String {
    match field {
        "last_four_ssn" | "lastFourSSN" => "LastFourSSN".to_string(),
        other => other
            .split('_')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect(),
    }
}

/// 400 with the per-field messages
pub fn validation_response(errors: &ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::validation(
        INVALID_REQUEST_MESSAGE,
        field_errors(errors),
    ))
}

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Provider faults never leak to the client: the body carries only
/// `public_message`.
pub fn domain_error_response(
    request_id: &str,
    error: &DomainError,
    public_message: &str,
) -> HttpResponse {
    match error {
        DomainError::ValidationErr(validation) => {
            log::warn!("[{}] Request rejected by domain validation: {}", request_id, validation);
            let mut errors = FieldErrors::new();
            errors.insert(validation.field().to_string(), vec![validation.to_string()]);
            HttpResponse::BadRequest().json(ApiResponse::<()>::validation(
                INVALID_REQUEST_MESSAGE,
                errors,
            ))
        }
        DomainError::Application { message, source } => {
            log::error!(
                "[{}] {}: {} (caused by: {})",
                request_id,
                public_message,
                message,
                source
            );
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error(public_message))
        }
    }
}

/// `JsonConfig` error handler: malformed bodies get the same 400 envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected malformed JSON body on {}: {}", req.path(), err);

    let mut errors = FieldErrors::new();
    errors.insert(BODY_FIELD.to_string(), vec![err.to_string()]);
    let response =
        HttpResponse::BadRequest().json(ApiResponse::<()>::validation(INVALID_REQUEST_MESSAGE, errors));

    actix_web::error::InternalError::from_response(err, response).into()
}

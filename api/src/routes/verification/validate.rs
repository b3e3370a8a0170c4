use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use idv_core::domain::value_objects::ValidateVerificationRequest;
use idv_core::errors::DomainError;
use idv_core::services::verification::VerificationProviderTrait;
use idv_shared::types::ApiResponse;

use super::AppState;
use crate::dto::ValidateVerificationDto;
use crate::handlers::error::{domain_error_response, validation_response};
use crate::middleware::request_id::RequestIdExt;

pub const SUCCESS_MESSAGE: &str = "Phone validation completed";
pub const FAILURE_MESSAGE: &str = "An error occurred during phone validation";

/// Handler for POST /api/verification/validate
///
/// A provider rejection is still a 200: `data` carries
/// `{"success": false, "message": "Phone validation failed"}`.
pub async fn validate_phone<P>(
    req: HttpRequest,
    state: web::Data<AppState<P>>,
    request: web::Json<ValidateVerificationDto>,
) -> HttpResponse
where
    P: VerificationProviderTrait + ?Sized + 'static,
{
    let request_id = req.request_id();

    if let Err(validation_errors) = request.0.validate() {
        log::warn!("[{}] Validation failed for validate request", request_id);
        return validation_response(&validation_errors);
    }

    let command = match ValidateVerificationRequest::new(request.into_inner().correlation_id) {
        Ok(command) => command,
        Err(e) => return domain_error_response(&request_id, &DomainError::from(e), FAILURE_MESSAGE),
    };

    log::info!(
        "[{}] Validating phone for correlation id: {}",
        request_id,
        command.correlation_id()
    );

    match state.verification_service.validate_phone(command).await {
        Ok(outcome) => {
            log::info!(
                "[{}] Phone validation finished, accepted: {}",
                request_id,
                outcome.is_accepted()
            );
            HttpResponse::Ok().json(ApiResponse::success(outcome, SUCCESS_MESSAGE))
        }
        Err(error) => domain_error_response(&request_id, &error, FAILURE_MESSAGE),
    }
}

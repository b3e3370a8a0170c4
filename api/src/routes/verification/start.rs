use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use idv_core::domain::value_objects::StartVerificationRequest;
use idv_core::errors::DomainError;
use idv_core::services::verification::VerificationProviderTrait;
use idv_shared::types::ApiResponse;
use idv_shared::utils::mask_phone_number;

use super::AppState;
use crate::dto::StartVerificationDto;
use crate::handlers::error::{domain_error_response, validation_response};
use crate::middleware::request_id::RequestIdExt;

pub const SUCCESS_MESSAGE: &str = "Verification initiated successfully";
pub const FAILURE_MESSAGE: &str = "An error occurred while initiating verification";

/// Handler for POST /api/verification/start
///
/// # Request Body
///
/// ```json
/// { "phoneNumber": "2001001686", "lastFourSSN": "1234", "flowType": "desktop" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "data": { "authToken": "...", "correlationId": "..." },
///     "message": "Verification initiated successfully"
/// }
/// ```
///
/// ## Errors
/// 400 with per-field messages, 500 with a generic message
pub async fn start_verification<P>(
    req: HttpRequest,
    state: web::Data<AppState<P>>,
    request: web::Json<StartVerificationDto>,
) -> HttpResponse
where
    P: VerificationProviderTrait + ?Sized + 'static,
{
    let request_id = req.request_id();

    log::info!(
        "[{}] Processing start request for phone: {}, flow: {}",
        request_id,
        mask_phone_number(&request.phone_number),
        request.flow_type
    );

    if let Err(validation_errors) = request.0.validate() {
        log::warn!(
            "[{}] Validation failed for start request: {:?}",
            request_id,
            validation_errors.field_errors().keys().collect::<Vec<_>>()
        );
        return validation_response(&validation_errors);
    }

    let dto = request.into_inner();
    let command = match StartVerificationRequest::new(dto.phone_number, dto.last_four_ssn, dto.flow_type) {
        Ok(command) => command,
        Err(e) => return domain_error_response(&request_id, &DomainError::from(e), FAILURE_MESSAGE),
    };

    match state.verification_service.start_verification(command).await {
        Ok(result) => {
            log::info!(
                "[{}] Verification started, correlation id: {}",
                request_id,
                result.correlation_id
            );
            HttpResponse::Ok().json(ApiResponse::success(result, SUCCESS_MESSAGE))
        }
        Err(error) => domain_error_response(&request_id, &error, FAILURE_MESSAGE),
    }
}
